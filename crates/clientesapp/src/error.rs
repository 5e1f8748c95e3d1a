use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientesError {
    #[error("Customer already registered: {0}")]
    AlreadyExists(String),

    #[error("Customer not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Data file error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] confique::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Document error: {0}")]
    Document(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl ClientesError {
    /// Input problems the operator can correct at the prompt.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::AlreadyExists(_) | Self::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, ClientesError>;
