//! # Configuration
//!
//! Clientes configuration is managed by [`confique`], which handles layered loading
//! from a TOML file, environment variables and compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Command-line flags** (applied by the binary on top of the loaded config).
//! 2. **Environment variables**: `CLIENTES_DATA_FILE`, `CLIENTES_DOCUMENTS_DIR`, etc.
//! 3. **Config file**: `clientes.toml` in the working directory, if present.
//! 4. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_file` | `clientes.csv` | Customer data file |
//! | `documents_dir` | `.` | Where event documents are written |
//! | `document_ext` | `.txt` | Extension of event documents; `.pdf` writes PDF pages |
//! | `name_min_len` | `6` | Shortest accepted full name, in characters |
//! | `name_max_len` | `30` | Longest accepted full name, in characters |
//! | `phone_min_digits` | `10` | Fewest digits in a phone number (DDD + number) |

use crate::error::{ClientesError, Result};
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "clientes.toml";

/// Configuration for clientes, optionally stored in `clientes.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ClientesConfig {
    /// Customer data file (comma-delimited).
    #[config(env = "CLIENTES_DATA_FILE", default = "clientes.csv")]
    pub data_file: PathBuf,

    /// Directory for generated registration/deletion documents.
    #[config(env = "CLIENTES_DOCUMENTS_DIR", default = ".")]
    pub documents_dir: PathBuf,

    /// Extension for generated documents (e.g. ".txt", ".md"); ".pdf" renders PDF.
    #[config(env = "CLIENTES_DOCUMENT_EXT", default = ".txt")]
    pub document_ext: String,

    #[config(env = "CLIENTES_NAME_MIN_LEN", default = 6)]
    pub name_min_len: usize,

    #[config(env = "CLIENTES_NAME_MAX_LEN", default = 30)]
    pub name_max_len: usize,

    #[config(env = "CLIENTES_PHONE_MIN_DIGITS", default = 10)]
    pub phone_min_digits: usize,
}

impl Default for ClientesConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("clientes.csv"),
            documents_dir: PathBuf::from("."),
            document_ext: ".txt".to_string(),
            name_min_len: 6,
            name_max_len: 30,
            phone_min_digits: 10,
        }
    }
}

impl ClientesConfig {
    /// Loads env vars and `<dir>/clientes.toml` over the defaults.
    pub fn load(dir: &Path) -> Result<Self> {
        let config = Self::builder()
            .env()
            .file(dir.join(CONFIG_FILE_NAME))
            .load()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.name_min_len > self.name_max_len {
            return Err(ClientesError::InvalidConfig(format!(
                "name_min_len ({}) is greater than name_max_len ({})",
                self.name_min_len, self.name_max_len
            )));
        }
        if self.document_ext.trim_start_matches('.').is_empty() {
            return Err(ClientesError::InvalidConfig(
                "document_ext cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the document extension, normalized to start with a dot.
    pub fn document_ext(&self) -> String {
        if self.document_ext.starts_with('.') {
            self.document_ext.clone()
        } else {
            format!(".{}", self.document_ext)
        }
    }
}
