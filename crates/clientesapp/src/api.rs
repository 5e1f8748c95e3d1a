//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every clientes operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Owns the session state**: the [`CustomerStore`] and the [`Emitter`]. There is
//!   no global store; a UI creates one `ClientesApi` and passes `&mut` to it around.
//! - **Dispatches** to the command functions
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Prompting or printing**: the UI decides how to ask and how to show results
//!
//! ## Generic Over Backends
//!
//! `ClientesApi<B: StorageBackend, E: Emitter>`:
//! - Production: [`FileApi`] = `ClientesApi<CsvBackend, FileEmitter>`
//! - Testing: `ClientesApi<MemBackend, RecordingEmitter>`

use crate::commands::{self, CmdResult};
use crate::config::ClientesConfig;
use crate::document::{Emitter, FileEmitter};
use crate::error::Result;
use crate::model::CustomerRecord;
use crate::store::csv_backend::CsvBackend;
use crate::store::{CustomerStore, StorageBackend};
use chrono::NaiveDateTime;

pub use crate::commands::{CmdMessage, MessageLevel};

pub type FileApi = ClientesApi<CsvBackend, FileEmitter>;

/// The main API facade for clientes operations.
pub struct ClientesApi<B: StorageBackend, E: Emitter> {
    store: CustomerStore<B>,
    emitter: E,
}

impl<B: StorageBackend, E: Emitter> ClientesApi<B, E> {
    pub fn new(store: CustomerStore<B>, emitter: E) -> Self {
        Self { store, emitter }
    }

    /// Loads the store from `backend`; the result carries the load notice.
    pub fn open(backend: B, emitter: E) -> Result<(Self, CmdResult)> {
        let (store, result) = commands::open::run(backend)?;
        Ok((Self::new(store, emitter), result))
    }

    pub fn register(&mut self, record: CustomerRecord, at: NaiveDateTime) -> Result<CmdResult> {
        commands::register::run(&mut self.store, &self.emitter, record, at)
    }

    pub fn remove(
        &mut self,
        identifier: &str,
        reason: &str,
        at: NaiveDateTime,
    ) -> Result<CmdResult> {
        commands::remove::run(&mut self.store, &self.emitter, identifier, reason, at)
    }

    pub fn save(&self) -> Result<CmdResult> {
        commands::save::run(&self.store)
    }

    /// Whether `identifier` (any formatting) is registered.
    pub fn contains(&self, identifier: &str) -> bool {
        self.store.contains(identifier)
    }

    pub fn store(&self) -> &CustomerStore<B> {
        &self.store
    }

    pub fn emitter(&self) -> &E {
        &self.emitter
    }
}

impl FileApi {
    /// Production wiring: CSV data file and document directory from `config`.
    pub fn from_config(config: &ClientesConfig) -> Result<(Self, CmdResult)> {
        let backend = CsvBackend::new(&config.data_file);
        let emitter =
            FileEmitter::new(&config.documents_dir).with_file_ext(&config.document_ext());
        Self::open(backend, emitter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::RecordingEmitter;
    use crate::error::ClientesError;
    use crate::store::fixtures::customer;
    use crate::store::mem_backend::MemBackend;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap()
    }

    fn mem_api() -> ClientesApi<MemBackend, RecordingEmitter> {
        ClientesApi::open(MemBackend::new(), RecordingEmitter::new())
            .unwrap()
            .0
    }

    #[test]
    fn register_then_remove_dispatches_to_commands() {
        let mut api = mem_api();
        api.register(customer("Maria Oliveira", "52998224725"), at())
            .unwrap();
        assert!(api.contains("529.982.247-25"));

        api.remove("52998224725", "Cliente solicitou.", at()).unwrap();
        assert!(!api.contains("52998224725"));
        assert_eq!(api.emitter().pages().len(), 2);
    }

    #[test]
    fn save_goes_through_backend() {
        let mut api = mem_api();
        api.register(customer("Maria Oliveira", "52998224725"), at())
            .unwrap();
        api.save().unwrap();
        assert_eq!(api.store().backend().saved_records().unwrap().len(), 1);
    }

    #[test]
    fn recoverable_errors_surface_as_typed_errors() {
        let mut api = mem_api();
        let err = api.remove("52998224725", "x", at()).unwrap_err();
        assert!(err.is_recoverable());
        assert!(matches!(err, ClientesError::NotFound(_)));
    }

    #[test]
    fn from_config_wires_files() {
        let dir = TempDir::new().unwrap();
        let config = ClientesConfig {
            data_file: dir.path().join("clientes.csv"),
            documents_dir: dir.path().join("docs"),
            document_ext: "md".to_string(),
            ..Default::default()
        };

        let (mut api, opened) = FileApi::from_config(&config).unwrap();
        assert!(opened.messages[0].content.contains("not found"));

        let result = api
            .register(customer("Maria Oliveira", "52998224725"), at())
            .unwrap();
        assert_eq!(
            result.document_paths,
            vec![dir.path().join("docs").join("cadastro_52998224725.md")]
        );
        api.save().unwrap();
        assert!(fs::read_to_string(&config.data_file)
            .unwrap()
            .contains("52998224725"));
    }
}
