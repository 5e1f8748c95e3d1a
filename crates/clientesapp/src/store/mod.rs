//! # Storage Layer
//!
//! The record store keeps every customer in memory for the whole session and
//! synchronizes with disk only at two points:
//!
//! 1. **Open**: the data file is read once, each row is keyed by its normalized CPF.
//! 2. **Save**: the whole mapping is written back, replacing the file.
//!
//! Between those points all mutations ([`CustomerStore::register`],
//! [`CustomerStore::remove`]) touch only the in-memory map.
//!
//! ## Keys vs Display Values
//!
//! The map key is the digits-only CPF, so `529.982.247-25` and `52998224725` collide
//! as duplicates. The record itself keeps the form the operator typed and that form is
//! what gets written back; the key never appears on disk.
//!
//! ## Missing File
//!
//! A missing data file is the normal first-run state, not an error:
//! [`CustomerStore::open`] returns an empty store and [`StoreStatus::StartedEmpty`]
//! so the caller can tell the operator.
//!
//! ## Atomic Saves
//!
//! Backends must replace the file atomically. [`csv_backend::CsvBackend`] writes a
//! temporary file next to the target and renames it over the original, so an
//! interrupted save leaves the previous file intact.
//!
//! ## Implementations
//!
//! - [`csv_backend::CsvBackend`]: production, comma-delimited file.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.
//!
//! ## File Layout
//!
//! ```text
//! Nome,CPF,Email,Endereço,Número,Complemento,Telefone
//! Maria Oliveira,529.982.247-25,maria@example.com,Rua A,10,,11999999999
//! ```

use crate::error::{ClientesError, Result};
use crate::model::CustomerRecord;
use crate::validation::normalize_identifier;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, warn};

pub mod backend;
pub mod csv_backend;
pub mod mem_backend;

pub use backend::StorageBackend;

/// What [`CustomerStore::open`] found on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreStatus {
    /// `duplicates` rows were dropped because a later row had the same CPF.
    Loaded { count: usize, duplicates: usize },
    StartedEmpty,
}

/// In-memory customer mapping bound to a storage backend.
pub struct CustomerStore<B: StorageBackend> {
    backend: B,
    records: BTreeMap<String, CustomerRecord>,
}

impl<B: StorageBackend> CustomerStore<B> {
    /// An empty store that has not read from `backend`.
    pub fn empty(backend: B) -> Self {
        Self {
            backend,
            records: BTreeMap::new(),
        }
    }

    /// Loads every persisted row from `backend`.
    ///
    /// Rows sharing a normalized CPF collapse to the last one in file order.
    pub fn open(backend: B) -> Result<(Self, StoreStatus)> {
        let mut store = Self::empty(backend);
        let rows = match store.backend.load_records()? {
            Some(rows) => rows,
            None => {
                info!(path = %store.location().display(), "data file not found, starting empty");
                return Ok((store, StoreStatus::StartedEmpty));
            }
        };

        let mut duplicates = 0;
        for record in rows {
            let key = record.key();
            if store.records.insert(key.clone(), record).is_some() {
                warn!(key = %key, "duplicate CPF in data file, keeping the last row");
                duplicates += 1;
            }
        }

        let count = store.records.len();
        info!(path = %store.location().display(), count, duplicates, "data file loaded");
        Ok((store, StoreStatus::Loaded { count, duplicates }))
    }

    /// Writes every record back, replacing the persisted rows.
    pub fn save(&self) -> Result<()> {
        let rows: Vec<&CustomerRecord> = self.records().collect();
        self.backend.save_records(&rows)?;
        info!(path = %self.location().display(), count = rows.len(), "data file saved");
        Ok(())
    }

    /// Inserts `record` unless its normalized CPF is already present.
    pub fn register(&mut self, record: CustomerRecord) -> Result<()> {
        let key = record.key();
        if self.records.contains_key(&key) {
            return Err(ClientesError::AlreadyExists(key));
        }
        debug!(key = %key, "customer registered");
        self.records.insert(key, record);
        Ok(())
    }

    /// Removes and returns the record for `identifier` (any formatting).
    pub fn remove(&mut self, identifier: &str) -> Result<CustomerRecord> {
        let key = normalize_identifier(identifier);
        match self.records.remove(&key) {
            Some(record) => {
                debug!(key = %key, "customer removed");
                Ok(record)
            }
            None => Err(ClientesError::NotFound(key)),
        }
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.records.contains_key(&normalize_identifier(identifier))
    }

    pub fn get(&self, identifier: &str) -> Option<&CustomerRecord> {
        self.records.get(&normalize_identifier(identifier))
    }

    /// Records in key order.
    pub fn records(&self) -> impl Iterator<Item = &CustomerRecord> {
        self.records.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn location(&self) -> &Path {
        self.backend.location()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

pub type InMemoryStore = CustomerStore<mem_backend::MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        CustomerStore::empty(mem_backend::MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// A syntactically valid customer with the given CPF.
    pub fn customer(name: &str, identifier: &str) -> CustomerRecord {
        CustomerRecord {
            name: name.to_string(),
            identifier: identifier.to_string(),
            email: "cliente@example.com".to_string(),
            address: "Rua das Flores".to_string(),
            number: "100".to_string(),
            complement: String::new(),
            phone: "11988887777".to_string(),
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_customer(mut self, name: &str, identifier: &str) -> Self {
            self.store.register(customer(name, identifier)).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{customer, StoreFixture};
    use super::mem_backend::MemBackend;
    use super::*;

    #[test]
    fn open_without_saved_rows_starts_empty() {
        let (store, status) = CustomerStore::open(MemBackend::new()).unwrap();
        assert_eq!(status, StoreStatus::StartedEmpty);
        assert!(store.is_empty());
    }

    #[test]
    fn open_keys_rows_by_normalized_identifier() {
        let backend = MemBackend::with_records(vec![
            customer("Maria Oliveira", "529.982.247-25"),
            customer("João Batista", "12345678909"),
        ]);
        let (store, status) = CustomerStore::open(backend).unwrap();

        assert_eq!(
            status,
            StoreStatus::Loaded {
                count: 2,
                duplicates: 0
            }
        );
        assert_eq!(store.keys().collect::<Vec<_>>(), ["12345678909", "52998224725"]);
        assert_eq!(store.get("52998224725").unwrap().identifier, "529.982.247-25");
    }

    #[test]
    fn open_collapses_duplicate_rows() {
        let backend = MemBackend::with_records(vec![
            customer("First Entry", "52998224725"),
            customer("Second Entry", "529.982.247-25"),
        ]);
        let (store, status) = CustomerStore::open(backend).unwrap();
        assert_eq!(
            status,
            StoreStatus::Loaded {
                count: 1,
                duplicates: 1
            }
        );
        assert_eq!(store.get("52998224725").unwrap().name, "Second Entry");
    }

    #[test]
    fn register_rejects_duplicates_without_mutation() {
        let mut store = StoreFixture::new()
            .with_customer("Maria Oliveira", "529.982.247-25")
            .store;

        let result = store.register(customer("Outra Pessoa", "52998224725"));
        match result {
            Err(ClientesError::AlreadyExists(key)) => assert_eq!(key, "52998224725"),
            other => panic!("Expected AlreadyExists, got {:?}", other),
        }
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("52998224725").unwrap().name, "Maria Oliveira");
    }

    #[test]
    fn remove_accepts_any_formatting() {
        let mut store = StoreFixture::new()
            .with_customer("Maria Oliveira", "52998224725")
            .store;
        let removed = store.remove("529.982.247-25").unwrap();
        assert_eq!(removed.name, "Maria Oliveira");
        assert!(store.is_empty());
    }

    #[test]
    fn remove_missing_is_not_found_without_mutation() {
        let mut store = StoreFixture::new()
            .with_customer("Maria Oliveira", "52998224725")
            .store;
        match store.remove("12345678909") {
            Err(ClientesError::NotFound(key)) => assert_eq!(key, "12345678909"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn save_writes_display_values_in_key_order() {
        let mut store = InMemoryStore::new();
        store.register(customer("Maria Oliveira", "529.982.247-25")).unwrap();
        store.register(customer("João Batista", "123.456.789-09")).unwrap();
        store.save().unwrap();

        let saved = store.backend().saved_records().unwrap();
        let ids: Vec<&str> = saved.iter().map(|r| r.identifier.as_str()).collect();
        assert_eq!(ids, ["123.456.789-09", "529.982.247-25"]);
    }

    #[test]
    fn save_error_propagates() {
        let mut store = InMemoryStore::new();
        store.register(customer("Maria Oliveira", "52998224725")).unwrap();
        store.backend().set_simulate_write_error(true);

        assert!(matches!(store.save(), Err(ClientesError::Store(_))));
        assert!(store.backend().saved_records().is_none());
    }

    #[test]
    fn contains_normalizes_input() {
        let store = StoreFixture::new()
            .with_customer("Maria Oliveira", "52998224725")
            .store;
        assert!(store.contains("529.982.247-25"));
        assert!(!store.contains("12345678909"));
    }
}
