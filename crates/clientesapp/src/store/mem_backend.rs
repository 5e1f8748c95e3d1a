use super::backend::StorageBackend;
use crate::error::{ClientesError, Result};
use crate::model::CustomerRecord;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since clientes is single-threaded.
/// `None` rows mean "never saved", mirroring a missing data file.
pub struct MemBackend {
    rows: RefCell<Option<Vec<CustomerRecord>>>,
    location: PathBuf,
    simulate_write_error: RefCell<bool>,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self {
            rows: RefCell::new(None),
            location: PathBuf::from("memory://clientes.csv"),
            simulate_write_error: RefCell::new(false),
        }
    }
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that already holds `rows`, as if loaded from a file.
    pub fn with_records(rows: Vec<CustomerRecord>) -> Self {
        let backend = Self::new();
        *backend.rows.borrow_mut() = Some(rows);
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Snapshot of the last saved rows.
    pub fn saved_records(&self) -> Option<Vec<CustomerRecord>> {
        self.rows.borrow().clone()
    }
}

impl StorageBackend for MemBackend {
    fn load_records(&self) -> Result<Option<Vec<CustomerRecord>>> {
        Ok(self.rows.borrow().clone())
    }

    fn save_records(&self, records: &[&CustomerRecord]) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(ClientesError::Store("Simulated write error".to_string()));
        }
        *self.rows.borrow_mut() = Some(records.iter().map(|r| (*r).clone()).collect());
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.location
    }
}
