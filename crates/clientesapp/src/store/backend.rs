use crate::error::Result;
use crate::model::CustomerRecord;
use std::path::Path;

/// Abstract interface for raw record persistence.
/// This trait handles the "how" of storage (CSV file vs memory),
/// while CustomerStore handles the "what" (keying, duplicates, lookups).
pub trait StorageBackend {
    /// Load every persisted row, in file order.
    /// Returns Ok(None) if nothing has been persisted yet (missing file).
    /// Returns Err only on actual I/O or format errors.
    fn load_records(&self) -> Result<Option<Vec<CustomerRecord>>>;

    /// Replace the persisted rows with `records`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save_records(&self, records: &[&CustomerRecord]) -> Result<()>;

    /// Where the rows live. For CsvBackend, the real path. For MemBackend, a virtual path.
    fn location(&self) -> &Path;
}
