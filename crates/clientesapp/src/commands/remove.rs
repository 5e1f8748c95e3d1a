use crate::commands::{CmdMessage, CmdResult};
use crate::document::{DocumentEvent, Emitter};
use crate::error::{ClientesError, Result};
use crate::store::{CustomerStore, StorageBackend};
use crate::validation::is_present;
use chrono::NaiveDateTime;
use tracing::warn;

pub fn run<B: StorageBackend, E: Emitter>(
    store: &mut CustomerStore<B>,
    emitter: &E,
    identifier: &str,
    reason: &str,
    at: NaiveDateTime,
) -> Result<CmdResult> {
    if !is_present(reason) {
        return Err(ClientesError::Document(
            "A deletion reason is required".to_string(),
        ));
    }

    let record = store.remove(identifier)?;

    let path = match emitter.emit(&record, &DocumentEvent::deletion(at, reason)) {
        Ok(path) => path,
        Err(e) => {
            warn!(key = %record.key(), error = %e, "deletion document failed, restoring customer");
            store.register(record)?;
            return Err(e);
        }
    };

    let mut result = CmdResult::default()
        .with_affected_records(vec![record])
        .with_document_paths(vec![path.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Customer deleted successfully! Document generated: {}",
        path.display()
    )));
    Ok(result)
}
