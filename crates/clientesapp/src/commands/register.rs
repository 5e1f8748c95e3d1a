use crate::commands::{CmdMessage, CmdResult};
use crate::document::{DocumentEvent, Emitter};
use crate::error::Result;
use crate::model::CustomerRecord;
use crate::store::{CustomerStore, StorageBackend};
use chrono::NaiveDateTime;
use tracing::warn;

pub fn run<B: StorageBackend, E: Emitter>(
    store: &mut CustomerStore<B>,
    emitter: &E,
    record: CustomerRecord,
    at: NaiveDateTime,
) -> Result<CmdResult> {
    let key = record.key();
    store.register(record.clone())?;

    let path = match emitter.emit(&record, &DocumentEvent::registration(at)) {
        Ok(path) => path,
        Err(e) => {
            warn!(key = %key, error = %e, "registration document failed, rolling back");
            store.remove(&key)?;
            return Err(e);
        }
    };

    let mut result = CmdResult::default()
        .with_affected_records(vec![record])
        .with_document_paths(vec![path.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Customer registered successfully! Document generated: {}",
        path.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::RecordingEmitter;
    use crate::error::ClientesError;
    use crate::model::tests::maria;
    use crate::store::fixtures::{customer, StoreFixture};
    use crate::store::InMemoryStore;
    use chrono::NaiveDate;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn registers_and_emits_document() {
        let mut store = InMemoryStore::new();
        let emitter = RecordingEmitter::new();
        let mut record = maria();
        record.identifier = "12345678909".to_string();

        let result = run(&mut store, &emitter, record, at()).unwrap();

        assert_eq!(store.len(), 1);
        assert!(store.contains("12345678909"));
        assert_eq!(result.affected_records[0].name, "Maria Oliveira");
        let page = emitter.page("cadastro_12345678909.txt").unwrap();
        assert!(page.contains("Issued: 05/03/2024 09:30:00"));
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn duplicate_is_rejected_and_nothing_is_emitted() {
        let mut store = StoreFixture::new()
            .with_customer("Primeiro Cliente", "529.982.247-25")
            .store;
        let emitter = RecordingEmitter::new();

        let result = run(&mut store, &emitter, maria(), at());
        assert!(matches!(result, Err(ClientesError::AlreadyExists(_))));
        assert_eq!(store.get("52998224725").unwrap().name, "Primeiro Cliente");
        assert!(emitter.pages().is_empty());
    }

    #[test]
    fn failed_document_rolls_back_registration() {
        let mut store = StoreFixture::new()
            .with_customer("João Batista", "12345678909")
            .store;
        let emitter = RecordingEmitter::new();
        emitter.set_simulate_write_error(true);

        let result = run(&mut store, &emitter, customer("Maria Oliveira", "52998224725"), at());
        assert!(matches!(result, Err(ClientesError::Document(_))));
        assert_eq!(store.len(), 1);
        assert!(!store.contains("52998224725"));
    }
}
