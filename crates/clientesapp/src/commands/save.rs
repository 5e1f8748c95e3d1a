use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{CustomerStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &CustomerStore<B>) -> Result<CmdResult> {
    store.save()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Data saved to {} ({} customer(s)).",
        store.location().display(),
        store.len()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientesError;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn saves_every_record() {
        let store = StoreFixture::new()
            .with_customer("Maria Oliveira", "52998224725")
            .with_customer("João Batista", "12345678909")
            .store;
        let result = run(&store).unwrap();

        assert_eq!(store.backend().saved_records().unwrap().len(), 2);
        assert!(result.messages[0].content.contains("2 customer(s)"));
    }

    #[test]
    fn write_failure_is_returned() {
        let store = StoreFixture::new()
            .with_customer("Maria Oliveira", "52998224725")
            .store;
        store.backend().set_simulate_write_error(true);
        assert!(matches!(run(&store), Err(ClientesError::Store(_))));
    }
}
