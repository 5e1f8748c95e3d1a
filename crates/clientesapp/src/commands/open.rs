use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{CustomerStore, StorageBackend, StoreStatus};

pub fn run<B: StorageBackend>(backend: B) -> Result<(CustomerStore<B>, CmdResult)> {
    let (store, status) = CustomerStore::open(backend)?;
    let mut result = CmdResult::default();

    match status {
        StoreStatus::StartedEmpty => result.add_message(CmdMessage::info(format!(
            "File {} not found. Starting with no customers.",
            store.location().display()
        ))),
        StoreStatus::Loaded { count, duplicates } => {
            result.add_message(CmdMessage::info(format!(
                "Loaded {} customer(s) from {}.",
                count,
                store.location().display()
            )));
            if duplicates > 0 {
                result.add_message(CmdMessage::warning(format!(
                    "{} row(s) repeated a CPF already in {}; the last row of each was kept.",
                    duplicates,
                    store.location().display()
                )));
            }
        }
    }

    Ok((store, result))
}
