use crate::commands::{CmdResult, Outcome};
use crate::error::Result;
use crate::model::{BookId, Status};
use crate::store::{BookStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &mut BookStore<B>,
    id: &BookId,
    status: Status,
) -> Result<CmdResult> {
    // The book can vanish between the caller's lookup and this write if
    // another process rewrote the file.
    let outcome = if store.update_status(id, status)? {
        Outcome::StatusChanged {
            id: id.clone(),
            status,
        }
    } else {
        Outcome::BookNotFound { id: id.clone() }
    };
    Ok(CmdResult::default().with_outcome(outcome))
}
