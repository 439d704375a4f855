use crate::commands::{CmdResult, Outcome};
use crate::error::Result;
use crate::model::BookId;
use crate::store::{BookStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &mut BookStore<B>, id: &BookId) -> Result<CmdResult> {
    let outcome = if store.delete(id)? {
        Outcome::BookDeleted { id: id.clone() }
    } else {
        Outcome::BookNotFound { id: id.clone() }
    };
    Ok(CmdResult::default().with_outcome(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Book, Status};
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn reports_deleted_then_not_found() {
        let mut store = BookStore::new(MemBackend::with_books(vec![Book::from_parts(
            "1",
            "T",
            "A",
            2000,
            Status::Available,
        )]));
        let id = BookId::from("1");

        let first = run(&mut store, &id).unwrap();
        assert_eq!(first.outcomes, vec![Outcome::BookDeleted { id: id.clone() }]);
        assert!(store.load_all().is_empty());

        let second = run(&mut store, &id).unwrap();
        assert_eq!(second.outcomes, vec![Outcome::BookNotFound { id }]);
    }
}
