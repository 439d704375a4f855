use crate::commands::{CmdResult, Outcome};
use crate::store::{BookStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &BookStore<B>) -> CmdResult {
    let books = store.load_all();
    if books.is_empty() {
        return CmdResult::default().with_outcome(Outcome::NoBooks);
    }
    CmdResult::default().with_listed_books(books)
}
