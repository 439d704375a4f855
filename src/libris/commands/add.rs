use crate::commands::{CmdResult, Outcome};
use crate::error::Result;
use crate::model::Book;
use crate::store::{BookStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &mut BookStore<B>,
    title: String,
    author: String,
    year: i32,
) -> Result<CmdResult> {
    let book = Book::new(title, author, year)?;
    let outcome = Outcome::BookAdded {
        id: book.id().clone(),
        title: book.title().to_string(),
    };
    store.add(book)?;

    Ok(CmdResult::default().with_outcome(outcome))
}
