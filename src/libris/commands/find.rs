use crate::commands::{CmdResult, Outcome};
use crate::model::SearchField;
use crate::store::{BookStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &BookStore<B>, query: &str, field: SearchField) -> CmdResult {
    let matches = store.find_by_field(query, field);
    if matches.is_empty() {
        return CmdResult::default().with_outcome(Outcome::NoMatches {
            field,
            query: query.to_string(),
        });
    }
    CmdResult::default().with_listed_books(matches)
}
