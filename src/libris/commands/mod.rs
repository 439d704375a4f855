//! # Command Layer
//!
//! One module per catalog operation. Commands take plain Rust arguments
//! (already validated by whoever collected them), talk to the
//! [`BookStore`](crate::store::BookStore), and return a [`CmdResult`].
//!
//! Results carry [`Outcome`]s, not text: the I/O layer decides how each
//! outcome reads in the configured language.

use crate::model::{Book, BookId, SearchField, Status};

pub mod add;
pub mod delete;
pub mod find;
pub mod list;
pub mod status;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// What happened, with the parameters needed to describe it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    BookAdded { id: BookId, title: String },
    BookDeleted { id: BookId },
    BookNotFound { id: BookId },
    NoMatches { field: SearchField, query: String },
    NoBooks,
    StatusChanged { id: BookId, status: Status },
    UnknownCommand { name: String },
    Failed { reason: String },
    Farewell,
}

impl Outcome {
    pub fn level(&self) -> MessageLevel {
        match self {
            Outcome::BookAdded { .. }
            | Outcome::BookDeleted { .. }
            | Outcome::StatusChanged { .. } => MessageLevel::Success,
            Outcome::NoMatches { .. } | Outcome::NoBooks | Outcome::Farewell => {
                MessageLevel::Info
            }
            Outcome::BookNotFound { .. } | Outcome::UnknownCommand { .. } => {
                MessageLevel::Warning
            }
            Outcome::Failed { .. } => MessageLevel::Error,
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_books: Vec<Book>,
    pub outcomes: Vec<Outcome>,
}

impl CmdResult {
    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcomes.push(outcome);
        self
    }

    pub fn with_listed_books(mut self, books: Vec<Book>) -> Self {
        self.listed_books = books;
        self
    }
}
