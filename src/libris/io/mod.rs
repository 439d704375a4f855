//! # I/O Boundary
//!
//! [`LibraryIo`] is everything the dispatcher needs from a user interface:
//! blocking prompts that hand back already-validated values, and output for
//! help, book lists and outcomes.
//!
//! Prompts return `None` when the user cancels (Ctrl-C at a terminal, end
//! of input). A prompt never returns an invalid value: implementations
//! re-prompt until the input parses. The core only checks business rules,
//! such as whether an id exists.
//!
//! Implementations:
//! - `ConsoleIo` in the binary: terminal prompts, localized text, paging
//! - [`scripted::ScriptedIo`]: queued answers and recorded output, for tests

use crate::commands::Outcome;
use crate::dispatcher::Command;
use crate::model::{Book, BookId, SearchField, Status};

#[cfg(any(test, feature = "test_utils"))]
pub mod scripted;

pub trait LibraryIo {
    /// Name of one of the known commands, lowercased.
    fn read_command(&mut self) -> Option<String>;

    fn read_title(&mut self) -> Option<String>;

    fn read_author(&mut self) -> Option<String>;

    /// A year within `1..=current year`.
    fn read_year(&mut self) -> Option<i32>;

    /// A well-formed book id.
    fn read_id(&mut self) -> Option<BookId>;

    fn read_status(&mut self) -> Option<Status>;

    fn read_query(&mut self) -> Option<String>;

    fn read_field(&mut self) -> Option<SearchField>;

    fn show_help(&mut self, commands: &[Command]);

    /// Render books, paginated as the implementation sees fit.
    fn show_books(&mut self, books: &[Book]);

    fn report(&mut self, outcome: &Outcome);
}
