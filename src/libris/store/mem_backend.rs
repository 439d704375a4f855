use super::backend::StorageBackend;
use crate::error::{LibraryError, Result};
use crate::model::Book;
use std::cell::{Cell, RefCell};

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since libris is single-threaded,
/// so the `StorageBackend` trait can take `&self` everywhere.
#[derive(Default)]
pub struct MemBackend {
    books: RefCell<Vec<Book>>,
    writes: Cell<usize>,
    simulate_read_error: Cell<bool>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: RefCell::new(books),
            ..Self::default()
        }
    }

    /// Make reads fail, as a corrupt catalog file would.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful catalog writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl StorageBackend for MemBackend {
    fn read_catalog(&self) -> Result<Vec<Book>> {
        if self.simulate_read_error.get() {
            return Err(LibraryError::Store("Simulated read error".to_string()));
        }
        Ok(self.books.borrow().clone())
    }

    fn write_catalog(&self, books: &[Book]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(LibraryError::Store("Simulated write error".to_string()));
        }
        *self.books.borrow_mut() = books.to_vec();
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn location(&self) -> String {
        "memory://catalog".to_string()
    }
}
