use super::backend::StorageBackend;
use crate::error::Result;
use crate::model::{Book, BookId, SearchField, Status};
use tracing::{debug, error};

/// Record-level catalog operations over a [`StorageBackend`].
///
/// Each call reloads the catalog from the backend. Vectors handed out are
/// snapshots: changing one does nothing until it goes back through
/// [`save_all`](Self::save_all) or one of the mutating operations.
pub struct BookStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> BookStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Full catalog in storage order. Unreadable or malformed data loads as
    /// an empty catalog, so the next mutating operation replaces whatever the
    /// backend held.
    pub fn load_all(&self) -> Vec<Book> {
        match self.backend.read_catalog() {
            Ok(books) => books,
            Err(e) => {
                error!(
                    location = %self.backend.location(),
                    error = %e,
                    "catalog unreadable, loading it as empty; the next change overwrites it"
                );
                Vec::new()
            }
        }
    }

    pub fn save_all(&mut self, books: &[Book]) -> Result<()> {
        debug!(count = books.len(), location = %self.backend.location(), "saving catalog");
        self.backend.write_catalog(books)
    }

    pub fn add(&mut self, book: Book) -> Result<()> {
        let mut books = self.load_all();
        debug!(id = %book.id(), "adding book");
        books.push(book);
        self.save_all(&books)
    }

    /// Removes the first book with `id`. Returns false, without writing,
    /// when there is none.
    pub fn delete(&mut self, id: &BookId) -> Result<bool> {
        let mut books = self.load_all();
        let Some(pos) = books.iter().position(|b| b.id() == id) else {
            return Ok(false);
        };
        books.remove(pos);
        self.save_all(&books)?;
        Ok(true)
    }

    /// Case-insensitive substring search on one field. An empty query
    /// matches every book.
    pub fn find_by_field(&self, query: &str, field: SearchField) -> Vec<Book> {
        let needle = query.to_lowercase();
        self.load_all()
            .into_iter()
            .filter(|book| field.value_of(book).to_lowercase().contains(&needle))
            .collect()
    }

    pub fn find_by_id(&self, id: &BookId) -> Option<Book> {
        self.load_all().into_iter().find(|b| b.id() == id)
    }

    /// Sets the status of the first book with `id` and persists the catalog.
    /// Returns false, without writing, when there is none.
    pub fn update_status(&mut self, id: &BookId, status: Status) -> Result<bool> {
        let mut books = self.load_all();
        let Some(book) = books.iter_mut().find(|b| b.id() == id) else {
            return Ok(false);
        };
        book.set_status(status);
        self.save_all(&books)?;
        Ok(true)
    }
}
