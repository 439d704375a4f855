//! # API Facade
//!
//! A thin facade over the command layer and the single entry point the
//! [`Dispatcher`](crate::dispatcher::Dispatcher) (or any other front end)
//! uses. It dispatches to `commands::*` and returns structured results; it
//! holds no business logic and does no I/O.
//!
//! `LibraryApi<B: StorageBackend>` is generic over the backend:
//! - Production: `LibraryApi<FsBackend>`
//! - Testing: `LibraryApi<MemBackend>`

use crate::commands;
use crate::error::Result;
use crate::model::{Book, BookId, SearchField, Status};
use crate::store::{BookStore, StorageBackend};

pub struct LibraryApi<B: StorageBackend> {
    store: BookStore<B>,
}

impl<B: StorageBackend> LibraryApi<B> {
    pub fn new(store: BookStore<B>) -> Self {
        Self { store }
    }

    pub fn add_book(&mut self, title: String, author: String, year: i32) -> Result<CmdResult> {
        commands::add::run(&mut self.store, title, author, year)
    }

    pub fn delete_book(&mut self, id: &BookId) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn find_books(&self, query: &str, field: SearchField) -> Result<CmdResult> {
        Ok(commands::find::run(&self.store, query, field))
    }

    pub fn list_books(&self) -> Result<CmdResult> {
        Ok(commands::list::run(&self.store))
    }

    pub fn get_book(&self, id: &BookId) -> Option<Book> {
        self.store.find_by_id(id)
    }

    pub fn change_status(&mut self, id: &BookId, status: Status) -> Result<CmdResult> {
        commands::status::run(&mut self.store, id, status)
    }

    pub fn store(&self) -> &BookStore<B> {
        &self.store
    }
}

pub use commands::{CmdResult, MessageLevel, Outcome};
