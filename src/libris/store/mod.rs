//! # Storage Layer
//!
//! The catalog is persisted as a single unit. Storage is split in two:
//!
//! - [`backend::StorageBackend`]: the "how". Raw whole-catalog read and write.
//!   - [`fs_backend::FsBackend`]: JSON array in one file, replaced atomically
//!   - [`mem_backend::MemBackend`]: in-memory, for tests
//! - [`book_store::BookStore`]: the "what". Load/save/add/delete/find/update
//!   over any backend.
//!
//! Every mutation is a read-modify-write of the entire catalog. Data volume
//! is small and one process owns the file, so whole-file replacement is
//! enough: a write either lands completely or not at all.
//!
//! ## Storage Format
//!
//! ```text
//! [
//!     {
//!         "title": "Dune",
//!         "author": "Frank Herbert",
//!         "year": 1965,
//!         "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
//!         "status": "available"
//!     }
//! ]
//! ```

pub mod backend;
pub mod book_store;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::StorageBackend;
pub use book_store::BookStore;
