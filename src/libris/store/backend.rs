use crate::error::Result;
use crate::model::Book;

/// Abstract interface for raw catalog I/O.
///
/// Backends move the whole catalog in and out of storage; [`BookStore`]
/// holds the record-level logic on top.
///
/// [`BookStore`]: super::BookStore
pub trait StorageBackend {
    /// Read the full catalog in storage order.
    /// A catalog that does not exist yet is `Ok(vec![])`.
    /// Returns Err when the data exists but cannot be read or parsed.
    fn read_catalog(&self) -> Result<Vec<Book>>;

    /// Replace the full catalog.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write_catalog(&self, books: &[Book]) -> Result<()>;

    /// Where the catalog lives, for logging.
    fn location(&self) -> String;
}
