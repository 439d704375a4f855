use super::backend::StorageBackend;
use crate::error::{LibraryError, Result};
use crate::model::Book;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const INDENT: &[u8] = b"    ";

/// Catalog stored as a JSON array in a single file.
pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(LibraryError::Io)?;
        }
        Ok(())
    }

    fn tmp_path(&self, dir: &Path) -> PathBuf {
        let name = self
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("catalog");
        dir.join(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

fn to_pretty_json(books: &[Book]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
    books
        .serialize(&mut serializer)
        .map_err(LibraryError::Serialization)?;
    Ok(out)
}

impl StorageBackend for FsBackend {
    fn read_catalog(&self) -> Result<Vec<Book>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(LibraryError::Io)?;
        let books: Vec<Book> =
            serde_json::from_str(&content).map_err(LibraryError::Serialization)?;
        Ok(books)
    }

    fn write_catalog(&self, books: &[Book]) -> Result<()> {
        let dir = self.parent_dir();
        self.ensure_dir(&dir)?;

        let content = to_pretty_json(books)?;

        // Atomic write
        let tmp_path = self.tmp_path(&dir);
        fs::write(&tmp_path, content).map_err(LibraryError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(LibraryError::Io(e));
        }

        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
