use crate::error::{LibraryError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "library_books.json";
const DEFAULT_PER_PAGE: usize = 3;

/// Language of the console message tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Ru,
}

/// Configuration for libris, stored as `config.json` in the config dir.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LibraryConfig {
    /// Catalog file, relative to the working directory unless absolute
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Books shown per page when listing
    #[serde(default = "default_per_page")]
    pub per_page: usize,

    #[serde(default)]
    pub lang: Lang,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_per_page() -> usize {
    DEFAULT_PER_PAGE
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            per_page: DEFAULT_PER_PAGE,
            lang: Lang::default(),
        }
    }
}

impl LibraryConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(LibraryError::Io)?;
        let config: LibraryConfig =
            serde_json::from_str(&content).map_err(LibraryError::Serialization)?;
        Ok(config)
    }

    /// Page size, never zero
    pub fn per_page(&self) -> usize {
        self.per_page.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LibraryConfig::default();
        assert_eq!(config.data_file, PathBuf::from("library_books.json"));
        assert_eq!(config.per_page, 3);
        assert_eq!(config.lang, Lang::En);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = LibraryConfig::load(dir.path()).unwrap();
        assert_eq!(config, LibraryConfig::default());
    }

    #[test]
    fn test_load_full_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"data_file": "/srv/books.json", "per_page": 10, "lang": "ru"}"#,
        )
        .unwrap();

        let loaded = LibraryConfig::load(dir.path()).unwrap();
        assert_eq!(
            loaded,
            LibraryConfig {
                data_file: PathBuf::from("/srv/books.json"),
                per_page: 10,
                lang: Lang::Ru,
            }
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"lang": "ru"}"#).unwrap();

        let config = LibraryConfig::load(dir.path()).unwrap();
        assert_eq!(config.lang, Lang::Ru);
        assert_eq!(config.per_page, 3);
        assert_eq!(config.data_file, PathBuf::from("library_books.json"));
    }

    #[test]
    fn test_broken_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ not json").unwrap();
        assert!(matches!(
            LibraryConfig::load(dir.path()),
            Err(LibraryError::Serialization(_))
        ));
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let config = LibraryConfig {
            per_page: 0,
            ..LibraryConfig::default()
        };
        assert_eq!(config.per_page(), 1);
    }
}
