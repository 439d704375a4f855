use clap::Parser;
use directories::ProjectDirs;
use libris::config::LibraryConfig;
use libris::error::{LibraryError, Result};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Overrides the config directory.
pub const HOME_ENV: &str = "LIBRIS_HOME";
/// Log filter, e.g. `LIBRIS_LOG=debug`.
pub const LOG_ENV: &str = "LIBRIS_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser, Debug)]
#[command(name = "libris", bin_name = "libris", version)]
#[command(about = "Interactive catalog of books, kept in a JSON file", long_about = None)]
pub struct Cli {}

/// Logs go to stderr so they never mix with the interactive session.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "libris", "libris")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| LibraryError::Config("could not determine config dir".to_string()))
}

/// Loads `config.json`. A broken file is logged and replaced by defaults.
pub fn load_config() -> Result<LibraryConfig> {
    let dir = config_dir()?;
    Ok(LibraryConfig::load(&dir).unwrap_or_else(|e| {
        warn!(dir = %dir.display(), error = %e, "ignoring unreadable config");
        LibraryConfig::default()
    }))
}
