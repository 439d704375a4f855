//! # CLI Layer
//!
//! The only part of libris that touches the terminal, the environment, or
//! the process. It:
//!
//! 1. Parses arguments (just `--help` and `--version`)
//! 2. Installs logging and loads `config.json`
//! 3. Builds the file-backed store, the API, and a [`console_io::ConsoleIo`]
//! 4. Hands them to the [`Dispatcher`] and returns when it does

mod console_io;
mod messages;
mod prompt;
mod setup;
mod styles;

use clap::Parser;
use console::Term;
use console_io::ConsoleIo;
use libris::api::LibraryApi;
use libris::dispatcher::Dispatcher;
use libris::error::Result;
use libris::store::fs_backend::FsBackend;
use libris::store::BookStore;
use setup::{init_tracing, load_config, Cli};
use tracing::info;

pub fn run() -> Result<()> {
    let _cli = Cli::parse();
    init_tracing();

    let config = load_config()?;
    let backend = FsBackend::new(&config.data_file);
    info!(catalog = %backend.path().display(), lang = ?config.lang, "starting session");

    let api = LibraryApi::new(BookStore::new(backend));
    let io = ConsoleIo::new(Term::stdout(), config.lang, config.per_page());
    Dispatcher::new(api, io).run();
    Ok(())
}
