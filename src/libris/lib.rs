//! # Libris Architecture
//!
//! Libris keeps a small catalog of books in a JSON file and drives it from
//! an interactive prompt loop. The library holds everything except the
//! terminal: the binary only supplies a console implementation of
//! [`io::LibraryIo`] and wires things together.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Binary (cli/, wired by main.rs)                            │
//! │  - Config, logging, ConsoleIo: prompts, paging, text        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Dispatcher (dispatcher.rs) + I/O contract (io/)            │
//! │  - Command table, read-eval loop, cancellation handling     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs) → Commands (commands/*.rs)                    │
//! │  - Business logic, structured Outcome values, no I/O        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - BookStore over a StorageBackend: FsBackend, MemBackend   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Text in the Core
//!
//! From the dispatcher inward, nothing formats user-facing text. Operations
//! report [`commands::Outcome`] values and the I/O implementation renders
//! them in the configured language.
//!
//! ## Testing Strategy
//!
//! - **Store and commands**: unit tests against `MemBackend`.
//! - **Dispatcher**: scripted sessions through `io::scripted::ScriptedIo`.
//! - **File backend**: `tests/fs_backend_test.rs` on temp dirs.
//! - **Binary**: `tests/session_e2e.rs` drives the real program over stdin.
//!
//! ## Module Overview
//!
//! - [`api`]: facade over the commands
//! - [`commands`]: one module per catalog operation
//! - [`config`]: `config.json` loading
//! - [`dispatcher`]: command table and loop
//! - [`error`]: error types
//! - [`io`]: the prompt/render contract
//! - [`model`]: `Book`, `BookId`, `Status`, `SearchField`
//! - [`store`]: storage abstraction and backends

pub mod api;
pub mod commands;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod io;
pub mod model;
pub mod store;
