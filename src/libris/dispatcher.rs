//! # Command Dispatcher
//!
//! The read-eval loop. Each iteration shows help, waits for a command name,
//! runs the handler for it, and goes back to waiting. `exit` is the only
//! way out, apart from a cancellation at the command prompt itself.
//!
//! Handlers are looked up by name in a table built once in
//! [`Dispatcher::new`]. The I/O layer only hands over known names, but a
//! lookup miss is still reported as [`Outcome::UnknownCommand`] and the
//! loop carries on.
//!
//! Inside a handler, a cancelled prompt ends that handler quietly: nothing
//! is written and control returns to the loop.

use crate::api::LibraryApi;
use crate::commands::{CmdResult, Outcome};
use crate::error::Result;
use crate::io::LibraryIo;
use crate::store::StorageBackend;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Add,
    Delete,
    Find,
    List,
    Status,
    Help,
    Exit,
}

impl Command {
    /// All commands, in help order.
    pub const ALL: [Command; 7] = [
        Command::Add,
        Command::Delete,
        Command::Find,
        Command::List,
        Command::Status,
        Command::Help,
        Command::Exit,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Command::Add => "add",
            Command::Delete => "delete",
            Command::Find => "find",
            Command::List => "list",
            Command::Status => "status",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }

    /// Case-insensitive lookup, ignoring surrounding whitespace.
    pub fn parse(input: &str) -> Option<Command> {
        let wanted = input.trim().to_lowercase();
        Command::ALL.into_iter().find(|c| c.name() == wanted)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

type Handler<B, I> = fn(&mut Dispatcher<B, I>) -> Flow;

pub struct Dispatcher<B: StorageBackend, I: LibraryIo> {
    api: LibraryApi<B>,
    io: I,
    handlers: HashMap<&'static str, Handler<B, I>>,
}

impl<B: StorageBackend, I: LibraryIo> Dispatcher<B, I> {
    pub fn new(api: LibraryApi<B>, io: I) -> Self {
        let handlers = Command::ALL
            .into_iter()
            .map(|command| (command.name(), Self::handler_for(command)))
            .collect();
        Self { api, io, handlers }
    }

    fn handler_for(command: Command) -> Handler<B, I> {
        match command {
            Command::Add => Self::add,
            Command::Delete => Self::delete,
            Command::Find => Self::find,
            Command::List => Self::list,
            Command::Status => Self::status,
            Command::Help => Self::help,
            Command::Exit => Self::exit,
        }
    }

    /// Runs until `exit`, or until the command prompt is cancelled.
    pub fn run(&mut self) {
        loop {
            self.io.show_help(&Command::ALL);
            let Some(name) = self.io.read_command() else {
                info!("command prompt cancelled, leaving");
                return;
            };
            if self.dispatch(&name) == Flow::Exit {
                return;
            }
        }
    }

    /// Runs the handler registered under `name`.
    pub fn dispatch(&mut self, name: &str) -> Flow {
        let key = name.trim().to_lowercase();
        match self.handlers.get(key.as_str()).copied() {
            Some(handler) => {
                debug!(command = %key, "dispatching");
                handler(self)
            }
            None => {
                self.io.report(&Outcome::UnknownCommand {
                    name: name.to_string(),
                });
                Flow::Continue
            }
        }
    }

    pub fn into_parts(self) -> (LibraryApi<B>, I) {
        (self.api, self.io)
    }

    fn show(&mut self, result: Result<CmdResult>) {
        match result {
            Ok(result) => {
                if !result.listed_books.is_empty() {
                    self.io.show_books(&result.listed_books);
                }
                for outcome in &result.outcomes {
                    self.io.report(outcome);
                }
            }
            Err(e) => {
                warn!(error = %e, "command failed");
                self.io.report(&Outcome::Failed {
                    reason: e.to_string(),
                });
            }
        }
    }

    fn add(&mut self) -> Flow {
        let Some(title) = self.io.read_title() else {
            return Flow::Continue;
        };
        let Some(author) = self.io.read_author() else {
            return Flow::Continue;
        };
        let Some(year) = self.io.read_year() else {
            return Flow::Continue;
        };
        let result = self.api.add_book(title, author, year);
        self.show(result);
        Flow::Continue
    }

    fn delete(&mut self) -> Flow {
        let Some(id) = self.io.read_id() else {
            return Flow::Continue;
        };
        let result = self.api.delete_book(&id);
        self.show(result);
        Flow::Continue
    }

    fn find(&mut self) -> Flow {
        let Some(query) = self.io.read_query() else {
            return Flow::Continue;
        };
        let Some(field) = self.io.read_field() else {
            return Flow::Continue;
        };
        let result = self.api.find_books(&query, field);
        self.show(result);
        Flow::Continue
    }

    fn list(&mut self) -> Flow {
        let result = self.api.list_books();
        self.show(result);
        Flow::Continue
    }

    fn status(&mut self) -> Flow {
        let Some(id) = self.io.read_id() else {
            return Flow::Continue;
        };
        if self.api.get_book(&id).is_none() {
            self.io.report(&Outcome::BookNotFound { id });
            return Flow::Continue;
        }
        let Some(status) = self.io.read_status() else {
            return Flow::Continue;
        };
        let result = self.api.change_status(&id, status);
        self.show(result);
        Flow::Continue
    }

    fn help(&mut self) -> Flow {
        self.io.show_help(&Command::ALL);
        Flow::Continue
    }

    fn exit(&mut self) -> Flow {
        self.io.report(&Outcome::Farewell);
        Flow::Exit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::scripted::{Answer, ScriptedIo};
    use crate::model::{Book, BookId, SearchField, Status};
    use crate::store::mem_backend::MemBackend;
    use crate::store::BookStore;

    const ID_A: &str = "11111111-1111-4111-8111-111111111111";
    const ID_B: &str = "22222222-2222-4222-8222-222222222222";

    fn seeded() -> MemBackend {
        MemBackend::with_books(vec![
            Book::from_parts(ID_A, "Book A", "Author A", 2000, Status::Available),
            Book::from_parts(ID_B, "Book B", "Author B", 2010, Status::CheckedOut),
        ])
    }

    fn cmd(name: &str) -> Answer {
        Answer::Command(name.to_string())
    }

    fn text(s: &str) -> Answer {
        Answer::Text(s.to_string())
    }

    fn id(s: &str) -> Answer {
        Answer::Id(BookId::from(s))
    }

    fn run_script(
        backend: MemBackend,
        answers: Vec<Answer>,
    ) -> (LibraryApi<MemBackend>, ScriptedIo) {
        let api = LibraryApi::new(BookStore::new(backend));
        let mut dispatcher = Dispatcher::new(api, ScriptedIo::new(answers));
        dispatcher.run();
        dispatcher.into_parts()
    }

    #[test]
    fn command_parse_normalizes() {
        assert_eq!(Command::parse("  LIST "), Some(Command::List));
        assert_eq!(Command::parse("Exit"), Some(Command::Exit));
        assert_eq!(Command::parse("quit"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn table_covers_every_command() {
        let dispatcher = Dispatcher::new(
            LibraryApi::new(BookStore::new(MemBackend::new())),
            ScriptedIo::default(),
        );
        for command in Command::ALL {
            assert!(dispatcher.handlers.contains_key(command.name()));
        }
        assert_eq!(dispatcher.handlers.len(), Command::ALL.len());
    }

    #[test]
    fn exit_reports_farewell_and_stops() {
        let (_, io) = run_script(MemBackend::new(), vec![cmd("exit"), cmd("list")]);
        assert_eq!(io.outcomes, vec![Outcome::Farewell]);
        assert_eq!(io.remaining(), 1);
        assert_eq!(io.help_shown, 1);
    }

    #[test]
    fn cancelled_command_prompt_ends_loop() {
        let (_, io) = run_script(MemBackend::new(), vec![Answer::Cancel]);
        assert!(io.outcomes.is_empty());
    }

    #[test]
    fn help_is_shown_every_iteration() {
        let (_, io) = run_script(
            MemBackend::new(),
            vec![cmd("help"), cmd("list"), cmd("exit")],
        );
        // three loop iterations plus the explicit help command
        assert_eq!(io.help_shown, 4);
    }

    #[test]
    fn lookup_miss_is_reported_not_fatal() {
        let (_, io) = run_script(MemBackend::new(), vec![cmd("frobnicate"), cmd("exit")]);
        assert_eq!(
            io.outcomes,
            vec![
                Outcome::UnknownCommand {
                    name: "frobnicate".into()
                },
                Outcome::Farewell
            ]
        );
    }

    #[test]
    fn add_creates_book() {
        let (api, io) = run_script(
            MemBackend::new(),
            vec![
                cmd("add"),
                text("Dune"),
                text("Frank Herbert"),
                Answer::Year(1965),
                cmd("exit"),
            ],
        );
        let books = api.store().load_all();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title(), "Dune");
        assert_eq!(books[0].status(), Status::Available);
        assert!(matches!(io.outcomes[0], Outcome::BookAdded { .. }));
    }

    #[test]
    fn cancelled_add_writes_nothing() {
        let (api, io) = run_script(
            MemBackend::new(),
            vec![
                cmd("add"),
                text("Dune"),
                text("Frank Herbert"),
                Answer::Cancel,
                cmd("exit"),
            ],
        );
        assert!(api.store().load_all().is_empty());
        assert_eq!(api.store().backend().write_count(), 0);
        assert_eq!(io.outcomes, vec![Outcome::Farewell]);
    }

    #[test]
    fn cancelled_delete_writes_nothing() {
        let (api, io) = run_script(
            seeded(),
            vec![cmd("delete"), Answer::Cancel, cmd("exit")],
        );
        assert_eq!(api.store().load_all().len(), 2);
        assert_eq!(api.store().backend().write_count(), 0);
        assert_eq!(io.outcomes, vec![Outcome::Farewell]);
        assert_eq!(io.remaining(), 0);
    }

    #[test]
    fn cancelled_find_field_reports_nothing() {
        let (api, io) = run_script(
            seeded(),
            vec![cmd("find"), text("Book"), Answer::Cancel, cmd("exit")],
        );
        assert_eq!(api.store().backend().write_count(), 0);
        assert!(io.shown_books.is_empty());
        assert_eq!(io.outcomes, vec![Outcome::Farewell]);
        assert_eq!(io.remaining(), 0);
    }

    #[test]
    fn cancelled_status_id_skips_status_prompt() {
        let (api, io) = run_script(
            seeded(),
            vec![cmd("status"), Answer::Cancel, cmd("exit")],
        );
        assert_eq!(api.store().backend().write_count(), 0);
        assert!(!io.prompts.contains(&"status"));
        assert_eq!(io.outcomes, vec![Outcome::Farewell]);
        assert_eq!(io.remaining(), 0);
    }

    #[test]
    fn cancelled_status_value_leaves_book_unchanged() {
        let (api, io) = run_script(
            seeded(),
            vec![cmd("status"), id(ID_A), Answer::Cancel, cmd("exit")],
        );
        let book = api.store().find_by_id(&BookId::from(ID_A)).unwrap();
        assert_eq!(book.status(), Status::Available);
        assert_eq!(api.store().backend().write_count(), 0);
        assert!(io.prompts.contains(&"status"));
        assert_eq!(io.outcomes, vec![Outcome::Farewell]);
        assert_eq!(io.remaining(), 0);
    }

    #[test]
    fn delete_reports_found_then_not_found() {
        let (api, io) = run_script(
            seeded(),
            vec![cmd("delete"), id(ID_A), cmd("delete"), id(ID_A), cmd("exit")],
        );
        assert_eq!(api.store().load_all().len(), 1);
        assert_eq!(
            io.outcomes,
            vec![
                Outcome::BookDeleted { id: BookId::from(ID_A) },
                Outcome::BookNotFound { id: BookId::from(ID_A) },
                Outcome::Farewell
            ]
        );
    }

    #[test]
    fn find_shows_matches() {
        let (_, io) = run_script(
            seeded(),
            vec![
                cmd("find"),
                text("2000"),
                Answer::Field(SearchField::Year),
                cmd("exit"),
            ],
        );
        assert_eq!(io.shown_books.len(), 1);
        assert_eq!(io.shown_books[0].len(), 1);
        assert_eq!(io.shown_books[0][0].id().as_str(), ID_A);
    }

    #[test]
    fn find_without_matches_names_field_and_query() {
        let (_, io) = run_script(
            seeded(),
            vec![
                cmd("find"),
                text("Tolkien"),
                Answer::Field(SearchField::Author),
                cmd("exit"),
            ],
        );
        assert!(io.shown_books.is_empty());
        assert_eq!(
            io.outcomes[0],
            Outcome::NoMatches {
                field: SearchField::Author,
                query: "Tolkien".into()
            }
        );
    }

    #[test]
    fn list_on_empty_catalog_reports_no_books() {
        let (_, io) = run_script(MemBackend::new(), vec![cmd("list"), cmd("exit")]);
        assert!(io.shown_books.is_empty());
        assert_eq!(io.outcomes[0], Outcome::NoBooks);
    }

    #[test]
    fn list_shows_whole_catalog() {
        let (_, io) = run_script(seeded(), vec![cmd("list"), cmd("exit")]);
        assert_eq!(io.shown_books[0].len(), 2);
    }

    #[test]
    fn status_with_unknown_id_skips_status_prompt() {
        let missing = "33333333-3333-4333-8333-333333333333";
        let (_, io) = run_script(seeded(), vec![cmd("status"), id(missing), cmd("exit")]);
        assert!(!io.prompts.contains(&"status"));
        assert_eq!(
            io.outcomes[0],
            Outcome::BookNotFound {
                id: BookId::from(missing)
            }
        );
    }

    #[test]
    fn status_updates_existing_book() {
        let (api, io) = run_script(
            seeded(),
            vec![
                cmd("status"),
                id(ID_B),
                Answer::Status(Status::Available),
                cmd("exit"),
            ],
        );
        let book = api.store().find_by_id(&BookId::from(ID_B)).unwrap();
        assert_eq!(book.status(), Status::Available);
        assert_eq!(
            io.outcomes[0],
            Outcome::StatusChanged {
                id: BookId::from(ID_B),
                status: Status::Available
            }
        );
    }

    #[test]
    fn write_failure_is_reported_and_loop_continues() {
        let backend = seeded();
        backend.set_simulate_write_error(true);
        let (api, io) = run_script(
            backend,
            vec![cmd("delete"), id(ID_A), cmd("list"), cmd("exit")],
        );
        assert!(matches!(io.outcomes[0], Outcome::Failed { .. }));
        assert_eq!(api.store().load_all().len(), 2);
        assert_eq!(io.shown_books.len(), 1);
        assert_eq!(io.outcomes.last(), Some(&Outcome::Farewell));
    }
}
