//! Terminal implementation of [`LibraryIo`].
//!
//! On a terminal, lines are read through a `rustyline` editor: Ctrl-C and
//! Ctrl-D both become a cancellation. Piped input is read straight from
//! stdin and end of input is a cancellation. Output always goes through
//! `console::Term`.

use super::messages::{self, Texts};
use super::prompt::{self, InputError};
use super::styles::THEME;
use console::{Style, Term};
use libris::api::{MessageLevel, Outcome};
use libris::config::Lang;
use libris::dispatcher::Command;
use libris::io::LibraryIo;
use libris::model::{current_year, Book, BookId, SearchField, Status};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::cell::RefCell;
use std::io::{self, BufRead};
use tracing::warn;
use unicode_width::UnicodeWidthStr;

pub struct ConsoleIo {
    term: Term,
    /// `None` when stdin is not a terminal.
    editor: Option<RefCell<DefaultEditor>>,
    lang: Lang,
    per_page: usize,
}

impl ConsoleIo {
    pub fn new(term: Term, lang: Lang, per_page: usize) -> Self {
        let editor = if term.is_term() {
            match DefaultEditor::new() {
                Ok(editor) => Some(RefCell::new(editor)),
                Err(e) => {
                    warn!(error = %e, "line editor unavailable, reading stdin directly");
                    None
                }
            }
        } else {
            None
        };
        Self {
            term,
            editor,
            lang,
            per_page: per_page.max(1),
        }
    }

    fn texts(&self) -> &'static Texts {
        messages::texts(self.lang)
    }

    fn width(&self) -> usize {
        self.term.size().1 as usize
    }

    fn write_line(&self, line: &str) {
        if let Err(e) = self.term.write_line(line) {
            warn!(error = %e, "failed to write to terminal");
        }
    }

    fn write_centered(&self, text: &str, style: &Style) {
        let line = center(text, self.width());
        self.write_line(&style.apply_to(line).to_string());
    }

    fn clear(&self) {
        if let Err(e) = self.term.clear_screen() {
            warn!(error = %e, "failed to clear terminal");
        }
    }

    /// Shows `prompt` and reads one line, without the line ending.
    fn read_line(&self, prompt: &str) -> Option<String> {
        match &self.editor {
            Some(editor) => self.read_edited(editor, prompt),
            None => self.read_piped(prompt),
        }
    }

    fn read_edited(&self, editor: &RefCell<DefaultEditor>, prompt: &str) -> Option<String> {
        // the editor redraws only the last prompt line
        let last = match prompt.rsplit_once('\n') {
            Some((lead, last)) => {
                self.write_line(lead);
                last
            }
            None => prompt,
        };
        match editor.borrow_mut().readline(last) {
            Ok(line) => Some(line),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => None,
            Err(e) => {
                warn!(error = %e, "failed to read from terminal");
                None
            }
        }
    }

    fn read_piped(&self, prompt: &str) -> Option<String> {
        if let Err(e) = self
            .term
            .write_str(&THEME.prompt.apply_to(prompt).to_string())
        {
            warn!(error = %e, "failed to write prompt");
            return None;
        }

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()),
            Err(e) => {
                warn!(error = %e, "failed to read from stdin");
                None
            }
        }
    }

    fn complain(&self, error: &InputError) {
        let text = messages::describe_input_error(self.lang, error, current_year());
        self.write_line(&THEME.error.apply_to(text).to_string());
    }

    fn ask<T>(&self, prompt: &str, parse: impl Fn(&str) -> Result<T, InputError>) -> Option<T> {
        prompt::ask(|| self.read_line(prompt), parse, |e| self.complain(e))
    }
}

/// Left-pads `text` so it sits in the middle of `width` columns.
fn center(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let left = (width - text_width) / 2;
    format!("{}{}", " ".repeat(left), text)
}

impl LibraryIo for ConsoleIo {
    fn read_command(&mut self) -> Option<String> {
        let command = self.ask(self.texts().enter_command, prompt::parse_command)?;
        self.clear();
        Some(command)
    }

    fn read_title(&mut self) -> Option<String> {
        self.ask(self.texts().enter_title, prompt::parse_text)
    }

    fn read_author(&mut self) -> Option<String> {
        self.ask(self.texts().enter_author, prompt::parse_text)
    }

    fn read_year(&mut self) -> Option<i32> {
        self.ask(self.texts().enter_year, prompt::parse_year)
    }

    fn read_id(&mut self) -> Option<BookId> {
        self.ask(self.texts().enter_id, prompt::parse_id)
    }

    fn read_status(&mut self) -> Option<Status> {
        let lang = self.lang;
        self.ask(self.texts().enter_status, move |input| {
            prompt::parse_status(input, lang)
        })
    }

    fn read_query(&mut self) -> Option<String> {
        self.ask(self.texts().enter_query, prompt::parse_text)
    }

    fn read_field(&mut self) -> Option<SearchField> {
        self.ask(self.texts().enter_field, prompt::parse_field)
    }

    fn show_help(&mut self, commands: &[Command]) {
        let texts = self.texts();
        self.write_centered(texts.welcome, &THEME.header);
        self.write_line(texts.commands_header);
        for command in commands {
            let name = format!("{:<7}", command.name());
            self.write_line(&format!(
                "{} - {}",
                THEME.command.apply_to(name),
                messages::command_summary(self.lang, *command)
            ));
        }
    }

    fn show_books(&mut self, books: &[Book]) {
        let texts = self.texts();
        let pages: Vec<&[Book]> = books.chunks(self.per_page).collect();
        let last_page = pages.len().saturating_sub(1);

        for (page_no, page) in pages.iter().enumerate() {
            self.clear();
            self.write_centered(texts.books_header, &THEME.header);
            for (offset, book) in page.iter().enumerate() {
                let number = page_no * self.per_page + offset + 1;
                self.write_line(&format!(
                    "{} {}",
                    THEME.index.apply_to(format!("{}.", number)),
                    messages::describe_book(self.lang, book)
                ));
            }

            let pause = if page_no < last_page {
                texts.next_page
            } else {
                texts.end_of_list
            };
            self.write_line("");
            if self.read_line(&center(pause, self.width())).is_none() {
                break;
            }
        }
        self.clear();
    }

    fn report(&mut self, outcome: &Outcome) {
        let text = messages::describe_outcome(self.lang, outcome);
        let level = outcome.level();
        let style = THEME.for_level(level);
        if level == MessageLevel::Success || *outcome == Outcome::Farewell {
            self.write_centered(&text, style);
        } else {
            self.write_line(&style.apply_to(text).to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_pads_on_the_left() {
        assert_eq!(center("ab", 6), "  ab");
        assert_eq!(center("abc", 6), " abc");
    }

    #[test]
    fn center_measures_display_width() {
        // two wide CJK characters take four columns
        assert_eq!(center("書籍", 8), "  書籍");
    }

    #[test]
    fn center_leaves_long_text_alone() {
        assert_eq!(center("too long", 4), "too long");
    }
}
