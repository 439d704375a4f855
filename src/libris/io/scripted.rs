//! A [`LibraryIo`] driven by a queue of canned answers.
//!
//! Each prompt pops the next [`Answer`]. [`Answer::Cancel`] and an empty
//! queue both read as a cancellation. Everything shown is recorded for
//! assertions.

use super::LibraryIo;
use crate::commands::Outcome;
use crate::dispatcher::Command;
use crate::model::{Book, BookId, SearchField, Status};
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Command(String),
    Text(String),
    Year(i32),
    Id(BookId),
    Status(Status),
    Field(SearchField),
    Cancel,
}

#[derive(Debug, Default)]
pub struct ScriptedIo {
    answers: VecDeque<Answer>,
    /// Prompt names in the order they were issued
    pub prompts: Vec<&'static str>,
    pub shown_books: Vec<Vec<Book>>,
    pub outcomes: Vec<Outcome>,
    pub help_shown: usize,
}

impl ScriptedIo {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, prompt: &'static str) -> Option<Answer> {
        self.prompts.push(prompt);
        match self.answers.pop_front() {
            None | Some(Answer::Cancel) => None,
            Some(answer) => Some(answer),
        }
    }
}

macro_rules! scripted_read {
    ($name:ident, $prompt:literal, $variant:ident, $ty:ty) => {
        fn $name(&mut self) -> Option<$ty> {
            match self.next($prompt)? {
                Answer::$variant(value) => Some(value),
                other => panic!("expected {} answer, got {:?}", $prompt, other),
            }
        }
    };
}

impl LibraryIo for ScriptedIo {
    scripted_read!(read_command, "command", Command, String);
    scripted_read!(read_title, "title", Text, String);
    scripted_read!(read_author, "author", Text, String);
    scripted_read!(read_year, "year", Year, i32);
    scripted_read!(read_id, "id", Id, BookId);
    scripted_read!(read_status, "status", Status, Status);
    scripted_read!(read_query, "query", Text, String);
    scripted_read!(read_field, "field", Field, SearchField);

    fn show_help(&mut self, _commands: &[Command]) {
        self.help_shown += 1;
    }

    fn show_books(&mut self, books: &[Book]) {
        self.shown_books.push(books.to_vec());
    }

    fn report(&mut self, outcome: &Outcome) {
        self.outcomes.push(outcome.clone());
    }
}
