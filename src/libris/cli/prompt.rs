//! Input validation for the console prompts.
//!
//! Each `parse_*` function turns one trimmed line into a typed value or an
//! [`InputError`]. [`ask`] repeats a prompt until a line parses: empty
//! lines are skipped silently, other errors are shown before asking again.

use super::messages::status_label;
use libris::config::Lang;
use libris::dispatcher::Command;
use libris::model::{year_in_range, BookId, SearchField, Status};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    Empty,
    UnknownCommand,
    NotANumber,
    YearOutOfRange,
    MalformedId,
    UnknownStatus,
    UnknownField,
}

/// Reads lines until one parses. Returns `None` as soon as `read` does.
pub fn ask<T>(
    mut read: impl FnMut() -> Option<String>,
    parse: impl Fn(&str) -> Result<T, InputError>,
    mut complain: impl FnMut(&InputError),
) -> Option<T> {
    loop {
        let line = read()?;
        match parse(line.trim()) {
            Ok(value) => return Some(value),
            Err(InputError::Empty) => continue,
            Err(e) => complain(&e),
        }
    }
}

pub fn parse_text(input: &str) -> Result<String, InputError> {
    if input.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(input.to_string())
}

pub fn parse_command(input: &str) -> Result<String, InputError> {
    if input.is_empty() {
        return Err(InputError::Empty);
    }
    Command::parse(input)
        .map(|c| c.name().to_string())
        .ok_or(InputError::UnknownCommand)
}

pub fn parse_year(input: &str) -> Result<i32, InputError> {
    if input.is_empty() {
        return Err(InputError::Empty);
    }
    let year: i32 = input.parse().map_err(|_| InputError::NotANumber)?;
    if !year_in_range(year) {
        return Err(InputError::YearOutOfRange);
    }
    Ok(year)
}

pub fn parse_id(input: &str) -> Result<BookId, InputError> {
    if input.is_empty() {
        return Err(InputError::Empty);
    }
    BookId::parse(input).map_err(|_| InputError::MalformedId)
}

/// Accepts the label shown in `lang` or the canonical keyword.
pub fn parse_status(input: &str, lang: Lang) -> Result<Status, InputError> {
    if input.is_empty() {
        return Err(InputError::Empty);
    }
    let wanted = input.to_lowercase();
    if let Some(status) = Status::ALL
        .into_iter()
        .find(|s| status_label(lang, *s).to_lowercase() == wanted)
    {
        return Ok(status);
    }
    input.parse().map_err(|_| InputError::UnknownStatus)
}

pub fn parse_field(input: &str) -> Result<SearchField, InputError> {
    if input.is_empty() {
        return Err(InputError::Empty);
    }
    input.parse().map_err(|_| InputError::UnknownField)
}
