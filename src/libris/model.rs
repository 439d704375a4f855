//! Core catalog types: [`Book`], its [`BookId`] and [`Status`], and the
//! [`SearchField`]s a catalog can be searched by.
//!
//! A book's `status` is the only thing that changes after creation, so the
//! fields are private and only [`Book::set_status`] mutates.

use crate::error::{LibraryError, Result};
use chrono::{Datelike, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub const MIN_YEAR: i32 = 1;

pub fn current_year() -> i32 {
    Utc::now().year()
}

/// Whether `year` is a valid publication year as of today.
pub fn year_in_range(year: i32) -> bool {
    (MIN_YEAR..=current_year()).contains(&year)
}

/// Opaque book identifier.
///
/// New ids are v4 UUIDs, but any string found in a catalog file is accepted
/// so older data keeps loading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    pub fn generate() -> Self {
        Self::from(Uuid::new_v4())
    }

    /// Parses user input as a well-formed UUID, normalized to lowercase
    /// hyphenated form.
    pub fn parse(input: &str) -> Result<Self> {
        Uuid::parse_str(input.trim())
            .map(Self::from)
            .map_err(|e| LibraryError::InvalidValue(format!("malformed id '{}': {}", input, e)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Uuid> for BookId {
    fn from(id: Uuid) -> Self {
        Self(id.hyphenated().to_string())
    }
}

impl From<&str> for BookId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for BookId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    #[serde(rename = "available", alias = "В наличии")]
    Available,
    #[serde(rename = "checked out", alias = "Выдана")]
    CheckedOut,
}

impl Status {
    pub const ALL: [Status; 2] = [Status::Available, Status::CheckedOut];

    /// Canonical keyword, also the on-disk value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Available => "available",
            Status::CheckedOut => "checked out",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "available" => Ok(Status::Available),
            "checked out" | "checked-out" | "checked_out" => Ok(Status::CheckedOut),
            other => Err(LibraryError::InvalidValue(format!("unknown status '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Title,
    Author,
    Year,
}

impl SearchField {
    pub const ALL: [SearchField; 3] = [SearchField::Title, SearchField::Author, SearchField::Year];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Author => "author",
            SearchField::Year => "year",
        }
    }

    /// String form of this field on `book`, as matched by searches.
    pub fn value_of<'a>(&self, book: &'a Book) -> Cow<'a, str> {
        match self {
            SearchField::Title => Cow::Borrowed(&book.title),
            SearchField::Author => Cow::Borrowed(&book.author),
            SearchField::Year => Cow::Owned(book.year.to_string()),
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        SearchField::ALL
            .into_iter()
            .find(|field| field.as_str() == wanted)
            .ok_or_else(|| LibraryError::InvalidValue(format!("unknown field '{}'", wanted)))
    }
}

/// A catalog entry. Field order here is the key order in the catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    title: String,
    author: String,
    #[serde(deserialize_with = "year_from_number_or_string")]
    year: i32,
    id: BookId,
    #[serde(default)]
    status: Status,
}

impl Book {
    /// Creates a new, available book with a freshly generated id.
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: i32) -> Result<Self> {
        let title = title.into();
        let author = author.into();

        if title.trim().is_empty() {
            return Err(LibraryError::InvalidBook("title cannot be empty".into()));
        }
        if author.trim().is_empty() {
            return Err(LibraryError::InvalidBook("author cannot be empty".into()));
        }
        if !year_in_range(year) {
            return Err(LibraryError::InvalidBook(format!(
                "year {} is outside {}..={}",
                year,
                MIN_YEAR,
                current_year()
            )));
        }

        Ok(Self {
            title,
            author,
            year,
            id: BookId::generate(),
            status: Status::default(),
        })
    }

    /// Rebuilds a book from stored values. Nothing is validated.
    pub fn from_parts(
        id: impl Into<BookId>,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        status: Status,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            id: id.into(),
            status,
        }
    }

    pub fn id(&self) -> &BookId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}), {}, status: {}. (id: {})",
            self.title, self.author, self.year, self.status, self.id
        )
    }
}

// Older catalog files stored the year as a string.
fn year_from_number_or_string<'de, D>(deserializer: D) -> std::result::Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawYear {
        Number(i32),
        Text(String),
    }

    match RawYear::deserialize(deserializer)? {
        RawYear::Number(year) => Ok(year),
        RawYear::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}
