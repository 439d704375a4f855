//! Message tables, one per [`Lang`].
//!
//! Fixed strings live in a [`Texts`] table; anything with parameters is a
//! function matching on the language.

use super::prompt::InputError;
use libris::api::Outcome;
use libris::config::Lang;
use libris::dispatcher::Command;
use libris::model::{Book, SearchField, Status, MIN_YEAR};

pub struct Texts {
    pub welcome: &'static str,
    pub commands_header: &'static str,
    pub enter_command: &'static str,
    pub enter_title: &'static str,
    pub enter_author: &'static str,
    pub enter_year: &'static str,
    pub enter_id: &'static str,
    pub enter_status: &'static str,
    pub enter_query: &'static str,
    pub enter_field: &'static str,
    pub books_header: &'static str,
    pub next_page: &'static str,
    pub end_of_list: &'static str,
}

static EN: Texts = Texts {
    welcome: "Welcome to the library management system!",
    commands_header: "Available commands:",
    enter_command: "\nEnter a command: ",
    enter_title: "\nEnter the book title: ",
    enter_author: "\nEnter the author: ",
    enter_year: "\nEnter the publication year: ",
    enter_id: "Enter the book id: ",
    enter_status: "\nEnter the new status: ",
    enter_query: "Enter search keywords: ",
    enter_field: "Search by field: ",
    books_header: "Books in the library:",
    next_page: "Press Enter for the next page",
    end_of_list: "Press Enter to return",
};

static RU: Texts = Texts {
    welcome: "Добро пожаловать в систему управления библиотекой!",
    commands_header: "Доступные команды:",
    enter_command: "\nВведите команду: ",
    enter_title: "\nВведите название книги: ",
    enter_author: "\nВведите имя автора: ",
    enter_year: "\nВведите год издания книги: ",
    enter_id: "Введите id книги: ",
    enter_status: "\nВведите новый статус книги: ",
    enter_query: "Введите ключевые слова: ",
    enter_field: "По какому полю искать: ",
    books_header: "Книги в библиотеке:",
    next_page: "Следующая страница:",
    end_of_list: "Выход:",
};

pub fn texts(lang: Lang) -> &'static Texts {
    match lang {
        Lang::En => &EN,
        Lang::Ru => &RU,
    }
}

pub fn command_summary(lang: Lang, command: Command) -> &'static str {
    match (lang, command) {
        (Lang::En, Command::Add) => "Add a new book",
        (Lang::En, Command::Delete) => "Delete a book by id",
        (Lang::En, Command::Find) => "Find books by title, author or year",
        (Lang::En, Command::List) => "Show all books",
        (Lang::En, Command::Status) => "Change the status of a book",
        (Lang::En, Command::Help) => "Show available commands",
        (Lang::En, Command::Exit) => "Quit the application",
        (Lang::Ru, Command::Add) => "Добавить новую книгу",
        (Lang::Ru, Command::Delete) => "Удалить книгу по ID",
        (Lang::Ru, Command::Find) => "Найти книги по title, author или year",
        (Lang::Ru, Command::List) => "Показать все книги",
        (Lang::Ru, Command::Status) => "Изменить статус книги",
        (Lang::Ru, Command::Help) => "Показать доступные команды",
        (Lang::Ru, Command::Exit) => "Выйти из приложения",
    }
}

pub fn status_label(lang: Lang, status: Status) -> &'static str {
    match (lang, status) {
        (Lang::En, Status::Available) => "Available",
        (Lang::En, Status::CheckedOut) => "Checked out",
        (Lang::Ru, Status::Available) => "В наличии",
        (Lang::Ru, Status::CheckedOut) => "Выдана",
    }
}

fn quoted_list<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    items
        .into_iter()
        .map(|s| format!("'{}'", s))
        .collect::<Vec<_>>()
        .join(", ")
}

fn status_choices(lang: Lang) -> String {
    quoted_list(Status::ALL.iter().map(|s| status_label(lang, *s)))
}

fn field_choices() -> String {
    quoted_list(SearchField::ALL.iter().map(|f| f.as_str()))
}

pub fn describe_book(lang: Lang, book: &Book) -> String {
    match lang {
        Lang::En => format!(
            "{} ({}), {}, status: {}. (id: {})",
            book.title(),
            book.author(),
            book.year(),
            status_label(lang, book.status()),
            book.id()
        ),
        Lang::Ru => format!(
            "Книга: {} ({}), {}, статус: {}. (id: {})",
            book.title(),
            book.author(),
            book.year(),
            status_label(lang, book.status()),
            book.id()
        ),
    }
}

pub fn describe_outcome(lang: Lang, outcome: &Outcome) -> String {
    match lang {
        Lang::En => match outcome {
            Outcome::BookAdded { title, .. } => {
                format!("Book \"{}\" added to the library.", title)
            }
            Outcome::BookDeleted { .. } => "Book deleted.".to_string(),
            Outcome::BookNotFound { id } => format!("There is no book with id {}.", id),
            Outcome::NoMatches { field, query } => {
                format!("No books match your query: {} - {}", field, query)
            }
            Outcome::NoBooks => "There are no books in the library.".to_string(),
            Outcome::StatusChanged { status, .. } => {
                format!("Book status changed to \"{}\".", status_label(lang, *status))
            }
            Outcome::UnknownCommand { name } => format!(
                "Unknown command '{}'. Type 'help' for the list of commands.",
                name
            ),
            Outcome::Failed { reason } => format!("Error: {}", reason),
            Outcome::Farewell => "Goodbye!".to_string(),
        },
        Lang::Ru => match outcome {
            Outcome::BookAdded { .. } => "Книга успешно добавлена в библиотеку.".to_string(),
            Outcome::BookDeleted { .. } => "Книга успешно удалена.".to_string(),
            Outcome::BookNotFound { .. } => "Книги с данным id не существует.".to_string(),
            Outcome::NoMatches { field, query } => {
                format!("Нет книг, подходящих вашему запросу: {} - {}", field, query)
            }
            Outcome::NoBooks => "Нет книг, подходящих вашему запросу.".to_string(),
            Outcome::StatusChanged { status, .. } => format!(
                "Статус книги успешно изменен на \"{}\"",
                status_label(lang, *status)
            ),
            Outcome::UnknownCommand { .. } => {
                "Неизвестная команда. Для списка команд введите 'help'.".to_string()
            }
            Outcome::Failed { reason } => format!("Ошибка: {}", reason),
            Outcome::Farewell => "Всего доброго!".to_string(),
        },
    }
}

pub fn describe_input_error(lang: Lang, error: &InputError, current_year: i32) -> String {
    match lang {
        Lang::En => match error {
            InputError::Empty => "A value is required.".to_string(),
            InputError::UnknownCommand => {
                "Unknown command. Type 'help' for the list of commands.".to_string()
            }
            InputError::NotANumber | InputError::YearOutOfRange => format!(
                "Error: the year must be a number from {} to {}",
                MIN_YEAR, current_year
            ),
            InputError::MalformedId => "Error: malformed id.".to_string(),
            InputError::UnknownStatus => {
                format!("Invalid status. Possible values: {}", status_choices(lang))
            }
            InputError::UnknownField => {
                format!("Invalid field. Possible values: {}", field_choices())
            }
        },
        Lang::Ru => match error {
            InputError::Empty => "Введите значение.".to_string(),
            InputError::UnknownCommand => {
                "Неизвестная команда. Для списка команд введите 'help'.".to_string()
            }
            InputError::NotANumber | InputError::YearOutOfRange => format!(
                "Ошибка: Год издания должен быть числом от {} до {}",
                MIN_YEAR, current_year
            ),
            InputError::MalformedId => "Ошибка: Неверный формат ID.".to_string(),
            InputError::UnknownStatus => {
                format!("Неверный статус. Возможные значения: {}", status_choices(lang))
            }
            InputError::UnknownField => {
                format!("Неверное поле. Возможные значения: {}", field_choices())
            }
        },
    }
}
