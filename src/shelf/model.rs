use serde::{Deserialize, Serialize};
use std::fmt;

/// A loosely typed field value: either free text or an integer.
///
/// Years typed at the prompt are kept as text, while catalogues edited by
/// hand may carry plain numbers. Both compare through [`Value::as_text`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(i64),
    Text(String),
}

impl Value {
    /// The single coercion used for matching.
    pub fn as_text(&self) -> String {
        match self {
            Value::Number(n) => n.to_string(),
            Value::Text(s) => s.clone(),
        }
    }

    /// Reads user input as a number when it is one, text otherwise.
    pub fn parse_loose(input: &str) -> Self {
        match input.trim().parse::<i64>() {
            Ok(n) => Value::Number(n),
            Err(_) => Value::Text(input.to_string()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookStatus {
    Available,
    CheckedOut,
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "available"),
            BookStatus::CheckedOut => write!(f, "checked out"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Title,
    Author,
    Year,
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchField::Title => write!(f, "title"),
            SearchField::Author => write!(f, "author"),
            SearchField::Year => write!(f, "year"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub year: Value,
    pub status: BookStatus,
}

impl Book {
    pub fn new(id: u64, title: String, author: String, year: Value) -> Self {
        Self {
            id,
            title,
            author,
            year,
            status: BookStatus::Available,
        }
    }

    /// The string form of a searchable field.
    pub fn field_text(&self, field: SearchField) -> String {
        match field {
            SearchField::Title => self.title.clone(),
            SearchField::Author => self.author.clone(),
            SearchField::Year => self.year.as_text(),
        }
    }

    /// Case-insensitive substring match of `query` against `field`.
    pub fn matches(&self, field: SearchField, query: &Value) -> bool {
        self.field_text(field)
            .to_lowercase()
            .contains(&query.as_text().to_lowercase())
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id: {}, title: {}, author: {}, year: {}, status: {}",
            self.id, self.title, self.author, self.year, self.status
        )
    }
}
