use crate::model::Book;

pub mod add;
pub mod delete;
pub mod list;
pub mod search;
pub mod status;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_books: Vec<Book>,
    pub listed_books: Vec<Book>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<Book>) -> Self {
        self.listed_books = books;
        self
    }

    /// True when any message reports a failure (e.g. an unknown id).
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}

pub(crate) fn not_found(id: u64) -> CmdMessage {
    CmdMessage::error(format!("Book with id {} not found.", id))
}
