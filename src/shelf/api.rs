//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every catalogue operation, whatever UI drives it.
//!
//! It dispatches to `commands/*.rs` and returns `Result<CmdResult>`. It holds
//! no business rules and never prints.
//!
//! ## Generic Over DocumentStore
//!
//! `ShelfApi<B, C>` is generic over the book store `B` and the counter store
//! `C`:
//! - Production: `ShelfApi<JsonFile<Vec<Book>>, JsonFile<CounterDocument>>`
//! - Testing: `ShelfApi<InMemoryDocument<..>, InMemoryDocument<..>>`

use crate::catalogue::Catalogue;
use crate::commands;
use crate::config::ShelfConfig;
use crate::error::Result;
use crate::ids::CounterDocument;
use crate::model::{Book, BookStatus, SearchField, Value};
use crate::store::fs::JsonFile;
use crate::store::DocumentStore;
use std::path::Path;

/// The main API facade for shelf operations.
pub struct ShelfApi<B, C> {
    catalogue: Catalogue<B, C>,
}

pub type FileApi = ShelfApi<JsonFile<Vec<Book>>, JsonFile<CounterDocument>>;

impl FileApi {
    /// Opens the JSON documents named by `config`, relative to `base_dir`.
    pub fn open_files(config: &ShelfConfig, base_dir: &Path) -> Result<Self> {
        let (books, ids) = config.resolve(base_dir);
        let catalogue = Catalogue::open(JsonFile::new(books), JsonFile::new(ids))?;
        Ok(Self::new(catalogue))
    }
}

impl<B, C> ShelfApi<B, C>
where
    B: DocumentStore<Vec<Book>>,
    C: DocumentStore<CounterDocument>,
{
    pub fn new(catalogue: Catalogue<B, C>) -> Self {
        Self { catalogue }
    }

    pub fn list_books(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.catalogue)
    }

    pub fn add_book(
        &mut self,
        title: String,
        author: String,
        year: Value,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.catalogue, title, author, year)
    }

    pub fn delete_book(&mut self, id: u64) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.catalogue, id)
    }

    pub fn search_books(&self, field: SearchField, query: &Value) -> Result<commands::CmdResult> {
        commands::search::run(&self.catalogue, field, query)
    }

    pub fn change_status(&mut self, id: u64, status: BookStatus) -> Result<commands::CmdResult> {
        commands::status::run(&mut self.catalogue, id, status)
    }

    pub fn catalogue(&self) -> &Catalogue<B, C> {
        &self.catalogue
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
