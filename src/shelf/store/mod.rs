//! # Storage Layer
//!
//! Shelf persists exactly two documents: the book list and the id counter.
//! Both go through the same [`DocumentStore`] trait, so the catalogue and the
//! id allocator each own an independent store instead of sharing a base type.
//!
//! ## Implementations
//!
//! - [`fs::JsonFile`]: Production storage, one pretty-printed JSON file per
//!   document. Loading a missing file creates it holding the document's
//!   default (an empty sequence for both documents).
//! - [`memory::InMemoryDocument`]: In-memory storage for testing. Can
//!   simulate write failures and counts saves.
//!
//! ## Storage Format
//!
//! ```text
//! json/
//! ├── books.json          # Array of books, insertion order
//! └── id_storage.json     # {"id": <last issued id>}
//! ```
//!
//! Every save replaces the whole file. There is no merging, locking or
//! partial-write recovery; one process owns the files for its lifetime.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Load/save capability for a single whole document.
pub trait DocumentStore<T> {
    /// Read the document. A store with nothing persisted yet yields the
    /// document's default and records it.
    fn load(&self) -> Result<T>;

    /// Replace the persisted document.
    fn save(&self, doc: &T) -> Result<()>;
}

impl<T, S: DocumentStore<T> + ?Sized> DocumentStore<T> for &S {
    fn load(&self) -> Result<T> {
        (**self).load()
    }

    fn save(&self, doc: &T) -> Result<()> {
        (**self).save(doc)
    }
}
