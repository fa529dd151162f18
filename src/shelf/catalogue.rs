//! # Catalogue
//!
//! The catalogue is the in-memory book list plus the two stores behind it.
//! The book document is read once in [`Catalogue::open`]; after that the
//! in-memory list is authoritative and every mutation writes the whole list
//! back before returning.
//!
//! If a save fails the in-memory change is rolled back, so memory never runs
//! ahead of the file. The error still propagates and the caller is expected
//! to stop.

use crate::error::Result;
use crate::ids::{CounterDocument, IdAllocator};
use crate::model::{Book, BookStatus, SearchField, Value};
use crate::store::DocumentStore;
use tracing::{debug, info};

pub struct Catalogue<B, C> {
    store: B,
    ids: IdAllocator<C>,
    books: Vec<Book>,
}

impl<B, C> Catalogue<B, C>
where
    B: DocumentStore<Vec<Book>>,
    C: DocumentStore<CounterDocument>,
{
    pub fn open(store: B, counter: C) -> Result<Self> {
        let books = store.load()?;
        let ids = IdAllocator::open(counter)?;
        debug!(count = books.len(), "catalogue opened");
        Ok(Self { store, ids, books })
    }

    pub fn list_all(&self) -> &[Book] {
        &self.books
    }

    pub fn get(&self, id: u64) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn add(&mut self, title: String, author: String, year: Value) -> Result<Book> {
        let id = self.ids.next_id()?;
        let book = Book::new(id, title, author, year);

        self.books.push(book.clone());
        if let Err(e) = self.store.save(&self.books) {
            self.books.pop();
            return Err(e);
        }

        info!(id, title = %book.title, "book added");
        Ok(book)
    }

    /// Removes the book with `id`. `Ok(None)` when there is no such book;
    /// nothing is written in that case.
    pub fn delete(&mut self, id: u64) -> Result<Option<Book>> {
        let Some(pos) = self.books.iter().position(|b| b.id == id) else {
            debug!(id, "delete: no such book");
            return Ok(None);
        };

        let removed = self.books.remove(pos);
        if let Err(e) = self.store.save(&self.books) {
            self.books.insert(pos, removed);
            return Err(e);
        }

        info!(id, title = %removed.title, "book deleted");
        Ok(Some(removed))
    }

    /// All books whose `field` contains `query`, ignoring case, in catalogue
    /// order.
    pub fn search(&self, field: SearchField, query: &Value) -> Vec<Book> {
        let found: Vec<Book> = self
            .books
            .iter()
            .filter(|b| b.matches(field, query))
            .cloned()
            .collect();
        debug!(%field, %query, hits = found.len(), "search");
        found
    }

    pub fn change_status(&mut self, id: u64, status: BookStatus) -> Result<Option<Book>> {
        let Some(book) = self.books.iter_mut().find(|b| b.id == id) else {
            debug!(id, "change_status: no such book");
            return Ok(None);
        };

        let previous = std::mem::replace(&mut book.status, status);
        let updated = book.clone();
        if let Err(e) = self.store.save(&self.books) {
            if let Some(book) = self.books.iter_mut().find(|b| b.id == id) {
                book.status = previous;
            }
            return Err(e);
        }

        info!(id, %status, "status changed");
        Ok(Some(updated))
    }
}
