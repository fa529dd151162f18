use super::DocumentStore;
use crate::error::{Result, ShelfError};
use std::cell::{Cell, RefCell};

/// In-memory document storage for testing.
///
/// Uses `RefCell` for interior mutability since shelf is single-threaded,
/// which lets `DocumentStore` take `&self` everywhere.
pub struct InMemoryDocument<T> {
    doc: RefCell<Option<T>>,
    saves: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl<T> Default for InMemoryDocument<T> {
    fn default() -> Self {
        Self {
            doc: RefCell::new(None),
            saves: Cell::new(0),
            simulate_write_error: Cell::new(false),
        }
    }
}

impl<T> InMemoryDocument<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `doc` already persisted.
    pub fn with_document(doc: T) -> Self {
        let store = Self::default();
        *store.doc.borrow_mut() = Some(doc);
        store
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl<T: Clone> InMemoryDocument<T> {
    /// The persisted document, if anything was ever stored.
    pub fn snapshot(&self) -> Option<T> {
        self.doc.borrow().clone()
    }
}

impl<T: Clone + Default> DocumentStore<T> for InMemoryDocument<T> {
    fn load(&self) -> Result<T> {
        let mut doc = self.doc.borrow_mut();
        Ok(doc.get_or_insert_with(T::default).clone())
    }

    fn save(&self, doc: &T) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(ShelfError::Store("Simulated write error".to_string()));
        }
        *self.doc.borrow_mut() = Some(doc.clone());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::catalogue::Catalogue;
    use crate::ids::CounterDocument;
    use crate::model::{Book, Value};

    pub type MemoryCatalogue =
        Catalogue<InMemoryDocument<Vec<Book>>, InMemoryDocument<CounterDocument>>;

    pub struct CatalogueFixture {
        pub catalogue: MemoryCatalogue,
    }

    impl Default for CatalogueFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CatalogueFixture {
        pub fn new() -> Self {
            Self {
                catalogue: Catalogue::open(InMemoryDocument::new(), InMemoryDocument::new())
                    .unwrap(),
            }
        }

        pub fn with_book(mut self, title: &str, author: &str, year: impl Into<Value>) -> Self {
            self.catalogue
                .add(title.to_string(), author.to_string(), year.into())
                .unwrap();
            self
        }

        pub fn with_books(mut self, count: usize) -> Self {
            for i in 0..count {
                self.catalogue
                    .add(
                        format!("Test Book {}", i + 1),
                        format!("Author {}", i + 1),
                        Value::Number(2000 + i as i64),
                    )
                    .unwrap();
            }
            self
        }
    }
}
