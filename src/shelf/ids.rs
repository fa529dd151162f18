use crate::error::Result;
use crate::store::DocumentStore;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The persisted counter.
///
/// A counter file that was created but never incremented holds an empty
/// sequence, which reads as zero. A non-empty sequence does not decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CounterDocument {
    Counter { id: u64 },
    Empty([(); 0]),
}

impl CounterDocument {
    pub fn value(&self) -> u64 {
        match self {
            CounterDocument::Counter { id } => *id,
            CounterDocument::Empty(_) => 0,
        }
    }
}

impl Default for CounterDocument {
    fn default() -> Self {
        CounterDocument::Empty([])
    }
}

/// Hands out ascending ids. Every issued id is persisted before it is
/// returned, so ids survive restarts and are never reissued.
pub struct IdAllocator<S> {
    store: S,
    current: u64,
}

impl<S: DocumentStore<CounterDocument>> IdAllocator<S> {
    pub fn open(store: S) -> Result<Self> {
        let current = store.load()?.value();
        debug!(current, "id counter loaded");
        Ok(Self { store, current })
    }

    /// The last id handed out, 0 if none.
    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn next_id(&mut self) -> Result<u64> {
        let next = self.current + 1;
        self.store.save(&CounterDocument::Counter { id: next })?;
        self.current = next;
        debug!(id = next, "id allocated");
        Ok(next)
    }
}
