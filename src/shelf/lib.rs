//! # Shelf Architecture
//!
//! Shelf keeps a small home-library catalogue in two JSON files. The library
//! owns every rule about books; the `shelf` binary only asks questions on the
//! console and prints what the library hands back.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, per-action prompts, coloured printing         │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per action, returns a `CmdResult`           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalogue (catalogue.rs) + IdAllocator (ids.rs)            │
//! │  - In-memory book list, written through on every mutation   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `DocumentStore<T>` trait                                 │
//! │  - JsonFile (production), InMemoryDocument (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain Rust arguments and returns
//! `Result<CmdResult>`. It never prints and never exits the process. A
//! missing book is a message in the result, not an error; only storage
//! failures travel through [`error::ShelfError`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each menu action
//! - [`catalogue`]: The write-through book list
//! - [`ids`]: Monotonic id allocation
//! - [`store`]: Document storage abstraction and implementations
//! - [`model`]: `Book`, `BookStatus`, `Value`, `SearchField`
//! - [`config`]: `shelf.json` configuration
//! - [`error`]: Error types

pub mod api;
pub mod catalogue;
pub mod commands;
pub mod config;
pub mod error;
pub mod ids;
pub mod model;
pub mod store;
