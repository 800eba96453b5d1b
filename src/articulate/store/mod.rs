//! # Storage Layer
//!
//! Cards live in a [`CardStore`]: an ordered in-memory list that writes itself
//! through to a key-value [`StorageBackend`] after every mutation.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: Production file-based storage
//!   - One JSON file per key inside the data directory
//!   - Writes go to a temporary file that is renamed into place
//!
//! - [`mem_backend::MemBackend`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate write failures
//!
//! ## Storage Format
//!
//! ```text
//! ~/.local/share/articulate/
//! ├── articulateCards.json   # JSON array of card records, in insertion order
//! └── config.json            # User configuration
//! ```
//!
//! The record layout matches what the browser card creator kept in
//! `localStorage`, so an exported `articulateCards` value can be dropped in
//! unchanged.

pub mod backend;
pub mod card_store;
pub mod fs_backend;
pub mod mem_backend;
pub mod persist;

pub use backend::StorageBackend;
pub use card_store::{CardStore, IdGenerator};
pub use persist::{CardPersistence, CARDS_KEY};
