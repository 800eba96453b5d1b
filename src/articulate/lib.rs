//! # Articulate Architecture
//!
//! Articulate is a **UI-agnostic card authoring library**: it collects word cards
//! for the Articulate party game (six labeled words plus a "spade" category),
//! keeps them on disk, and prints them as cut-out PDF sheets. The `articulate`
//! binary is one client of the library, not the other way round.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts for missing fields, confirms   │
//! │  - The ONLY place that knows about stdout/stdin/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session's CardStore                             │
//! │  - Normalizes inputs (display indexes / #ids → selectors)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / remove / clear / list / export / config            │
//! │  - Returns CmdResult with user-facing messages              │
//! └─────────────────────────────────────────────────────────────┘
//!               │                               │
//!               ▼                               ▼
//! ┌───────────────────────────┐   ┌─────────────────────────────┐
//! │  Storage (store/)         │   │  Export (export/)           │
//! │  CardStore over a         │   │  Grid layout over a         │
//! │  key-value StorageBackend │   │  DrawingBackend (PDF)       │
//! └───────────────────────────┘   └─────────────────────────────┘
//! ```
//!
//! ## Failure Policy
//!
//! - Validation problems come back as error *messages*; nothing changes.
//! - Persistence failures are logged and swallowed. The in-memory list stays
//!   authoritative for the rest of the session.
//! - Export failures are logged and reported with a generic message, and no
//!   file is written.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Card store, persistence mirror and storage backends
//! - [`model`]: Core data types (`Card`, `CardId`, `Field`, `Draft`)
//! - [`validate`]: Draft validation
//! - [`render`]: Display view-models and card selectors
//! - [`export`]: Sheet layout, text wrapping and drawing backends
//! - [`notify`]: Transient status notices
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod notify;
pub mod render;
pub mod store;
pub mod validate;
