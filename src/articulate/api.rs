//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the single
//! entry point for all articulate operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the one [`CardStore`] for the session
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (e.g., parsing `3` / `#1718000000000` into selectors)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and never prompts: confirmation for `clear` arrives as
//! a plain `bool` decided by the caller.
//!
//! ## Generic Over StorageBackend
//!
//! `ArticulateApi<B: StorageBackend>` is generic over the storage backend:
//! - Production: `ArticulateApi<FsBackend>`
//! - Testing: `ArticulateApi<MemBackend>`

use crate::commands;
use crate::error::{ArticulateError, Result};
use crate::model::Draft;
use crate::render::CardSelector;
use crate::store::{CardStore, StorageBackend};
use chrono::Utc;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ArticulatePaths {
    /// Holds the card record and `config.json`.
    pub data_dir: PathBuf,
}

/// The main API facade for articulate operations.
pub struct ArticulateApi<B: StorageBackend> {
    store: CardStore<B>,
    paths: ArticulatePaths,
}

impl<B: StorageBackend> ArticulateApi<B> {
    /// Opens the store from `backend`; persisted cards replace any in-memory state.
    pub fn new(backend: B, paths: ArticulatePaths) -> Self {
        Self {
            store: CardStore::open(backend),
            paths,
        }
    }

    pub fn add_card(&mut self, draft: &Draft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, draft)
    }

    pub fn list_cards(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn remove_cards<I: AsRef<str>>(&mut self, refs: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(refs)?;
        commands::remove::run(&mut self.store, &selectors)
    }

    pub fn clear_cards(&mut self, confirmed: bool) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.store, confirmed)
    }

    /// Writes today's sheet into `out_dir`.
    pub fn export_cards(&self, out_dir: &Path) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, out_dir, Utc::now().date_naive())
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths.data_dir, action)
    }

    pub fn card_count(&self) -> usize {
        self.store.count()
    }

    pub fn store(&self) -> &CardStore<B> {
        &self.store
    }

    pub fn paths(&self) -> &ArticulatePaths {
        &self.paths
    }
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<CardSelector>> {
    inputs
        .iter()
        .map(|s| s.as_ref().parse().map_err(ArticulateError::Api))
        .collect()
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, ExportSummary, MessageLevel};
