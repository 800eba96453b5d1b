use super::backend::StorageBackend;
use crate::error::{ArticulateError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since articulate is single-threaded,
/// which lets the `StorageBackend` trait take `&self` everywhere.
#[derive(Default)]
pub struct MemBackend {
    entries: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
    writes: RefCell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `key` with raw text, bypassing the write counter.
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl StorageBackend for MemBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(ArticulateError::Store("Simulated write error".to_string()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}
