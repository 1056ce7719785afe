use super::backend::StorageBackend;
use super::STORAGE_KEY;
use crate::error::{Result, RosterError};
use crate::model::Student;
use std::cell::{Cell, RefCell};

/// In-memory storage backend for testing.
///
/// Keeps the serialized blob rather than the records, so loads go through
/// the same JSON parsing as the filesystem backend.
#[derive(Default)]
pub struct MemBackend {
    blob: RefCell<Option<String>>,
    saves: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Replace the stored blob directly, bypassing serialization.
    /// Stands in for another session writing the same key.
    pub fn set_raw(&self, raw: impl Into<String>) {
        *self.blob.borrow_mut() = Some(raw.into());
    }

    pub fn raw(&self) -> Option<String> {
        self.blob.borrow().clone()
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl StorageBackend for MemBackend {
    fn load(&self) -> Result<Option<Vec<Student>>> {
        match self.blob.borrow().as_deref() {
            None => Ok(None),
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(RosterError::Serialization),
        }
    }

    fn save(&self, students: &[Student]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(RosterError::Store("Simulated write error".to_string()));
        }
        let raw = serde_json::to_string(students).map_err(RosterError::Serialization)?;
        *self.blob.borrow_mut() = Some(raw);
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn location(&self) -> String {
        format!("memory://{}", STORAGE_KEY)
    }
}
