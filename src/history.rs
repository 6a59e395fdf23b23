//! Execution history: the append-only record an orchestrator keeps.

use std::ops::Deref;

use serde::Serialize;

/// An ordered log of completed actions.
///
/// Entries are only ever pushed, and only by the owning orchestrator.
/// Readers see a plain slice; there is no way to edit or remove an
/// entry once recorded.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct History<T> {
    entries: Vec<T>,
}

impl<T> History<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub(crate) fn append(&mut self, entry: T) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for History<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.entries
    }
}
