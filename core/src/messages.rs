//! User-facing message log.
//!
//! `AlumnosService` appends one line per backend call. The default
//! [`MessageService`] keeps them in memory for the UI to display.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Sink for human-readable status lines.
pub trait MessageLog: Send + Sync {
    fn add(&self, message: String);
}

/// Thread-safe, in-memory message list.
#[derive(Debug, Default)]
pub struct MessageService {
    messages: Mutex<Vec<String>>,
}

impl MessageService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the messages recorded so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    // A panicking writer cannot leave a half-pushed Vec behind.
    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MessageLog for MessageService {
    fn add(&self, message: String) {
        self.lock().push(message);
    }
}
