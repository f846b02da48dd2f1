//! Bounded in-memory sink for exported trace lines.
//!
//! A page has no filesystem, so exported spans are kept in memory until the
//! host drains them (to the console, a beacon endpoint, a test assertion).
//! When full, the oldest line is dropped to make room.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

/// Lines kept before the oldest is dropped.
pub const DEFAULT_CAPACITY: usize = 1_024;

/// Shared, bounded queue of OTLP JSON lines.
///
/// Clones share the same queue.
///
/// # Example
///
/// ```rust
/// use portfolio_ui::observability::SpanBuffer;
///
/// let buffer = SpanBuffer::with_capacity(2);
/// buffer.push("a".to_string());
/// buffer.push("b".to_string());
/// buffer.push("c".to_string());
/// assert_eq!(buffer.drain(), vec!["b", "c"]);
/// assert!(buffer.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct SpanBuffer {
    lines: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl Default for SpanBuffer {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl SpanBuffer {
    /// Creates an empty buffer holding at most `capacity` lines (minimum 1).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY)))),
            capacity,
        }
    }

    /// Appends a line, dropping the oldest when full.
    pub fn push(&self, line: String) {
        let mut lines = self.lines.lock().unwrap_or_else(PoisonError::into_inner);
        while lines.len() >= self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Removes and returns every buffered line, oldest first.
    #[must_use]
    pub fn drain(&self) -> Vec<String> {
        let mut lines = self.lines.lock().unwrap_or_else(PoisonError::into_inner);
        lines.drain(..).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}
