//! Counting how many elements passed a point in a pipeline.

use crate::stream::Stream;
use std::cell::Cell;
use std::rc::Rc;

/// A shared visit counter.
///
/// Clones share the same count, so a test can hand one into a pipeline with
/// [`track`](Self::track) and read it back after the terminal operation.
#[derive(Clone, Debug, Default)]
pub struct CallCounter {
    calls: Rc<Cell<usize>>,
}

impl CallCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one call.
    pub fn bump(&self) {
        self.calls.set(self.calls.get() + 1);
    }

    /// Calls recorded so far, across every clone.
    #[must_use]
    pub fn count(&self) -> usize {
        self.calls.get()
    }

    /// Pass `stream` through unchanged, counting each element that is pulled
    /// through it.
    pub fn track<'a, T: 'a>(&self, stream: Stream<'a, T>) -> Stream<'a, T> {
        let counter = self.clone();
        stream.peek(move |_| counter.bump())
    }
}
