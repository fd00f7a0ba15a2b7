//! Pending registry for staged checks

use crate::check::CheckDescriptor;
use std::mem;

/// Ordered staging area for descriptors executed on the next drain pass
#[derive(Debug, Default)]
pub struct PendingRegistry {
    staged: Vec<CheckDescriptor>,
}

impl PendingRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a descriptor without evaluating it
    pub fn stage(&mut self, descriptor: CheckDescriptor) {
        self.staged.push(descriptor);
    }

    /// Take every staged descriptor in insertion order, leaving the
    /// registry empty
    ///
    /// Descriptors staged while the returned batch is being processed wait
    /// for the next drain.
    pub fn take_all(&mut self) -> Vec<CheckDescriptor> {
        mem::take(&mut self.staged)
    }

    /// Number of staged descriptors
    pub fn len(&self) -> usize {
        self.staged.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }
}
