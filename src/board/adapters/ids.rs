//! Id generator adapters.

use crate::board::ports::IdGenerator;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Generates `<prefix>-<uuid>` ids from random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixedIdGenerator;

impl PrefixedIdGenerator {
    /// Creates the generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl IdGenerator for PrefixedIdGenerator {
    fn next_id(&self, prefix: &str) -> String {
        format!("{prefix}-{}", Uuid::new_v4().simple())
    }
}

/// Generates `<prefix>-<n>` ids from a shared counter.
///
/// Deterministic, which makes it suitable for tests and fixtures.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Creates a generator whose first id ends in `1`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self, prefix: &str) -> String {
        let value = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{prefix}-{value}")
    }
}
