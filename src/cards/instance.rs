//! Card instances - runtime-unique copies of catalog entries.
//!
//! A `CardInstance` is one physical copy of a card, tracked through
//! deck/hand/discard by identity. Two copies of the same definition are
//! distinct instances with distinct ids.
//!
//! Ids are allocated by `InstanceIdGen`, a monotonic counter owned by the
//! combat session. An id is never reused within a session, and a fresh
//! session starts a fresh counter, which keeps tests deterministic.

use serde::{Deserialize, Serialize};

use super::definition::CardId;

/// Unique identifier for a card instance within a session.
///
/// Ids order by allocation time, so they are `Ord`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u64);

impl InstanceId {
    /// Create a new instance ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// Monotonic instance-id allocator.
///
/// Owned by the combat session rather than hidden in static state, so a
/// new session (or a test) starts from a known counter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceIdGen {
    next: u64,
}

impl InstanceIdGen {
    /// Create an allocator starting at id 1.
    #[must_use]
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Allocate the next instance id.
    pub fn allocate(&mut self) -> InstanceId {
        let id = InstanceId(self.next);
        self.next += 1;
        id
    }
}

impl Default for InstanceIdGen {
    fn default() -> Self {
        Self::new()
    }
}

/// A playable copy of a catalog entry.
///
/// Equality is identity equality: two instances compare equal only if they
/// are the same copy. Pile membership checks compare `id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Session-unique identity of this copy.
    pub id: InstanceId,

    /// Reference to the card definition.
    pub card: CardId,
}

impl CardInstance {
    /// Create a card instance.
    #[must_use]
    pub const fn new(id: InstanceId, card: CardId) -> Self {
        Self { id, card }
    }
}
