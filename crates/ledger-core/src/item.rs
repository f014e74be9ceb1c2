//! Item Entity
//!
//! A collected record: display name, scanned or typed code, creation time.

use serde::{Deserialize, Serialize};

pub type ItemId = u64;

/// A ledger item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier (creation time in ms, bumped on collision)
    pub id: ItemId,
    /// Display label
    pub name: String,
    /// Scanned or entered identifier, never empty
    pub code: String,
    /// Human-readable creation time
    pub timestamp: String,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, code: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            code: code.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// Hands out timestamp-derived ids that never repeat within a session.
///
/// Two items created in the same millisecond get consecutive ids instead of
/// colliding.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdGenerator {
    last: ItemId,
}

impl IdGenerator {
    /// Start after an already issued id
    pub fn starting_after(last: ItemId) -> Self {
        Self { last }
    }

    pub fn next(&mut self, now_millis: u64) -> ItemId {
        let id = now_millis.max(self.last + 1);
        self.last = id;
        id
    }

    /// Make sure ids issued later stay above `id`
    pub fn observe(&mut self, id: ItemId) {
        self.last = self.last.max(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_clock() {
        let mut ids = IdGenerator::default();
        assert_eq!(ids.next(1_000), 1_000);
        assert_eq!(ids.next(2_000), 2_000);
    }

    #[test]
    fn test_same_millisecond_does_not_collide() {
        let mut ids = IdGenerator::default();
        let a = ids.next(5_000);
        let b = ids.next(5_000);
        let c = ids.next(4_999);
        assert_eq!((a, b, c), (5_000, 5_001, 5_002));
    }

    #[test]
    fn test_observe_keeps_ids_above_seed() {
        let mut ids = IdGenerator::starting_after(2);
        ids.observe(10);
        assert_eq!(ids.next(3), 11);
    }
}
