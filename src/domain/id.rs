//! Record id generation.
//!
//! Ids are millisecond timestamps, which keeps them compatible with ids
//! already stored by the board, but the generator never hands out the same
//! value twice: when two records are created within one millisecond (or the
//! clock steps backwards) the next id is simply `last + 1`.

/// Monotonic, timestamp-based id source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    #[must_use]
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// Makes sure future ids are greater than `id`.
    ///
    /// Called with every id loaded from storage so freshly generated ids can
    /// never collide with existing records.
    pub fn observe(&mut self, id: i64) {
        self.last = self.last.max(id);
    }

    /// Returns the next id, using the current wall clock.
    pub fn next_id(&mut self) -> i64 {
        self.next_at(chrono::Utc::now().timestamp_millis())
    }

    /// Returns the next id given the current time in milliseconds.
    pub fn next_at(&mut self, now_millis: i64) -> i64 {
        let id = now_millis.max(self.last.saturating_add(1));
        self.last = id;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_millisecond_yields_distinct_ids() {
        let mut ids = IdGenerator::new();
        let first = ids.next_at(1_000);
        let second = ids.next_at(1_000);
        assert_eq!(first, 1_000);
        assert_eq!(second, 1_001);
    }

    #[test]
    fn test_clock_going_backwards_still_increases() {
        let mut ids = IdGenerator::new();
        let first = ids.next_at(5_000);
        let second = ids.next_at(4_000);
        assert!(second > first);
    }

    #[test]
    fn test_observed_ids_are_never_reissued() {
        let mut ids = IdGenerator::new();
        ids.observe(9_999);
        assert_eq!(ids.next_at(10), 10_000);
    }

    #[test]
    fn test_wall_clock_ids_are_timestamps() {
        let mut ids = IdGenerator::new();
        let before = chrono::Utc::now().timestamp_millis();
        let id = ids.next_id();
        assert!(id >= before);
    }
}
