//! Stamper - Injectable source of message ids and send times
//!
//! Minting a fresh id and reading the wall clock are the only impure steps
//! in the state machine. They sit behind this trait so production code uses
//! real UUIDs and the system clock while tests inject a fixed sequence and
//! get fully deterministic transitions.

use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

/// Source of fresh message ids and the current time.
pub trait Stamper {
    /// Mint an id for the next message. Each call must return a new id.
    fn next_id(&mut self) -> Uuid;

    /// Current wall-clock time.
    fn now(&self) -> DateTime<Utc>;
}

/// Production stamper: random v4 UUIDs and the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemStamper;

impl Stamper for SystemStamper {
    fn next_id(&mut self) -> Uuid {
        Uuid::new_v4()
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Deterministic stamper for tests and replay.
///
/// Ids come from a counter embedded in the UUID, so the nth minted id is
/// always the same. The clock starts at a fixed instant and only moves when
/// the caller advances it.
#[derive(Debug, Clone)]
pub struct SequenceStamper {
    counter: u64,
    now: DateTime<Utc>,
}

impl Default for SequenceStamper {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceStamper {
    pub fn new() -> Self {
        // Arbitrary fixed instant; tests only care that it is stable.
        Self::starting_at(Utc.with_ymd_and_hms(2024, 3, 14, 12, 0, 0).unwrap())
    }

    /// Start the clock at `now`. The nil UUID is never minted, so it can
    /// stand in for a nonexistent message id.
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self { counter: 1, now }
    }

    /// Move the clock forward.
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    /// The id the next `next_id` call will return.
    pub fn peek_id(&self) -> Uuid {
        Uuid::from_u64_pair(0, self.counter)
    }
}

impl Stamper for SequenceStamper {
    fn next_id(&mut self) -> Uuid {
        let id = Uuid::from_u64_pair(0, self.counter);
        self.counter += 1;
        id
    }

    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_ids_are_stable_and_distinct() {
        let mut a = SequenceStamper::new();
        let mut b = SequenceStamper::new();
        assert_eq!(a.next_id(), b.next_id());
        assert_eq!(a.next_id(), b.next_id());

        let mut c = SequenceStamper::new();
        let first = c.next_id();
        let second = c.next_id();
        assert_ne!(first, second);
    }

    #[test]
    fn test_peek_matches_next() {
        let mut stamper = SequenceStamper::new();
        let peeked = stamper.peek_id();
        assert_eq!(stamper.next_id(), peeked);
        assert_ne!(stamper.peek_id(), peeked);
    }

    #[test]
    fn test_clock_only_moves_when_advanced() {
        let mut stamper = SequenceStamper::new();
        let start = stamper.now();
        stamper.next_id();
        assert_eq!(stamper.now(), start);

        stamper.advance(Duration::minutes(5));
        assert_eq!(stamper.now(), start + Duration::minutes(5));
    }

    #[test]
    fn test_system_stamper_mints_unique_ids() {
        let mut stamper = SystemStamper;
        assert_ne!(stamper.next_id(), stamper.next_id());
    }
}
