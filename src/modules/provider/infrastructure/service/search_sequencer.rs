use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic ticket issuer guarding against stale search responses.
///
/// The engine has no cancellation model: a caller that fires a new search
/// while an old one is in flight takes a ticket per request and drops any
/// response whose ticket is no longer current, so a slow old response can
/// never overwrite a newer result set.
#[derive(Debug, Default)]
pub struct SearchSequencer {
    latest: AtomicU64,
}

impl SearchSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket, invalidating all previously issued ones.
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_ticket_invalidates_older_ones() {
        let sequencer = SearchSequencer::new();

        let first = sequencer.begin();
        assert!(sequencer.is_current(first));

        let second = sequencer.begin();
        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));
    }

    #[test]
    fn tickets_increase_monotonically() {
        let sequencer = SearchSequencer::new();
        let a = sequencer.begin();
        let b = sequencer.begin();
        let c = sequencer.begin();
        assert!(a < b && b < c);
    }
}
