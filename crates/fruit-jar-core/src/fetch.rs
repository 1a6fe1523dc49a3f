//! Fetch supersession
//!
//! Every catalog fetch (initial load or retry) takes a ticket. Only the
//! holder of the latest ticket may publish its result, so a slow response
//! from an earlier attempt can never overwrite a newer one.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct FetchTracker {
    latest: u64,
}

impl FetchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new attempt, superseding any in-flight one
    pub fn begin(&mut self) -> FetchTicket {
        self.latest += 1;
        log::debug!("fetch #{} started", self.latest);
        FetchTicket(self.latest)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Mark `ticket` finished; returns whether its result should be applied
    pub fn complete(&mut self, ticket: FetchTicket) -> bool {
        if !self.is_current(ticket) {
            log::debug!("discarding stale fetch #{} (latest #{})", ticket.0, self.latest);
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_fetch_applies() {
        let mut tracker = FetchTracker::new();
        let t = tracker.begin();
        assert!(tracker.is_current(t));
        assert!(tracker.complete(t));
    }

    #[test]
    fn test_retry_supersedes_earlier_fetch() {
        let mut tracker = FetchTracker::new();
        let first = tracker.begin();
        let retry = tracker.begin();

        // The retry resolves first, then the stale one arrives
        assert!(tracker.complete(retry));
        assert!(!tracker.complete(first));
    }

    #[test]
    fn test_stale_completion_leaves_latest_current() {
        let mut tracker = FetchTracker::new();
        let first = tracker.begin();
        let retry = tracker.begin();
        assert!(!tracker.complete(first));
        assert!(tracker.is_current(retry));
        assert!(tracker.complete(retry));
    }
}
