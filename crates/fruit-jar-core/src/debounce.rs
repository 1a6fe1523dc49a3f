//! Debounce bookkeeping
//!
//! Pure state machine behind the search box: the UI owns the timer, this
//! decides whether a timer firing should still apply its value. Time is
//! passed in as milliseconds so the logic runs the same in tests and in the
//! browser.

/// Quiescence window for search input
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Identifies one scheduled value; only the latest token can fire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceToken(u64);

#[derive(Debug, Clone)]
struct Pending<T> {
    token: DebounceToken,
    value: T,
    due_at: u64,
}

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window_ms: u64,
    generation: u64,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            generation: 0,
            pending: None,
        }
    }

    /// Replace any pending value with `value`, restarting the window at `now_ms`
    pub fn schedule(&mut self, value: T, now_ms: u64) -> DebounceToken {
        self.generation += 1;
        let token = DebounceToken(self.generation);
        self.pending = Some(Pending {
            token,
            value,
            due_at: now_ms.saturating_add(self.window_ms),
        });
        token
    }

    /// Take the pending value if `token` is still current and its window elapsed
    pub fn fire(&mut self, token: DebounceToken, now_ms: u64) -> Option<T> {
        let ready = matches!(&self.pending, Some(p) if p.token == token && now_ms >= p.due_at);
        if ready {
            return self.pending.take().map(|p| p.value);
        }
        if let Some(p) = &self.pending {
            if p.token != token {
                log::trace!("debounce token {:?} superseded by {:?}", token, p.token);
            }
        }
        None
    }

    /// Drop the pending value, e.g. on teardown
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_after_window() {
        let mut d = Debouncer::new(300);
        let t = d.schedule("ap", 1_000);
        assert_eq!(d.fire(t, 1_299), None);
        assert_eq!(d.fire(t, 1_300), Some("ap"));
        // A token only fires once
        assert_eq!(d.fire(t, 2_000), None);
    }

    #[test]
    fn test_rapid_keystrokes_only_apply_last() {
        let mut d = Debouncer::new(300);
        let t1 = d.schedule("a", 0);
        let t2 = d.schedule("ap", 100);
        let t3 = d.schedule("app", 200);

        assert_eq!(d.fire(t1, 300), None);
        assert_eq!(d.fire(t2, 400), None);
        assert_eq!(d.fire(t3, 499), None);
        assert_eq!(d.fire(t3, 500), Some("app"));
    }

    #[test]
    fn test_cancel_discards_pending() {
        let mut d = Debouncer::new(300);
        let t = d.schedule(String::from("kiwi"), 0);
        d.cancel();
        assert_eq!(d.fire(t, 1_000), None);
    }

    #[test]
    fn test_default_window() {
        let mut d: Debouncer<String> = Debouncer::default();
        let t = d.schedule(String::from("fig"), 0);
        assert_eq!(d.fire(t, SEARCH_DEBOUNCE_MS - 1), None);
        assert_eq!(d.fire(t, SEARCH_DEBOUNCE_MS), Some(String::from("fig")));
    }
}
