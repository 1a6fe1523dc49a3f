//! Application Context
//!
//! Shared state provided via Leptos Context API.

use fruit_jar_core::{FetchTicket, FetchTracker};
use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to (re)fetch the catalog - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to (re)fetch the catalog - write
    set_reload_trigger: WriteSignal<u32>,
    /// Which fetch attempt is allowed to publish its result
    fetch_tracker: StoredValue<FetchTracker>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            fetch_tracker: StoredValue::new(FetchTracker::new()),
        }
    }

    /// Trigger a new catalog fetch (retry)
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Start a fetch attempt, superseding any in flight
    pub fn begin_fetch(&self) -> Option<FetchTicket> {
        self.fetch_tracker.try_update_value(|t| t.begin())
    }

    /// Whether the attempt holding `ticket` may publish its result
    pub fn complete_fetch(&self, ticket: FetchTicket) -> bool {
        self.fetch_tracker
            .try_update_value(|t| t.complete(ticket))
            .unwrap_or(false)
    }
}
