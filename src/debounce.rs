//! Debounced search input
//!
//! Keystrokes go through a [`Debouncer`]; a browser timer fires once the
//! input has been quiet for the window. Each keystroke replaces (and so
//! cancels) the previous timer, and teardown drops both.

use fruit_jar_core::{Debouncer, SEARCH_DEBOUNCE_MS};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::store::{store_set_search_query, AppStore};

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Returns a handler to call with every raw input value
pub fn use_debounced_search(store: AppStore) -> impl Fn(String) + Copy + 'static {
    let debouncer = StoredValue::new(Debouncer::<String>::new(SEARCH_DEBOUNCE_MS));
    let timer = StoredValue::new_local(None::<Timeout>);

    on_cleanup(move || {
        debouncer.try_update_value(|d| d.cancel());
        timer.try_update_value(|t| *t = None);
    });

    move |query: String| {
        let scheduled_at = now_ms();
        let Some(token) = debouncer.try_update_value(|d| d.schedule(query, scheduled_at)) else {
            return;
        };

        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS as u32, move || {
            // The timer only fires once the window has passed
            let due = scheduled_at + SEARCH_DEBOUNCE_MS;
            if let Some(Some(query)) = debouncer.try_update_value(|d| d.fire(token, due)) {
                web_sys::console::log_1(&format!("[SEARCH] Applying query {:?}", query).into());
                store_set_search_query(&store, query);
            }
        });

        // Dropping the previous handle cancels its timer
        timer.try_update_value(|t| *t = Some(timeout));
    }
}
