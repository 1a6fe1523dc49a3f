//! Fruit Jar Frontend App
//!
//! Main application component: catalog on the left, jar on the right.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{ErrorBanner, FruitCatalog, JarChart, JarPanel, Toolbar};
use crate::context::AppContext;
use crate::store::{store_begin_loading, store_set_catalog, store_set_fetch_error, AppState};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger));

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Fetch the catalog on mount and on every retry
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let Some(ticket) = ctx.begin_fetch() else { return };
        store_begin_loading(&store);
        web_sys::console::log_1(&format!("[APP] Fetching fruits, trigger={}", trigger).into());

        spawn_local(async move {
            let result = commands::fetch_fruits().await;
            if !ctx.complete_fetch(ticket) {
                web_sys::console::log_1(&"[APP] Dropping superseded fetch result".into());
                return;
            }
            match result {
                Ok(fruits) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} fruits", fruits.len()).into());
                    store_set_catalog(&store, fruits);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[APP] Fetch failed: {}", e).into());
                    store_set_fetch_error(&store, e);
                }
            }
        });
    });

    view! {
        <div class="app-layout">
            // Left: catalog
            <main class="main-content">
                <h1>"Fruit Jar"</h1>
                <ErrorBanner />
                <Toolbar />
                <FruitCatalog />
            </main>

            // Right: jar with totals and chart
            <aside class="jar-column">
                <JarPanel />
                <JarChart />
            </aside>
        </div>
    }
}
