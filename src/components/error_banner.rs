//! Error Banner Component
//!
//! Loading indicator and fetch error with a retry button.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    view! {
        <Show when=move || store.loading().get()>
            <div class="loading">"Loading fruits…"</div>
        </Show>
        {move || store.fetch_error().get().map(|error| view! {
            <div class="error-banner" role="alert">
                <span class="error-text">{format!("Could not load fruits: {}", error)}</span>
                <button class="retry-btn" on:click=move |_| ctx.reload()>"Retry"</button>
            </div>
        })}
    }
}
