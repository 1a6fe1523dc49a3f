//! Toolbar Component
//!
//! Search box (debounced), group-by selector and list/table toggle.

use fruit_jar_core::GroupByField;
use leptos::prelude::*;

use crate::debounce::use_debounced_search;
use crate::models::ViewMode;
use crate::store::{store_set_group_by, store_set_view_mode, use_app_store, AppStateStoreFields};

#[component]
pub fn Toolbar() -> impl IntoView {
    let store = use_app_store();
    let on_search = use_debounced_search(store);
    // Raw text in the box; the store only sees the debounced value
    let (search_text, set_search_text) = signal(String::new());

    view! {
        <div class="toolbar">
            <input
                type="search"
                class="search-input"
                placeholder="Search name, family, genus or order…"
                autocomplete="off"
                prop:value=move || search_text.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_search_text.set(value.clone());
                    on_search(value);
                }
            />

            <label class="group-select">
                "Group by "
                <select on:change=move |ev| {
                    let field = event_target_value(&ev).parse::<GroupByField>().unwrap_or_default();
                    store_set_group_by(&store, field);
                }>
                    {GroupByField::ALL.into_iter().map(|field| view! {
                        <option
                            value=field.as_str()
                            prop:selected=move || store.group_by().get() == field
                        >
                            {field.label()}
                        </option>
                    }).collect_view()}
                </select>
            </label>

            <div class="view-toggle">
                {ViewMode::ALL.into_iter().map(|mode| {
                    let btn_class = move || {
                        if store.view_mode().get() == mode { "view-btn active" } else { "view-btn" }
                    };
                    view! {
                        <button class=btn_class on:click=move |_| store_set_view_mode(&store, mode)>
                            {mode.label()}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
