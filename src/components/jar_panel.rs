//! Jar Panel Component
//!
//! Jar entries with quantity controls, plus the aggregate totals.

use fruit_jar_core::{totals, JarEntry, JarTotals};
use leptos::prelude::*;

use crate::components::ConfirmButton;
use crate::format::{format_calories, format_grams, format_number};
use crate::store::{
    store_add_one, store_clear_jar, store_remove, store_remove_one, store_set_quantity,
    use_app_store, AppStateStoreFields,
};

#[component]
pub fn JarPanel() -> impl IntoView {
    let store = use_app_store();
    let entries = move || store.jar().read().entries().to_vec();
    let is_empty = move || store.jar().read().is_empty();
    let jar_totals = Memo::new(move |_| totals(&store.jar().read()));

    view! {
        <section class="jar-panel">
            <header class="jar-header">
                <h2>"Jar"</h2>
                <Show when=move || !is_empty()>
                    <ConfirmButton
                        button_class="clear-jar-btn"
                        label="Clear"
                        prompt="Empty the jar?"
                        on_confirm=move |_| store_clear_jar(&store)
                    />
                </Show>
            </header>

            <Show
                when=move || !is_empty()
                fallback=|| view! { <p class="empty">"Your jar is empty. Add fruits from the catalog."</p> }
            >
                <ul class="jar-entries">
                    <For
                        each=entries
                        // Quantity is part of the key so the row re-renders with the new count
                        key=|entry| (entry.fruit.id, entry.quantity)
                        children=move |entry| view! { <JarEntryRow entry=entry /> }
                    />
                </ul>
            </Show>

            <JarTotalsView summary=jar_totals />
        </section>
    }
}

#[component]
fn JarEntryRow(entry: JarEntry) -> impl IntoView {
    let store = use_app_store();
    let id = entry.fruit.id;
    let name = entry.fruit.name.clone();
    let quantity = entry.quantity;
    let subtotal = entry.fruit.calories.map(|c| c * f64::from(quantity));
    let fruit = entry.fruit;

    view! {
        <li class="jar-entry">
            <span class="jar-entry-name">{name}</span>
            <span class="jar-entry-qty">
                <button class="qty-btn" on:click=move |_| store_remove_one(&store, id)>"−"</button>
                <input
                    type="number"
                    class="qty-input"
                    min="0"
                    prop:value=quantity.to_string()
                    on:change=move |ev| {
                        let raw = event_target_value(&ev);
                        match raw.trim().parse::<i64>() {
                            Ok(value) => store_set_quantity(&store, id, value),
                            Err(_) => web_sys::console::warn_1(
                                &format!("[JAR] Ignoring quantity {:?} for fruit {}", raw, id).into(),
                            ),
                        }
                    }
                />
                <button class="qty-btn" on:click=move |_| store_add_one(&store, &fruit)>"+"</button>
            </span>
            <span class="jar-entry-kcal">{format_calories(subtotal)}</span>
            <button class="remove-btn" title="Remove" on:click=move |_| store_remove(&store, id)>"×"</button>
        </li>
    }
}

#[component]
fn JarTotalsView(summary: Memo<JarTotals>) -> impl IntoView {
    view! {
        <dl class="jar-totals">
            <dt>"Total energy"</dt>
            <dd>{move || format!("{} kcal", format_number(summary.get().calories))}</dd>
            <dt>"Fruits"</dt>
            <dd>{move || summary.get().entry_count.to_string()}</dd>
            <dt>"Fat"</dt>
            <dd>{move || format_grams(summary.get().nutrition.fat)}</dd>
            <dt>"Sugar"</dt>
            <dd>{move || format_grams(summary.get().nutrition.sugar)}</dd>
            <dt>"Carbohydrates"</dt>
            <dd>{move || format_grams(summary.get().nutrition.carbohydrates)}</dd>
            <dt>"Protein"</dt>
            <dd>{move || format_grams(summary.get().nutrition.protein)}</dd>
        </dl>
        <Show when=move || { summary.get().missing_energy > 0 }>
            <p class="totals-note">
                {move || format!(
                    "{} fruit(s) have no energy data and are left out of the total.",
                    summary.get().missing_energy,
                )}
            </p>
        </Show>
    }
}
