//! Fruit Catalog Component
//!
//! Filtered, grouped catalog rendered as a list or a table.

use fruit_jar_core::{CatalogGroup, CatalogView};
use leptos::prelude::*;

use crate::format::{format_calories, format_number};
use crate::models::{Fruit, ViewMode};
use crate::store::{store_add_many, store_add_one, use_app_store, AppStateStoreFields};

#[component]
pub fn FruitCatalog() -> impl IntoView {
    let store = use_app_store();

    let catalog = Memo::new(move |_| {
        let group_by = store.group_by().get();
        let query = store.search_query().get();
        CatalogView::build(&store.fruits().read(), &query, group_by)
    });

    let empty_message = move || {
        if store.fruits().read().is_empty() {
            "No fruits loaded.".to_string()
        } else {
            format!("No fruits match \"{}\".", store.search_query().get())
        }
    };

    view! {
        <section class="catalog">
            <Show
                when=move || !catalog.read().is_empty()
                fallback=move || view! { <p class="empty">{empty_message}</p> }
            >
                {move || {
                    let mode = store.view_mode().get();
                    catalog.get().groups.into_iter().map(|group| view! {
                        <CatalogSection group=group mode=mode />
                    }).collect_view()
                }}
            </Show>
            <p class="item-count">{move || {
                let vm = catalog.read();
                format!("{} of {} fruits", vm.visible_count, vm.total_count)
            }}</p>
        </section>
    }
}

/// One group: header with summary and "add all", then its fruits
#[component]
fn CatalogSection(group: CatalogGroup, mode: ViewMode) -> impl IntoView {
    let store = use_app_store();
    let summary = group.summary;
    let fruits = group.fruits;
    let batch = fruits.clone();
    let batch_empty = batch.is_empty();

    let body = match mode {
        ViewMode::List => view! {
            <ul class="fruit-list">
                {fruits.into_iter().map(|fruit| view! { <FruitListRow fruit=fruit /> }).collect_view()}
            </ul>
        }.into_any(),
        ViewMode::Table => view! {
            <table class="fruit-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Family"</th>
                        <th>"Order"</th>
                        <th>"Genus"</th>
                        <th>"Energy"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {fruits.into_iter().map(|fruit| view! { <FruitTableRow fruit=fruit /> }).collect_view()}
                </tbody>
            </table>
        }.into_any(),
    };

    view! {
        <div class="catalog-group">
            <header class="group-header">
                <h2>{summary.label.clone()}</h2>
                <span class="group-meta">
                    {format!("{} fruits · {} kcal", summary.count, format_number(summary.calories))}
                </span>
                <button
                    class="add-all-btn"
                    disabled=batch_empty
                    on:click=move |_| store_add_many(&store, &batch)
                >
                    "Add all"
                </button>
            </header>
            {body}
        </div>
    }
}

/// "×N" badge for fruits already in the jar
#[component]
fn InJarBadge(fruit_id: u32) -> impl IntoView {
    let store = use_app_store();
    let quantity = move || store.jar().read().quantity_of(fruit_id);

    view! {
        <Show when=move || { quantity() > 0 }>
            <span class="in-jar-badge">{move || format!("×{}", quantity())}</span>
        </Show>
    }
}

#[component]
fn FruitListRow(fruit: Fruit) -> impl IntoView {
    let store = use_app_store();
    let id = fruit.id;
    let name = fruit.name.clone();
    let meta = format!("{} · {} · {}", fruit.family, fruit.order, fruit.genus);
    let energy = format_calories(fruit.calories);

    view! {
        <li class="fruit-row">
            <span class="fruit-name">{name}</span>
            <span class="fruit-meta">{meta}</span>
            <span class="fruit-kcal">{energy}</span>
            <InJarBadge fruit_id=id />
            <button class="add-btn" on:click=move |_| store_add_one(&store, &fruit)>"+"</button>
        </li>
    }
}

#[component]
fn FruitTableRow(fruit: Fruit) -> impl IntoView {
    let store = use_app_store();
    let id = fruit.id;
    let cells = [
        fruit.name.clone(),
        fruit.family.clone(),
        fruit.order.clone(),
        fruit.genus.clone(),
        format_calories(fruit.calories),
    ];

    view! {
        <tr class="fruit-table-row">
            {cells.into_iter().map(|text| view! { <td>{text}</td> }).collect_view()}
            <td class="fruit-actions">
                <InJarBadge fruit_id=id />
                <button class="add-btn" on:click=move |_| store_add_one(&store, &fruit)>"+"</button>
            </td>
        </tr>
    }
}
