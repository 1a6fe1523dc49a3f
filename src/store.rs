//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The helpers
//! below are the only mutation surface the components use.

use fruit_jar_core::{GroupByField, Jar};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Fruit, ViewMode};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Full catalog from the last successful fetch
    pub fruits: Vec<Fruit>,
    /// Selected fruits with quantities
    pub jar: Jar,
    pub group_by: GroupByField,
    /// Query currently applied to the catalog (already debounced)
    pub search_query: String,
    pub view_mode: ViewMode,
    /// Error from the most recent fetch, cleared on success
    pub fetch_error: Option<String>,
    pub loading: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Catalog
// ========================

/// Replace the catalog after a successful fetch
pub fn store_set_catalog(store: &AppStore, fruits: Vec<Fruit>) {
    *store.fruits().write() = fruits;
    *store.fetch_error().write() = None;
    *store.loading().write() = false;
}

/// Record a failed fetch; the previous catalog stays in place
pub fn store_set_fetch_error(store: &AppStore, error: String) {
    *store.fetch_error().write() = Some(error);
    *store.loading().write() = false;
}

/// Enter the loading state for a new attempt, clearing the previous error
pub fn store_begin_loading(store: &AppStore) {
    *store.fetch_error().write() = None;
    *store.loading().write() = true;
}

pub fn store_set_group_by(store: &AppStore, field: GroupByField) {
    *store.group_by().write() = field;
}

pub fn store_set_search_query(store: &AppStore, query: String) {
    *store.search_query().write() = query;
}

pub fn store_set_view_mode(store: &AppStore, mode: ViewMode) {
    *store.view_mode().write() = mode;
}

// ========================
// Jar
// ========================

pub fn store_add_one(store: &AppStore, fruit: &Fruit) {
    store.jar().write().add_one(fruit);
}

pub fn store_add_many(store: &AppStore, fruits: &[Fruit]) {
    store.jar().write().add_many(fruits);
}

pub fn store_remove(store: &AppStore, fruit_id: u32) {
    store.jar().write().remove(fruit_id);
}

pub fn store_remove_one(store: &AppStore, fruit_id: u32) {
    store.jar().write().remove_one(fruit_id);
}

pub fn store_set_quantity(store: &AppStore, fruit_id: u32, quantity: i64) {
    store.jar().write().set_quantity(fruit_id, quantity);
}

pub fn store_clear_jar(store: &AppStore) {
    store.jar().write().clear();
}
