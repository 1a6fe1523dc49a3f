//! Fruit Jar Core
//!
//! Platform-free state and data-transformation engine shared by the
//! frontend and the Tauri shell:
//! - fruit: catalog entities and wire normalization
//! - grouping: partition the catalog by a classification field
//! - jar: multiset of selected fruits with quantities
//! - stats: totals and chart breakdown derived from the jar
//! - search: case-insensitive multi-field filter
//! - debounce / fetch: supersession bookkeeping for timers and requests

mod catalog;
mod debounce;
mod fetch;
mod fruit;
mod grouping;
mod jar;
mod search;
mod stats;

pub use catalog::{CatalogGroup, CatalogView};
pub use debounce::{DebounceToken, Debouncer, SEARCH_DEBOUNCE_MS};
pub use fetch::{FetchTicket, FetchTracker};
pub use fruit::{Fruit, Nutritions, RawFruit, RawNutritions};
pub use grouping::{group_fruits, GroupByField, GroupSummary, Groups, ALL_GROUP_LABEL};
pub use jar::{Jar, JarEntry};
pub use search::filter_fruits;
pub use stats::{chart_breakdown, totals, ChartSegment, JarTotals, NutritionTotals};
