//! Frontend Models
//!
//! Catalog types come from the core crate (shared with the backend);
//! display-only state lives here.

pub use fruit_jar_core::Fruit;

/// How the catalog is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    Table,
}

impl ViewMode {
    pub const ALL: [ViewMode; 2] = [ViewMode::List, ViewMode::Table];

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::List => "List",
            ViewMode::Table => "Table",
        }
    }
}
