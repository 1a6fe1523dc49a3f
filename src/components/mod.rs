//! UI Components
//!
//! Reusable Leptos components.

mod confirm_button;
mod error_banner;
mod fruit_catalog;
mod jar_chart;
mod jar_panel;
mod toolbar;

pub use confirm_button::ConfirmButton;
pub use error_banner::ErrorBanner;
pub use fruit_catalog::FruitCatalog;
pub use jar_chart::JarChart;
pub use jar_panel::JarPanel;
pub use toolbar::Toolbar;
