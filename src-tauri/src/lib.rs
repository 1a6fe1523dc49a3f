//! Fruit Jar Backend
//!
//! Thin shell around the webview:
//! - config: environment-driven settings
//! - source: catalog providers (HTTP)
//! - commands: Tauri command handlers

use std::sync::Arc;

use tauri::Manager;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod source;

use config::AppConfig;
use source::{FruitSource, FruityviceSource};

/// Application state shared across commands
pub struct AppState {
    pub source: Arc<dyn FruitSource>,
}

/// Install the global subscriber; `RUST_LOG` overrides the default level
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("Logging already initialized: {}", e);
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    init_logging();

    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let config = AppConfig::from_env();
            tracing::info!("catalog source: {} (timeout {:?})", config.api_url, config.timeout);

            let source = FruityviceSource::new(&config)?;
            app.manage(AppState {
                source: Arc::new(source),
            });
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![commands::fetch_fruits])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
