//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod fruit_cmd;

pub use fruit_cmd::*;
