//! Fruit Commands
//!
//! Frontend bindings for the catalog fetch.

use wasm_bindgen::prelude::*;
use crate::models::Fruit;
use super::{invoke, js_error};

pub async fn fetch_fruits() -> Result<Vec<Fruit>, String> {
    let result = invoke("fetch_fruits", JsValue::NULL).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
