//! WASM bindings for snbt-core.
//!
//! Exposes formatting and JSON conversion as `#[wasm_bindgen]` functions that
//! can be called from JavaScript/TypeScript. Built with `wasm-bindgen-cli`.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p snbt-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/snbt_wasm.wasm
//! ```
//!
//! Every function throws a JS error carrying the [`snbt_core::SnbtError`]
//! message when the input is rejected.

use snbt_core::Tag;
use wasm_bindgen::prelude::*;

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Rewrite SNBT text in canonical form.
#[wasm_bindgen(js_name = formatSnbt)]
pub fn format_snbt(snbt: &str) -> Result<String, JsValue> {
    snbt_core::parse(snbt).map(|tag| tag.to_string()).map_err(js_error)
}

/// Rewrite data component text (`[key=value,...]`) in canonical form.
#[wasm_bindgen(js_name = formatComponent)]
pub fn format_component(text: &str) -> Result<String, JsValue> {
    snbt_core::parse_component(text)
        .map(|data| data.to_string())
        .map_err(js_error)
}

/// Convert SNBT text to compact JSON. Numeric kinds are not preserved.
#[wasm_bindgen(js_name = snbtToJson)]
pub fn snbt_to_json(snbt: &str) -> Result<String, JsValue> {
    let tag = snbt_core::parse(snbt).map_err(js_error)?;
    serde_json::to_string(&tag).map_err(js_error)
}

/// Convert JSON text to SNBT with the default conversion rules.
#[wasm_bindgen(js_name = jsonToSnbt)]
pub fn json_to_snbt(json: &str) -> Result<String, JsValue> {
    let value: serde_json::Value = serde_json::from_str(json).map_err(js_error)?;
    Tag::from_json(value).map(|tag| tag.to_string()).map_err(js_error)
}
