//! WASM bindings for browser-based HTML to Markdown conversion.
//!
//! This module exposes the converter to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::{Config, HtmlConverter};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Convert an HTML string to Markdown.
///
/// `options` is an optional JSON object of conversion options, e.g.
/// `{"header_style": "atx", "strip_tags": true}`.
#[wasm_bindgen]
pub fn html_to_markdown(html: &str, options: Option<String>) -> Result<String, JsValue> {
    let config = match options {
        Some(json) => Config::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?,
        None => Config::default(),
    };
    let converter =
        HtmlConverter::with_config(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
    converter
        .convert(html)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert raw HTML bytes, detecting their encoding.
#[wasm_bindgen]
pub fn html_bytes_to_markdown(data: &[u8]) -> Result<String, JsValue> {
    HtmlConverter::new()
        .convert_bytes(data)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
