//! Address Bar
//!
//! Query string access through `window.location` and `window.history`.

use wasm_bindgen::prelude::*;

fn js_err(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// Current `location.search`, including the leading `?` when present
pub fn current_query() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Replace the query string in place. No history entry is pushed; an empty
/// query leaves only the path.
pub fn replace_query(query: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let location = window.location();
    let path = location.pathname().map_err(js_err)?;
    let hash = location.hash().map_err(js_err)?;

    let url = if query.is_empty() {
        format!("{}{}", path, hash)
    } else {
        format!("{}?{}{}", path, query, hash)
    };

    window
        .history()
        .map_err(js_err)?
        .replace_state_with_url(&JsValue::NULL, "", Some(&url))
        .map_err(js_err)
}
