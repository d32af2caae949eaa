//! Data Islands
//!
//! Reads the `<script type="application/json">` blocks the server embeds.

/// Text content of the element with `id`, or None if it is absent or empty
pub fn read_island(id: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let text = document.get_element_by_id(id)?.text_content()?;
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}
