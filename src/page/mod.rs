//! Host Page Bindings
//!
//! Thin wrappers over the browser globals the filter engine touches,
//! organized by concern.

mod island;
mod history;
mod clock;

// Re-export all public items
pub use island::*;
pub use history::*;
pub use clock::*;
