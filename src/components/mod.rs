//! UI Components
//!
//! Leptos components for the filter controls and the three transaction views.

mod filter_bar;
mod category_select;
mod amount_input;
mod quick_filters;
mod filter_summary;
mod totals_bar;
mod transaction_tabs;
mod transaction_feed;
mod transaction_table;
mod empty_state;

pub use filter_bar::FilterBar;
pub use category_select::CategorySelect;
pub use amount_input::AmountInput;
pub use quick_filters::QuickFilters;
pub use filter_summary::FilterSummary;
pub use totals_bar::TotalsBar;
pub use transaction_tabs::TransactionTabs;
pub use transaction_feed::TransactionFeed;
pub use transaction_table::TransactionTable;
pub use empty_state::EmptyStatePanel;
