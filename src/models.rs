//! Frontend Models
//!
//! Transaction records extracted from the page payload, and the category
//! options offered by the filter selects.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Label the server renders for transactions without a category.
pub const UNCATEGORIZED_LABEL: &str = "Sem categoria";

/// Expense or income
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Expense,
    Income,
}

/// One of the three transaction views on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// Combined card feed with both kinds
    All,
    /// Expense table
    Expenses,
    /// Income table
    Incomes,
}

impl ViewKind {
    pub const ALL: [ViewKind; 3] = [ViewKind::All, ViewKind::Expenses, ViewKind::Incomes];

    /// Kind every record of this view must have (None for the combined feed)
    pub fn fixed_kind(self) -> Option<TransactionKind> {
        match self {
            ViewKind::All => None,
            ViewKind::Expenses => Some(TransactionKind::Expense),
            ViewKind::Incomes => Some(TransactionKind::Income),
        }
    }

    /// Payload section name
    pub fn section(self) -> &'static str {
        match self {
            ViewKind::All => "all",
            ViewKind::Expenses => "expenses",
            ViewKind::Incomes => "incomes",
        }
    }
}

/// Snapshot of how a transaction was displayed by the server.
///
/// Views redraw from this instead of re-formatting the parsed values, so a
/// record looks the same before and after filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedForm {
    pub kind: TransactionKind,
    pub description: String,
    pub detailed_description: String,
    pub category_label: String,
    pub category_color: Option<String>,
    pub date_text: String,
    pub amount_text: String,
}

/// Transaction derived from the page payload. Never mutated after extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    /// Server id; links the same transaction across the three views
    pub id: Option<String>,
    pub kind: TransactionKind,
    pub description: String,
    pub detailed_description: String,
    /// Display label, or [`UNCATEGORIZED_LABEL`]
    pub category: String,
    /// Stable category id; None means uncategorized
    pub category_id: Option<String>,
    pub occurred_on: NaiveDate,
    /// Non-negative amount in major currency units
    pub amount: f64,
    pub rendered: RenderedForm,
}

impl TransactionRecord {
    pub fn is_uncategorized(&self) -> bool {
        self.category_id.is_none() && self.category == UNCATEGORIZED_LABEL
    }
}

/// Ordered transactions for the three views
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionSet {
    pub all: Vec<TransactionRecord>,
    pub expenses: Vec<TransactionRecord>,
    pub incomes: Vec<TransactionRecord>,
}

impl TransactionSet {
    pub fn view(&self, kind: ViewKind) -> &[TransactionRecord] {
        match kind {
            ViewKind::All => &self.all,
            ViewKind::Expenses => &self.expenses,
            ViewKind::Incomes => &self.incomes,
        }
    }

    pub fn iter_all_views(&self) -> impl Iterator<Item = &TransactionRecord> {
        self.all.iter().chain(self.expenses.iter()).chain(self.incomes.iter())
    }
}

/// Category offered by a category select
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryOption {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
}
