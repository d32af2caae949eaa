//! Filter Criteria
//!
//! The active filter constraints and the helpers that turn raw control
//! values into them. Setters are independent of each other: no cross-field
//! check is made, so `min > max` is a valid (empty) filter.

use chrono::{Datelike, NaiveDate};

use crate::models::TransactionKind;

/// Select/URL value meaning "explicitly uncategorized"
pub const NO_CATEGORY_PARAM: &str = "no-category";

/// Prefix written in front of category ids that would otherwise be read back
/// as something else (the sentinel, an empty value, or an already-prefixed id)
const ESCAPED_ID_PREFIX: &str = "id:";

/// Filter on one category axis
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    Unset,
    /// Only transactions without a category
    NoCategory,
    /// Only transactions with exactly this category id
    Specific(String),
}

impl CategoryFilter {
    /// Parse a select/URL value (`""`, `"no-category"` or an id)
    pub fn from_param(value: &str) -> Self {
        if value.is_empty() {
            CategoryFilter::Unset
        } else if value == NO_CATEGORY_PARAM {
            CategoryFilter::NoCategory
        } else if let Some(id) = value.strip_prefix(ESCAPED_ID_PREFIX) {
            CategoryFilter::Specific(id.to_string())
        } else {
            CategoryFilter::Specific(value.to_string())
        }
    }

    /// Inverse of [`CategoryFilter::from_param`]; `Unset` maps to `""`
    pub fn to_param(&self) -> String {
        match self {
            CategoryFilter::Unset => String::new(),
            CategoryFilter::NoCategory => NO_CATEGORY_PARAM.to_string(),
            CategoryFilter::Specific(id) => {
                if id.is_empty() || id == NO_CATEGORY_PARAM || id.starts_with(ESCAPED_ID_PREFIX) {
                    format!("{ESCAPED_ID_PREFIX}{id}")
                } else {
                    id.clone()
                }
            }
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, CategoryFilter::Unset)
    }
}

/// Inclusive date bounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Inclusive amount bounds
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AmountRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl AmountRange {
    pub fn bound(&self, bound: AmountBound) -> Option<f64> {
        match bound {
            AmountBound::Min => self.min,
            AmountBound::Max => self.max,
        }
    }
}

/// Which end of the amount range an input edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountBound {
    Min,
    Max,
}

/// Currently active filter constraints. Every field unset matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// 1-12
    pub month: Option<u32>,
    pub year: Option<i32>,
    pub expense_category: CategoryFilter,
    pub income_category: CategoryFilter,
    pub date_range: DateRange,
    pub amount_range: AmountRange,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Months outside 1-12 leave the month unset
    pub fn set_month(&mut self, month: Option<u32>) {
        self.month = month.filter(|m| (1..=12).contains(m));
    }

    pub fn set_year(&mut self, year: Option<i32>) {
        self.year = year;
    }

    pub fn set_expense_category(&mut self, filter: CategoryFilter) {
        self.expense_category = filter;
    }

    pub fn set_income_category(&mut self, filter: CategoryFilter) {
        self.income_category = filter;
    }

    pub fn set_date_start(&mut self, start: Option<NaiveDate>) {
        self.date_range.start = start;
    }

    pub fn set_date_end(&mut self, end: Option<NaiveDate>) {
        self.date_range.end = end;
    }

    /// Non-finite bounds leave the bound unset
    pub fn set_min_amount(&mut self, min: Option<f64>) {
        self.amount_range.min = min.filter(|v| v.is_finite());
    }

    /// Non-finite bounds leave the bound unset
    pub fn set_max_amount(&mut self, max: Option<f64>) {
        self.amount_range.max = max.filter(|v| v.is_finite());
    }

    pub fn set_amount(&mut self, bound: AmountBound, value: Option<f64>) {
        match bound {
            AmountBound::Min => self.set_min_amount(value),
            AmountBound::Max => self.set_max_amount(value),
        }
    }

    /// Category axis that applies to records of `kind`
    pub fn category_filter_for(&self, kind: TransactionKind) -> &CategoryFilter {
        match kind {
            TransactionKind::Expense => &self.expense_category,
            TransactionKind::Income => &self.income_category,
        }
    }

    /// Reset every field in one step
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// ========================
// Control value parsing
// ========================

pub fn month_from_input(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|m| (1..=12).contains(m))
}

pub fn year_from_input(value: &str) -> Option<i32> {
    value.trim().parse::<i32>().ok()
}

/// ISO `YYYY-MM-DD`, as produced by date inputs
pub fn date_from_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn date_to_input(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

/// Empty, unparsable and non-finite values are unset
pub fn amount_from_input(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn amount_to_input(amount: Option<f64>) -> String {
    amount.map(|v| v.to_string()).unwrap_or_default()
}

// ========================
// Quick filters
// ========================

/// Preset month/year shortcuts. Only month and year are touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickFilter {
    ThisMonth,
    LastMonth,
    ThisYear,
}

impl QuickFilter {
    pub const ALL: [QuickFilter; 3] = [QuickFilter::ThisMonth, QuickFilter::LastMonth, QuickFilter::ThisYear];

    pub fn label(self) -> &'static str {
        match self {
            QuickFilter::ThisMonth => "Este mês",
            QuickFilter::LastMonth => "Mês passado",
            QuickFilter::ThisYear => "Este ano",
        }
    }

    pub fn apply(self, criteria: &mut FilterCriteria, today: NaiveDate) {
        match self {
            QuickFilter::ThisMonth => {
                criteria.set_month(Some(today.month()));
                criteria.set_year(Some(today.year()));
            }
            QuickFilter::LastMonth => {
                let (year, month) = if today.month() == 1 {
                    (today.year() - 1, 12)
                } else {
                    (today.year(), today.month() - 1)
                };
                criteria.set_month(Some(month));
                criteria.set_year(Some(year));
            }
            QuickFilter::ThisYear => {
                criteria.set_month(None);
                criteria.set_year(Some(today.year()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_category_param_round_trip() {
        for filter in [
            CategoryFilter::Unset,
            CategoryFilter::NoCategory,
            CategoryFilter::Specific("7".to_string()),
            CategoryFilter::Specific("no-category".to_string()),
            CategoryFilter::Specific("id:3".to_string()),
            CategoryFilter::Specific(String::new()),
        ] {
            assert_eq!(CategoryFilter::from_param(&filter.to_param()), filter);
        }
    }

    #[test]
    fn test_category_sentinel_is_distinct_from_id() {
        assert_eq!(CategoryFilter::from_param("no-category"), CategoryFilter::NoCategory);
        assert_eq!(
            CategoryFilter::Specific("no-category".to_string()).to_param(),
            "id:no-category"
        );
        assert_eq!(CategoryFilter::from_param("7"), CategoryFilter::Specific("7".to_string()));
    }

    #[test]
    fn test_setters_are_independent() {
        let mut criteria = FilterCriteria::new();
        criteria.set_min_amount(Some(100.0));
        criteria.set_max_amount(Some(20.0));
        assert_eq!(criteria.amount_range.min, Some(100.0));
        assert_eq!(criteria.amount_range.max, Some(20.0));

        criteria.set_date_start(Some(date(2024, 5, 1)));
        criteria.set_date_end(Some(date(2024, 1, 1)));
        assert_eq!(criteria.date_range.start, Some(date(2024, 5, 1)));

        criteria.set_amount(AmountBound::Max, Some(f64::NAN));
        assert_eq!(criteria.amount_range.bound(AmountBound::Max), None);
        assert_eq!(criteria.amount_range.bound(AmountBound::Min), Some(100.0));
    }

    #[test]
    fn test_set_month_rejects_out_of_range() {
        let mut criteria = FilterCriteria::new();
        criteria.set_month(Some(13));
        assert_eq!(criteria.month, None);
        criteria.set_month(Some(12));
        assert_eq!(criteria.month, Some(12));
        criteria.set_month(Some(0));
        assert_eq!(criteria.month, None);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut criteria = FilterCriteria::new();
        criteria.set_month(Some(3));
        criteria.set_year(Some(2024));
        criteria.set_expense_category(CategoryFilter::NoCategory);
        criteria.set_income_category(CategoryFilter::Specific("2".to_string()));
        criteria.set_date_start(Some(date(2024, 1, 1)));
        criteria.set_min_amount(Some(20.0));
        assert!(!criteria.is_empty());

        criteria.clear();
        assert!(criteria.is_empty());
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn test_input_parsing() {
        assert_eq!(month_from_input(""), None);
        assert_eq!(month_from_input("3"), Some(3));
        assert_eq!(month_from_input("13"), None);
        assert_eq!(year_from_input("2024"), Some(2024));
        assert_eq!(year_from_input(""), None);
        assert_eq!(date_from_input("2024-03-15"), Some(date(2024, 3, 15)));
        assert_eq!(date_from_input("15/03/2024"), None);
        assert_eq!(amount_from_input("20.5"), Some(20.5));
        assert_eq!(amount_from_input("0"), Some(0.0));
        assert_eq!(amount_from_input(""), None);
        assert_eq!(amount_from_input("inf"), None);
        assert_eq!(amount_to_input(Some(20.0)), "20");
        assert_eq!(date_to_input(Some(date(2024, 3, 5))), "2024-03-05");
    }

    #[test]
    fn test_quick_filters() {
        let today = date(2024, 3, 15);
        let mut criteria = FilterCriteria::new();
        criteria.set_min_amount(Some(10.0));

        QuickFilter::ThisMonth.apply(&mut criteria, today);
        assert_eq!((criteria.month, criteria.year), (Some(3), Some(2024)));

        QuickFilter::LastMonth.apply(&mut criteria, today);
        assert_eq!((criteria.month, criteria.year), (Some(2), Some(2024)));

        QuickFilter::ThisYear.apply(&mut criteria, today);
        assert_eq!((criteria.month, criteria.year), (None, Some(2024)));

        // Other fields survive presets
        assert_eq!(criteria.amount_range.min, Some(10.0));
    }

    #[test]
    fn test_last_month_wraps_year() {
        let mut criteria = FilterCriteria::new();
        QuickFilter::LastMonth.apply(&mut criteria, date(2024, 1, 10));
        assert_eq!((criteria.month, criteria.year), (Some(12), Some(2023)));
    }
}
