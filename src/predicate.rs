//! Filter Predicate Engine
//!
//! Decides whether a record passes the active criteria. Pure: records and
//! criteria are only read.

use chrono::Datelike;

use crate::filters::{CategoryFilter, FilterCriteria};
use crate::models::{TransactionRecord, TransactionSet};

/// True when `record` passes every set criterion. Unset criteria never
/// exclude. Checks run cheapest first and stop at the first failure.
pub fn matches(record: &TransactionRecord, criteria: &FilterCriteria) -> bool {
    if let Some(month) = criteria.month {
        if record.occurred_on.month() != month {
            return false;
        }
    }

    if let Some(year) = criteria.year {
        if record.occurred_on.year() != year {
            return false;
        }
    }

    if !category_matches(record, criteria.category_filter_for(record.kind)) {
        return false;
    }

    let dates = &criteria.date_range;
    if dates.start.is_some_and(|start| record.occurred_on < start) {
        return false;
    }
    if dates.end.is_some_and(|end| record.occurred_on > end) {
        return false;
    }

    let amounts = &criteria.amount_range;
    if amounts.min.is_some_and(|min| record.amount < min) {
        return false;
    }
    if amounts.max.is_some_and(|max| record.amount > max) {
        return false;
    }

    true
}

fn category_matches(record: &TransactionRecord, filter: &CategoryFilter) -> bool {
    match filter {
        CategoryFilter::Unset => true,
        CategoryFilter::NoCategory => record.is_uncategorized(),
        CategoryFilter::Specific(id) => record.category_id.as_deref() == Some(id.as_str()),
    }
}

/// Filter all three views, keeping their original order
pub fn apply(set: &TransactionSet, criteria: &FilterCriteria) -> TransactionSet {
    let keep = |records: &[TransactionRecord]| {
        records
            .iter()
            .filter(|r| matches(r, criteria))
            .cloned()
            .collect::<Vec<_>>()
    };

    let filtered = TransactionSet {
        all: keep(&set.all),
        expenses: keep(&set.expenses),
        incomes: keep(&set.incomes),
    };

    log::debug!(
        "filter pass: {}/{} feed, {}/{} expenses, {}/{} incomes",
        filtered.all.len(),
        set.all.len(),
        filtered.expenses.len(),
        set.expenses.len(),
        filtered.incomes.len(),
        set.incomes.len()
    );

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use crate::test_utils::{baseline, record};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn count(set: &TransactionSet) -> (usize, usize, usize) {
        (set.all.len(), set.expenses.len(), set.incomes.len())
    }

    #[test]
    fn test_empty_criteria_match_everything() {
        let set = baseline();
        let filtered = apply(&set, &FilterCriteria::default());
        assert_eq!(filtered, set);
        assert_eq!(count(&filtered), (5, 3, 2));
    }

    #[test]
    fn test_month_and_year() {
        let march = record(TransactionKind::Expense, "A", None, (2024, 3, 15), 1.0);
        let april = record(TransactionKind::Expense, "B", None, (2024, 4, 15), 1.0);

        let mut criteria = FilterCriteria::new();
        criteria.set_month(Some(3));
        criteria.set_year(Some(2024));

        assert!(matches(&march, &criteria));
        assert!(!matches(&april, &criteria));

        criteria.set_year(Some(2023));
        assert!(!matches(&march, &criteria));
    }

    #[test]
    fn test_amount_range_scenario() {
        let mut criteria = FilterCriteria::new();
        criteria.set_min_amount(Some(20.0));
        criteria.set_max_amount(Some(100.0));

        let filtered = apply(&baseline(), &criteria);
        let expenses: Vec<&str> = filtered.expenses.iter().map(|r| r.description.as_str()).collect();
        assert_eq!(expenses, vec!["Mercado"]);

        // Both incomes lie inside the range
        assert_eq!(filtered.incomes.len(), 2);
        assert_eq!(filtered.all.len(), 3);

        criteria.set_max_amount(Some(78.0));
        let filtered = apply(&baseline(), &criteria);
        let incomes: Vec<&str> = filtered.incomes.iter().map(|r| r.description.as_str()).collect();
        assert_eq!(incomes, vec!["Reembolso"]);
    }

    #[test]
    fn test_no_category_axis() {
        let mut criteria = FilterCriteria::new();
        criteria.set_expense_category(CategoryFilter::NoCategory);

        let filtered = apply(&baseline(), &criteria);
        let expenses: Vec<&str> = filtered.expenses.iter().map(|r| r.description.as_str()).collect();
        assert_eq!(expenses, vec!["Café"]);
        assert_eq!(filtered.incomes.len(), 2);
    }

    #[test]
    fn test_no_category_requires_sentinel_label() {
        let mut labelled = record(TransactionKind::Expense, "X", None, (2024, 1, 1), 1.0);
        labelled.category = "Mercado".to_string();

        let mut criteria = FilterCriteria::new();
        criteria.set_expense_category(CategoryFilter::NoCategory);
        assert!(!matches(&labelled, &criteria));
    }

    #[test]
    fn test_specific_category_is_exact() {
        let with_id = record(TransactionKind::Expense, "X", Some("7"), (2024, 1, 1), 1.0);
        let mut criteria = FilterCriteria::new();

        criteria.set_expense_category(CategoryFilter::Specific("7".to_string()));
        assert!(matches(&with_id, &criteria));

        criteria.set_expense_category(CategoryFilter::Specific("07".to_string()));
        assert!(!matches(&with_id, &criteria));

        criteria.set_expense_category(CategoryFilter::NoCategory);
        assert!(!matches(&with_id, &criteria));
    }

    #[test]
    fn test_category_axes_are_independent() {
        let set = baseline();

        let mut criteria = FilterCriteria::new();
        criteria.set_expense_category(CategoryFilter::Specific("8".to_string()));
        let filtered = apply(&set, &criteria);
        assert_eq!(filtered.expenses.len(), 1);
        assert_eq!(filtered.incomes.len(), set.incomes.len());

        let mut criteria = FilterCriteria::new();
        criteria.set_income_category(CategoryFilter::Specific("2".to_string()));
        let filtered = apply(&set, &criteria);
        assert_eq!(filtered.incomes.len(), 1);
        assert_eq!(filtered.expenses.len(), set.expenses.len());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let r = record(TransactionKind::Expense, "X", None, (2024, 3, 15), 50.0);

        let mut criteria = FilterCriteria::new();
        criteria.set_date_start(Some(date(2024, 3, 15)));
        criteria.set_date_end(Some(date(2024, 3, 15)));
        criteria.set_min_amount(Some(50.0));
        criteria.set_max_amount(Some(50.0));
        assert!(matches(&r, &criteria));

        criteria.set_date_start(Some(date(2024, 3, 16)));
        assert!(!matches(&r, &criteria));

        criteria.set_date_start(None);
        criteria.set_date_end(Some(date(2024, 3, 14)));
        assert!(!matches(&r, &criteria));

        criteria.set_date_end(None);
        criteria.set_min_amount(Some(50.01));
        assert!(!matches(&r, &criteria));
    }

    #[test]
    fn test_inverted_range_is_empty_not_error() {
        let mut criteria = FilterCriteria::new();
        criteria.set_min_amount(Some(100.0));
        criteria.set_max_amount(Some(20.0));
        assert_eq!(count(&apply(&baseline(), &criteria)), (0, 0, 0));
    }

    #[test]
    fn test_apply_is_idempotent_and_does_not_mutate() {
        let set = baseline();
        let before = set.clone();

        let mut criteria = FilterCriteria::new();
        criteria.set_month(Some(3));

        let first = apply(&set, &criteria);
        let second = apply(&set, &criteria);
        assert_eq!(first, second);
        assert_eq!(set, before);
        assert_eq!(count(&first), (3, 2, 1));
    }
}
