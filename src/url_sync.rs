//! URL Synchronizer
//!
//! Keeps the filter criteria mirrored in the address bar query string so a
//! filtered view can be bookmarked, shared, and restored on reload.

use std::collections::HashSet;

use chrono::NaiveDate;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::filters::{CategoryFilter, FilterCriteria};
use crate::page;

pub const MONTH_KEY: &str = "month";
pub const YEAR_KEY: &str = "year";
pub const EXPENSE_CATEGORY_KEY: &str = "expense_category";
pub const INCOME_CATEGORY_KEY: &str = "income_category";
pub const START_DATE_KEY: &str = "start_date";
pub const END_DATE_KEY: &str = "end_date";
pub const MIN_AMOUNT_KEY: &str = "min_amount";
pub const MAX_AMOUNT_KEY: &str = "max_amount";

pub const KEYS: [&str; 8] = [
    MONTH_KEY,
    YEAR_KEY,
    EXPENSE_CATEGORY_KEY,
    INCOME_CATEGORY_KEY,
    START_DATE_KEY,
    END_DATE_KEY,
    MIN_AMOUNT_KEY,
    MAX_AMOUNT_KEY,
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Characters left unescaped in query values (same as URLSearchParams)
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'*');

/// Query string (without `?`) for the set fields, in a fixed key order.
/// Unset fields are left out entirely.
pub fn serialize(criteria: &FilterCriteria) -> String {
    let mut params: Vec<(&str, String)> = Vec::new();

    if let Some(month) = criteria.month {
        params.push((MONTH_KEY, month.to_string()));
    }
    if let Some(year) = criteria.year {
        params.push((YEAR_KEY, year.to_string()));
    }
    if criteria.expense_category.is_set() {
        params.push((EXPENSE_CATEGORY_KEY, criteria.expense_category.to_param()));
    }
    if criteria.income_category.is_set() {
        params.push((INCOME_CATEGORY_KEY, criteria.income_category.to_param()));
    }
    if let Some(start) = criteria.date_range.start {
        params.push((START_DATE_KEY, start.format(DATE_FORMAT).to_string()));
    }
    if let Some(end) = criteria.date_range.end {
        params.push((END_DATE_KEY, end.format(DATE_FORMAT).to_string()));
    }
    if let Some(min) = criteria.amount_range.min {
        params.push((MIN_AMOUNT_KEY, min.to_string()));
    }
    if let Some(max) = criteria.amount_range.max {
        params.push((MAX_AMOUNT_KEY, max.to_string()));
    }

    params
        .iter()
        .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(value, QUERY_VALUE)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Parse a query string (leading `?` optional). Unknown keys are ignored,
/// the first occurrence of a key wins, and values that do not parse leave
/// their field unset.
pub fn deserialize(query: &str) -> FilterCriteria {
    let mut criteria = FilterCriteria::default();
    let mut seen = HashSet::new();

    for (key, value) in pairs(query) {
        if !KEYS.contains(&key.as_str()) || !seen.insert(key.clone()) || value.is_empty() {
            continue;
        }

        match key.as_str() {
            MONTH_KEY => criteria.month = parse_logged(&key, &value, parse_month),
            YEAR_KEY => criteria.year = parse_logged(&key, &value, |v| v.parse().ok()),
            EXPENSE_CATEGORY_KEY => criteria.expense_category = CategoryFilter::from_param(&value),
            INCOME_CATEGORY_KEY => criteria.income_category = CategoryFilter::from_param(&value),
            START_DATE_KEY => criteria.date_range.start = parse_logged(&key, &value, parse_date),
            END_DATE_KEY => criteria.date_range.end = parse_logged(&key, &value, parse_date),
            MIN_AMOUNT_KEY => criteria.amount_range.min = parse_logged(&key, &value, parse_amount),
            MAX_AMOUNT_KEY => criteria.amount_range.max = parse_logged(&key, &value, parse_amount),
            _ => {}
        }
    }

    criteria
}

/// `serialize(criteria)` appended to the pairs of `existing` that are not
/// filter keys, so unrelated parameters survive a rewrite
pub fn merge_query(existing: &str, criteria: &FilterCriteria) -> String {
    let kept = existing
        .strip_prefix('?')
        .unwrap_or(existing)
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| {
            let key = pair.split_once('=').map_or(*pair, |(k, _)| k);
            !KEYS.contains(&decode(key).as_str())
        });

    let serialized = serialize(criteria);
    kept.chain(Some(serialized.as_str()).filter(|s| !s.is_empty()))
        .collect::<Vec<_>>()
        .join("&")
}

/// True when the query carries at least one filter key
pub fn has_recognized_params(query: &str) -> bool {
    pairs(query).any(|(key, _)| KEYS.contains(&key.as_str()))
}

fn pairs(query: &str) -> impl Iterator<Item = (String, String)> + '_ {
    query
        .strip_prefix('?')
        .unwrap_or(query)
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(key), decode(value))
        })
}

fn decode(component: &str) -> String {
    let spaced = component.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

fn parse_logged<T>(key: &str, value: &str, parse: impl FnOnce(&str) -> Option<T>) -> Option<T> {
    let parsed = parse(value);
    if parsed.is_none() {
        log::warn!("ignoring {}={:?} from URL", key, value);
    }
    parsed
}

fn parse_month(value: &str) -> Option<u32> {
    value.parse().ok().filter(|m| (1..=12).contains(m))
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

fn parse_amount(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

// ========================
// Browser side
// ========================

/// Criteria from the current address bar, if it carries any filter keys
pub fn criteria_from_location() -> Option<FilterCriteria> {
    let query = page::current_query();
    if has_recognized_params(&query) {
        let criteria = deserialize(&query);
        log::info!("hydrated filters from URL: {:?}", criteria);
        Some(criteria)
    } else {
        None
    }
}

/// Mirror `criteria` into the address bar without adding a history entry
pub fn replace_url(criteria: &FilterCriteria) {
    let current = page::current_query();
    let query = merge_query(&current, criteria);
    if query == current.strip_prefix('?').unwrap_or(&current) {
        return;
    }
    if let Err(e) = page::replace_query(&query) {
        log::warn!("could not update URL: {}", e);
    }
}
