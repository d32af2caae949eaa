//! Transaction Extractor
//!
//! Builds the in-memory transaction model from the JSON payload the server
//! embeds in the page. Runs once per page load; filtering never comes back
//! here.

use std::collections::{BTreeSet, HashSet};

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ExtractError, ExtractResult};
use crate::models::{
    CategoryOption, RenderedForm, TransactionKind, TransactionRecord, TransactionSet, ViewKind,
    UNCATEGORIZED_LABEL,
};
use crate::money::{format_money, parse_amount, DEFAULT_CURRENCY_SYMBOL};
use crate::page;

// ========================
// Payload
// ========================

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawPayload {
    all: Vec<Value>,
    expenses: Vec<Value>,
    incomes: Vec<Value>,
    categories: RawCategories,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawCategories {
    expense: Vec<RawCategory>,
    income: Vec<RawCategory>,
}

#[derive(Debug, Deserialize)]
struct RawCategory {
    id: Option<RawId>,
    #[serde(default)]
    name: String,
    color: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawTransaction {
    id: Option<RawId>,
    kind: Option<TransactionKind>,
    description: Option<String>,
    detailed_description: Option<String>,
    category: Option<String>,
    category_id: Option<RawId>,
    category_color: Option<String>,
    date: Option<String>,
    amount: Option<RawAmount>,
}

/// Ids arrive as JSON numbers or strings depending on the template
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

impl RawId {
    fn into_id(self) -> Option<String> {
        match self {
            RawId::Number(n) => Some(n.to_string()),
            RawId::Text(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

/// Identity of a skipped record. A feed item whose kind is unknown matches
/// either kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SkippedKey {
    kind: Option<TransactionKind>,
    id: String,
}

impl SkippedKey {
    fn from_value(section: ViewKind, value: &Value) -> Option<Self> {
        let id = value
            .get("id")
            .and_then(|v| RawId::deserialize(v).ok())
            .and_then(RawId::into_id)?;
        let kind = section
            .fixed_kind()
            .or_else(|| value.get("kind").and_then(|k| TransactionKind::deserialize(k).ok()));
        Some(Self { kind, id })
    }

    fn covers(skipped: &HashSet<SkippedKey>, record: &TransactionRecord) -> bool {
        let Some(id) = &record.id else { return false };
        [Some(record.kind), None].into_iter().any(|kind| {
            skipped.contains(&SkippedKey {
                kind,
                id: id.clone(),
            })
        })
    }
}

/// Everything the page payload provides
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageModel {
    pub transactions: TransactionSet,
    /// Expense categories listed by the server, in template order
    pub expense_categories: Vec<CategoryOption>,
    /// Income categories listed by the server, in template order
    pub income_categories: Vec<CategoryOption>,
}

impl PageModel {
    /// Options for the `kind` select, built from that kind's table
    pub fn category_options(&self, kind: TransactionKind) -> Vec<CategoryOption> {
        match kind {
            TransactionKind::Expense => {
                category_options(kind, &self.expense_categories, &self.transactions.expenses)
            }
            TransactionKind::Income => {
                category_options(kind, &self.income_categories, &self.transactions.incomes)
            }
        }
    }
}

// ========================
// Entry points
// ========================

/// Read and extract the payload island. A missing or broken payload yields
/// an empty model; the page keeps working with nothing to filter.
pub fn extract_from_page(element_id: &str, today: NaiveDate) -> PageModel {
    let result = page::read_island(element_id)
        .ok_or_else(|| ExtractError::MissingPayload {
            element_id: element_id.to_string(),
        })
        .and_then(|json| extract_from_json(&json, today));

    match result {
        Ok(model) => {
            log::info!(
                "extracted {} feed items, {} expenses, {} incomes",
                model.transactions.all.len(),
                model.transactions.expenses.len(),
                model.transactions.incomes.len()
            );
            model
        }
        Err(e) => {
            log::error!("{}", e);
            PageModel::default()
        }
    }
}

/// Extract from payload text. Only a top-level JSON error fails; broken
/// records are skipped, and so are their copies in the other views.
pub fn extract_from_json(json: &str, today: NaiveDate) -> ExtractResult<PageModel> {
    let payload: RawPayload = serde_json::from_str(json)?;
    let mut skipped = HashSet::new();

    let mut transactions = TransactionSet {
        all: extract_section(ViewKind::All, payload.all, today, &mut skipped),
        expenses: extract_section(ViewKind::Expenses, payload.expenses, today, &mut skipped),
        incomes: extract_section(ViewKind::Incomes, payload.incomes, today, &mut skipped),
    };

    if !skipped.is_empty() {
        for records in [&mut transactions.all, &mut transactions.expenses, &mut transactions.incomes] {
            let before = records.len();
            records.retain(|r| !SkippedKey::covers(&skipped, r));
            if records.len() != before {
                log::warn!("dropped {} copies of skipped records", before - records.len());
            }
        }
    }

    Ok(PageModel {
        transactions,
        expense_categories: payload.categories.expense.into_iter().filter_map(into_option).collect(),
        income_categories: payload.categories.income.into_iter().filter_map(into_option).collect(),
    })
}

fn into_option(raw: RawCategory) -> Option<CategoryOption> {
    let id = raw.id.and_then(RawId::into_id)?;
    Some(CategoryOption {
        id,
        name: raw.name,
        color: raw.color,
    })
}

fn extract_section(
    section: ViewKind,
    values: Vec<Value>,
    today: NaiveDate,
    skipped: &mut HashSet<SkippedKey>,
) -> Vec<TransactionRecord> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let key = SkippedKey::from_value(section, &value);
            match extract_record(section, index, value, today) {
                Ok(record) => Some(record),
                Err(e) => {
                    log::warn!("skipping record: {}", e);
                    skipped.extend(key);
                    None
                }
            }
        })
        .collect()
}

fn extract_record(
    section: ViewKind,
    index: usize,
    value: Value,
    today: NaiveDate,
) -> ExtractResult<TransactionRecord> {
    let name = section.section();
    let raw: RawTransaction = serde_json::from_value(value).map_err(|source| ExtractError::MalformedRecord {
        section: name,
        index,
        source,
    })?;
    let missing = |field: &'static str| ExtractError::IncompleteRecord {
        section: name,
        index,
        field,
    };

    let kind = section.fixed_kind().or(raw.kind).ok_or_else(|| missing("kind"))?;
    let description = raw
        .description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
        .ok_or_else(|| missing("description"))?;
    let date_text = raw.date.map(|d| d.trim().to_string()).ok_or_else(|| missing("date"))?;
    let amount_raw = raw.amount.ok_or_else(|| missing("amount"))?;

    let detailed_description = raw.detailed_description.unwrap_or_default().trim().to_string();
    let category_id = raw.category_id.and_then(RawId::into_id);
    let label = raw
        .category
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty() && c != UNCATEGORIZED_LABEL);

    // The id is ground truth; a label without an id still reads as a category
    let category = match (label, &category_id) {
        (Some(label), _) => label,
        (None, Some(id)) => {
            log::warn!("{}[{}]: category {} has no label", name, index, id);
            id.clone()
        }
        (None, None) => UNCATEGORIZED_LABEL.to_string(),
    };

    let (amount, amount_text) = match amount_raw {
        RawAmount::Number(n) => {
            let amount = if n.is_finite() { n.abs() } else { 0.0 };
            (amount, format_money(amount, DEFAULT_CURRENCY_SYMBOL))
        }
        RawAmount::Text(text) => (parse_amount(&text), text.trim().to_string()),
    };

    let occurred_on = parse_date(&date_text).unwrap_or_else(|| {
        log::warn!("{}[{}]: unparsable date {:?}, using today", name, index, date_text);
        today
    });

    Ok(TransactionRecord {
        id: raw.id.and_then(RawId::into_id),
        kind,
        rendered: RenderedForm {
            kind,
            description: description.clone(),
            detailed_description: detailed_description.clone(),
            category_label: category.clone(),
            category_color: raw.category_color,
            date_text,
            amount_text,
        },
        description,
        detailed_description,
        category,
        category_id,
        occurred_on,
        amount,
    })
}

// ========================
// Parsing
// ========================

/// Parse a `DD/MM/YYYY` display date
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let mut parts = text.trim().split('/');
    let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(
        year.trim().parse().ok()?,
        month.trim().parse().ok()?,
        day.trim().parse().ok()?,
    )
}

// ========================
// Derived option lists
// ========================

/// Distinct years across all three views, most recent first
pub fn observed_years(set: &TransactionSet) -> Vec<i32> {
    let years: BTreeSet<i32> = set.iter_all_views().map(|t| t.occurred_on.year()).collect();
    years.into_iter().rev().collect()
}

/// Options for one category select: the server's list, then categories seen
/// on records of `kind` that the list lacks. The uncategorized entry is
/// rendered by the select itself.
pub fn category_options(
    kind: TransactionKind,
    template: &[CategoryOption],
    records: &[TransactionRecord],
) -> Vec<CategoryOption> {
    let mut options = template.to_vec();

    for record in records.iter().filter(|r| r.kind == kind) {
        let Some(id) = &record.category_id else { continue };
        if record.category == UNCATEGORIZED_LABEL || options.iter().any(|o| &o.id == id) {
            continue;
        }
        options.push(CategoryOption {
            id: id.clone(),
            name: record.category.clone(),
            color: record.rendered.category_color.clone(),
        });
    }

    options
}
