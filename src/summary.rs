//! Filter Summary
//!
//! Chips describing the active filters, per-view counts for the tab labels,
//! and the totals of what is currently visible.

use crate::filters::{CategoryFilter, FilterCriteria};
use crate::models::{CategoryOption, TransactionRecord, TransactionSet, ViewKind, UNCATEGORIZED_LABEL};

pub const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Portuguese name for a 1-based month
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_NAMES.get(index).copied()
}

// ========================
// Chips
// ========================

/// One line per active filter: month, year, expense category, income
/// category, amount range. Date ranges have no chip.
pub fn chips(
    criteria: &FilterCriteria,
    expense_options: &[CategoryOption],
    income_options: &[CategoryOption],
    currency_symbol: &str,
) -> Vec<String> {
    let mut chips = Vec::new();

    if let Some(name) = criteria.month.and_then(month_name) {
        chips.push(format!("Mês: {}", name));
    }
    if let Some(year) = criteria.year {
        chips.push(format!("Ano: {}", year));
    }
    if let Some(label) = category_label(&criteria.expense_category, expense_options) {
        chips.push(format!("Categoria de Gasto: {}", label));
    }
    if let Some(label) = category_label(&criteria.income_category, income_options) {
        chips.push(format!("Categoria de Receita: {}", label));
    }

    let amount = |v: f64| format!("{} {}", currency_symbol, v);
    match (criteria.amount_range.min, criteria.amount_range.max) {
        (Some(min), Some(max)) => chips.push(format!("Valor: {} - {}", amount(min), amount(max))),
        (Some(min), None) => chips.push(format!("Valor: ≥ {}", amount(min))),
        (None, Some(max)) => chips.push(format!("Valor: ≤ {}", amount(max))),
        (None, None) => {}
    }

    chips
}

fn category_label(filter: &CategoryFilter, options: &[CategoryOption]) -> Option<String> {
    match filter {
        CategoryFilter::Unset => None,
        CategoryFilter::NoCategory => Some(UNCATEGORIZED_LABEL.to_string()),
        CategoryFilter::Specific(id) => Some(
            options
                .iter()
                .find(|o| &o.id == id)
                .map(|o| o.name.clone())
                .unwrap_or_else(|| format!("ID: {}", id)),
        ),
    }
}

// ========================
// Counts
// ========================

/// Number of visible records per view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewCounts {
    pub all: usize,
    pub expenses: usize,
    pub incomes: usize,
}

impl ViewCounts {
    /// Counts from the filtered set (not the unfiltered totals)
    pub fn from_set(filtered: &TransactionSet) -> Self {
        Self {
            all: filtered.all.len(),
            expenses: filtered.expenses.len(),
            incomes: filtered.incomes.len(),
        }
    }

    pub fn get(&self, kind: ViewKind) -> usize {
        match kind {
            ViewKind::All => self.all,
            ViewKind::Expenses => self.expenses,
            ViewKind::Incomes => self.incomes,
        }
    }
}

pub fn tab_label(kind: ViewKind, count: usize) -> String {
    let name = match kind {
        ViewKind::All => "Todas",
        ViewKind::Expenses => "Gastos",
        ViewKind::Incomes => "Receitas",
    };
    format!("{} ({})", name, count)
}

// ========================
// Totals
// ========================

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FilteredTotals {
    pub expenses: f64,
    pub incomes: f64,
    pub balance: f64,
}

impl FilteredTotals {
    pub fn from_set(filtered: &TransactionSet) -> Self {
        let sum = |records: &[TransactionRecord]| records.iter().map(|r| r.amount).sum::<f64>();
        let expenses = sum(&filtered.expenses);
        let incomes = sum(&filtered.incomes);
        Self {
            expenses,
            incomes,
            balance: incomes - expenses,
        }
    }
}
