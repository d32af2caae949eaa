//! Filter Context
//!
//! Page data and derived signals provided via Leptos Context API.

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::config::FilterConfig;
use crate::debounce::Debouncer;
use crate::extract::{self, PageModel};
use crate::filters::{AmountBound, FilterCriteria, QuickFilter};
use crate::models::{CategoryOption, TransactionKind, TransactionSet, ViewKind};
use crate::predicate;
use crate::store::{store_clear, store_criteria, store_update_criteria, FilterStore};
use crate::summary::{self, FilteredTotals, ViewCounts};

/// Extracted page data and the filtered view of it
#[derive(Clone, Copy)]
pub struct FilterContext {
    pub store: FilterStore,
    /// Unfiltered records, fixed after extraction
    transactions: StoredValue<TransactionSet>,
    pub expense_options: StoredValue<Vec<CategoryOption>>,
    pub income_options: StoredValue<Vec<CategoryOption>>,
    /// Years seen in the payload, most recent first
    pub years: StoredValue<Vec<i32>>,
    pub config: StoredValue<FilterConfig>,
    pub today: NaiveDate,
    /// Records passing the current criteria
    pub filtered: Memo<TransactionSet>,
    /// Tab currently shown
    pub active_view: RwSignal<ViewKind>,
    min_amount_debouncer: Debouncer,
    max_amount_debouncer: Debouncer,
}

impl FilterContext {
    pub fn new(store: FilterStore, model: PageModel, config: FilterConfig, today: NaiveDate) -> Self {
        let expense_options = model.category_options(TransactionKind::Expense);
        let income_options = model.category_options(TransactionKind::Income);
        let transactions = model.transactions;
        let years = extract::observed_years(&transactions);
        let delay_ms = config.amount_debounce_ms;

        let transactions = StoredValue::new(transactions);
        let filtered = Memo::new(move |_| {
            let criteria = store_criteria(&store);
            transactions.with_value(|set| predicate::apply(set, &criteria))
        });

        Self {
            store,
            transactions,
            expense_options: StoredValue::new(expense_options),
            income_options: StoredValue::new(income_options),
            years: StoredValue::new(years),
            config: StoredValue::new(config),
            today,
            filtered,
            active_view: RwSignal::new(ViewKind::All),
            min_amount_debouncer: Debouncer::new(delay_ms),
            max_amount_debouncer: Debouncer::new(delay_ms),
        }
    }

    /// Current criteria (tracked)
    pub fn criteria(&self) -> FilterCriteria {
        store_criteria(&self.store)
    }

    pub fn update(&self, f: impl FnOnce(&mut FilterCriteria)) {
        store_update_criteria(&self.store, f);
    }

    /// Debouncer for the input editing `bound`
    pub fn amount_debouncer(&self, bound: AmountBound) -> Debouncer {
        match bound {
            AmountBound::Min => self.min_amount_debouncer,
            AmountBound::Max => self.max_amount_debouncer,
        }
    }

    /// Reset every filter, including amount keystrokes still waiting
    pub fn clear(&self) {
        self.min_amount_debouncer.cancel();
        self.max_amount_debouncer.cancel();
        store_clear(&self.store);
        log::info!("filters cleared");
    }

    pub fn apply_quick_filter(&self, quick: QuickFilter) {
        let today = self.today;
        self.update(|c| quick.apply(c, today));
        log::debug!("quick filter {:?}", quick);
    }

    /// Whether the page had any transactions at all
    pub fn has_transactions(&self) -> bool {
        self.transactions.with_value(|set| set.iter_all_views().next().is_some())
    }

    pub fn counts(&self) -> ViewCounts {
        self.filtered.with(ViewCounts::from_set)
    }

    pub fn totals(&self) -> FilteredTotals {
        self.filtered.with(FilteredTotals::from_set)
    }

    pub fn currency_symbol(&self) -> String {
        self.config.with_value(|c| c.currency_symbol.clone())
    }

    /// Chip lines for the active criteria
    pub fn chips(&self) -> Vec<String> {
        let criteria = self.criteria();
        let symbol = self.currency_symbol();
        self.expense_options.with_value(|expense| {
            self.income_options
                .with_value(|income| summary::chips(&criteria, expense, income, &symbol))
        })
    }
}

/// Get the filter context
pub fn use_filter_context() -> FilterContext {
    use_context::<FilterContext>().expect("FilterContext should be provided")
}
