//! Filter State Store
//!
//! The active criteria live in a reactive_stores Store so components can
//! subscribe to them and every change flows through the same helpers.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filters::FilterCriteria;

/// Filter state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct FilterState {
    /// Currently active criteria
    pub criteria: FilterCriteria,
}

impl FilterState {
    pub fn new(criteria: FilterCriteria) -> Self {
        Self { criteria }
    }
}

/// Type alias for the store
pub type FilterStore = Store<FilterState>;

// ========================
// Store Helper Functions
// ========================

/// Snapshot of the criteria (tracked)
pub fn store_criteria(store: &FilterStore) -> FilterCriteria {
    store.criteria().get()
}

/// Change one or more fields in a single notification
pub fn store_update_criteria(store: &FilterStore, f: impl FnOnce(&mut FilterCriteria)) {
    f(&mut *store.criteria().write());
}

/// Reset every field
pub fn store_clear(store: &FilterStore) {
    store.criteria().write().clear();
}
