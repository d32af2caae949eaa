//! Transaction Filters App
//!
//! Root component: extracts the page payload once, hydrates the criteria
//! from the URL, then keeps the views and the address bar in step with the
//! filter store.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FilterBar, FilterSummary, TotalsBar, TransactionTabs};
use crate::config::FilterConfig;
use crate::context::FilterContext;
use crate::extract;
use crate::page;
use crate::store::{store_criteria, FilterState};
use crate::url_sync;

#[component]
pub fn App(config: FilterConfig) -> impl IntoView {
    let today = page::today();
    let model = extract::extract_from_page(&config.data_element_id, today);

    // Hydrate before the first render so a shared link shows filtered views
    let initial = url_sync::criteria_from_location().unwrap_or_default();
    let store = Store::new(FilterState::new(initial));

    let ctx = FilterContext::new(store, model, config, today);
    provide_context(ctx);

    // Mirror every criteria change into the URL
    Effect::new(move |_| {
        let criteria = store_criteria(&store);
        url_sync::replace_url(&criteria);
    });

    view! {
        <div class="transaction-filters">
            <FilterBar />
            <FilterSummary />
            <TotalsBar />
            {(!ctx.has_transactions()).then(|| view! {
                <p class="no-transactions">"Nenhuma transação cadastrada"</p>
            })}
            <TransactionTabs />
        </div>
    }
}
