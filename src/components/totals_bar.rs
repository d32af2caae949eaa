//! Totals Bar Component
//!
//! Income, expense and balance of the visible transactions.

use leptos::prelude::*;

use crate::context::use_filter_context;
use crate::money::format_money;

#[component]
pub fn TotalsBar() -> impl IntoView {
    let ctx = use_filter_context();
    let symbol = ctx.currency_symbol();
    let totals = Memo::new(move |_| ctx.totals());

    let fmt = move |value: f64| format_money(value, &symbol);
    let incomes = {
        let fmt = fmt.clone();
        move || fmt(totals.get().incomes)
    };
    let expenses = {
        let fmt = fmt.clone();
        move || fmt(totals.get().expenses)
    };
    let balance = move || fmt(totals.get().balance);

    view! {
        <div class="totals-bar">
            <div class="total total-income">
                <span class="total-label">"Receitas"</span>
                <span class="total-value">{incomes}</span>
            </div>
            <div class="total total-expense">
                <span class="total-label">"Gastos"</span>
                <span class="total-value">{expenses}</span>
            </div>
            <div class="total total-balance" class:negative=move || totals.get().balance < 0.0>
                <span class="total-label">"Saldo"</span>
                <span class="total-value">{balance}</span>
            </div>
        </div>
    }
}
