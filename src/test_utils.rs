//! Fixtures shared by the unit tests

use chrono::NaiveDate;

use crate::models::{RenderedForm, TransactionKind, TransactionRecord, TransactionSet, UNCATEGORIZED_LABEL};

pub fn record(
    kind: TransactionKind,
    description: &str,
    category_id: Option<&str>,
    date: (i32, u32, u32),
    amount: f64,
) -> TransactionRecord {
    let category = match category_id {
        Some(id) => format!("Categoria {}", id),
        None => UNCATEGORIZED_LABEL.to_string(),
    };
    let occurred_on = NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap();
    TransactionRecord {
        id: None,
        kind,
        description: description.to_string(),
        detailed_description: String::new(),
        category: category.clone(),
        category_id: category_id.map(str::to_string),
        occurred_on,
        amount,
        rendered: RenderedForm {
            kind,
            description: description.to_string(),
            detailed_description: String::new(),
            category_label: category,
            category_color: None,
            date_text: occurred_on.format("%d/%m/%Y").to_string(),
            amount_text: format!("R$ {:.2}", amount).replace('.', ","),
        },
    }
}

/// 3 expenses (R$10, R$50, R$200) and 2 incomes, mirrored into the feed
pub fn baseline() -> TransactionSet {
    let expenses = vec![
        record(TransactionKind::Expense, "Café", None, (2024, 3, 2), 10.0),
        record(TransactionKind::Expense, "Mercado", Some("7"), (2024, 3, 15), 50.0),
        record(TransactionKind::Expense, "Aluguel", Some("8"), (2024, 4, 15), 200.0),
    ];
    let incomes = vec![
        record(TransactionKind::Income, "Salário", Some("2"), (2024, 3, 5), 80.0),
        record(TransactionKind::Income, "Reembolso", None, (2024, 4, 20), 75.0),
    ];
    let mut all: Vec<TransactionRecord> = expenses.iter().chain(incomes.iter()).cloned().collect();
    all.sort_by(|a, b| b.occurred_on.cmp(&a.occurred_on));
    TransactionSet { all, expenses, incomes }
}
