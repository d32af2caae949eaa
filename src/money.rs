//! Currency parsing and formatting for pt-BR amounts ("R$ 1.234,56").

/// Symbol used when the page config does not override it
pub const DEFAULT_CURRENCY_SYMBOL: &str = "R$";

/// Parse a localized currency string into a non-negative amount.
///
/// Everything except digits and separators is dropped first, the sign
/// included, since amounts are stored unsigned. The last separator is the
/// decimal separator when it is a comma or when one or two digits follow it;
/// every other separator groups thousands. Text with no digits parses as 0.
pub fn parse_amount(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.'))
        .collect();

    let decimal_at = cleaned.rfind(&[',', '.'][..]).filter(|&pos| {
        let digits_after = cleaned.len() - pos - 1;
        cleaned[pos..].starts_with(',') || (1..=2).contains(&digits_after)
    });

    let (int_part, frac_part) = match decimal_at {
        Some(pos) => (&cleaned[..pos], &cleaned[pos + 1..]),
        None => (cleaned.as_str(), ""),
    };

    let int_digits: String = int_part.chars().filter(char::is_ascii_digit).collect();
    if int_digits.is_empty() && frac_part.is_empty() {
        return 0.0;
    }

    let normalized = if frac_part.is_empty() {
        int_digits
    } else {
        format!("{}.{}", if int_digits.is_empty() { "0" } else { int_digits.as_str() }, frac_part)
    };

    normalized.parse::<f64>().unwrap_or(0.0)
}

/// Format an amount pt-BR style with thousands separators: `R$ 1.234,56`
pub fn format_money(value: f64, symbol: &str) -> String {
    let negative = value < 0.0;
    let cents = format!("{:.2}", value.abs());
    let (int_part, dec_part) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut grouped = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    if negative {
        format!("-{symbol} {grouped},{dec_part}")
    } else {
        format!("{symbol} {grouped},{dec_part}")
    }
}
