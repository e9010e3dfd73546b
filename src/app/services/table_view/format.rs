//! Number formatting for table cells and console output

use num_format::{Locale, ToFormattedString};

use crate::app::services::aggregation::percent_realized;

/// Format a quantity with two decimals and thousands separators
///
/// `1234567.891` becomes `1,234,567.89`.
pub fn format_quantity(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // Round first so a carry (999.999 -> 1000.00) reaches the integer part
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut formatted = group_thousands(int_part);
    formatted.push('.');
    formatted.push_str(frac_part);

    if value.is_sign_negative() && fixed != "0.00" {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

/// Insert `,` every three digits from the right of a plain digit string
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Realized as a share of plan, as `"x.xx%"`; `"0.00%"` when nothing was planned
pub fn format_percent(plan: f64, realized: f64) -> String {
    format!("{:.2}%", percent_realized(plan, realized))
}

/// Format a count with thousands separators
pub fn format_count<T: ToFormattedString>(count: T) -> String {
    count.to_formatted_string(&Locale::en)
}
