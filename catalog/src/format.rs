//! Currency formatting for VND prices.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Separator between the amount and the currency symbol (no-break space).
pub const CURRENCY_SEPARATOR: char = '\u{a0}';

/// Format a whole-VND amount the way the vi-VN locale renders currency:
/// `.` groups thousands, no fraction digits, symbol after the amount.
///
/// ```
/// assert_eq!(catalog::format_price(850_000_000), "850.000.000\u{a0}₫");
/// ```
#[must_use]
pub fn format_price(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    if amount < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped.push(CURRENCY_SEPARATOR);
    grouped.push('₫');
    grouped
}
