//! Currency formatting for deal totals.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a monetary value with a leading `$` and thousands separators.
///
/// Whole amounts render without a fraction (`$350`, `$1,234,567`); anything
/// else keeps two decimal places (`$1,234.50`). Values are rounded to the
/// nearest cent first.
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as i64;
    let whole = cents / 100;
    let frac = cents % 100;

    let mut out = String::from(if negative { "-$" } else { "$" });
    out.push_str(&group_thousands(whole));
    if frac != 0 {
        out.push_str(&format!(".{frac:02}"));
    }
    out
}

/// Insert a comma every three digits, counting from the right.
fn group_thousands(n: i64) -> String {
    let digits = n.to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.insert(0, ',');
        }
        out.insert(0, c);
    }
    out
}
