use super::*;

#[test]
fn whole_amount_has_no_fraction() {
    assert_eq!(format_currency(350.0), "$350");
}

#[test]
fn zero_formats_as_zero_dollars() {
    assert_eq!(format_currency(0.0), "$0");
}

#[test]
fn thousands_are_comma_grouped() {
    assert_eq!(format_currency(1_234_567.0), "$1,234,567");
}

#[test]
fn exact_thousand_boundary() {
    assert_eq!(format_currency(1_000.0), "$1,000");
}

#[test]
fn fractional_amount_keeps_two_decimals() {
    assert_eq!(format_currency(1234.5), "$1,234.50");
}

#[test]
fn sub_dollar_amount() {
    assert_eq!(format_currency(0.5), "$0.50");
}

#[test]
fn rounds_to_nearest_cent() {
    assert_eq!(format_currency(99.999), "$100");
}
