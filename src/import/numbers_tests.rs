#![allow(clippy::unwrap_used)]

use super::*;
use rust_decimal_macros::dec;

// ── parse_import_number ───────────────────────────────────────

#[test]
fn test_import_number_brazilian_with_currency() {
    assert_eq!(parse_import_number("R$ 1.250,50"), dec!(1250.50));
    assert_eq!(parse_import_number("R$1.250,50"), dec!(1250.50));
}

#[test]
fn test_import_number_comma_only() {
    assert_eq!(parse_import_number("123,45"), dec!(123.45));
    assert_eq!(parse_import_number(" 0,5 "), dec!(0.5));
}

#[test]
fn test_import_number_many_thousands_groups() {
    assert_eq!(parse_import_number("600.822.115,84"), dec!(600822115.84));
}

#[test]
fn test_import_number_bare_period_is_decimal_point() {
    // Without a comma the period is a decimal point, even when it looks like
    // a thousands separator.
    assert_eq!(parse_import_number("1.250"), dec!(1.25));
    assert_eq!(parse_import_number("R$ 1.250"), dec!(1.25));
    assert_eq!(parse_import_number("1.25"), dec!(1.25));
}

#[test]
fn test_import_number_plain_integer() {
    assert_eq!(parse_import_number("42"), dec!(42));
    assert_eq!(parse_import_number("-17"), dec!(-17));
}

#[test]
fn test_import_number_negative_brazilian() {
    assert_eq!(parse_import_number("-1.000,00"), dec!(-1000.00));
    assert_eq!(parse_import_number("R$ -35,10"), dec!(-35.10));
}

#[test]
fn test_import_number_scientific() {
    assert_eq!(parse_import_number("1e3"), dec!(1000));
}

#[test]
fn test_import_number_empty_is_zero() {
    assert_eq!(parse_import_number(""), Decimal::ZERO);
    assert_eq!(parse_import_number("   "), Decimal::ZERO);
    assert_eq!(parse_import_number("R$"), Decimal::ZERO);
    assert_eq!(parse_import_number(" R$  "), Decimal::ZERO);
}

#[test]
fn test_import_number_garbage_is_zero() {
    assert_eq!(parse_import_number("abc"), Decimal::ZERO);
    assert_eq!(parse_import_number("1,2,3"), Decimal::ZERO);
    assert_eq!(parse_import_number("R$ --"), Decimal::ZERO);
    assert_eq!(parse_import_number("1 250,00"), Decimal::ZERO);
}

// ── parse_form_number ─────────────────────────────────────────

#[test]
fn test_form_number_comma_decimal() {
    assert_eq!(parse_form_number("1,5"), Some(dec!(1.5)));
}

/// OPEN QUESTION for product owners: the form rule as written turns
/// "1,500" into 1.5, while the documented example expects 1500. Kept at
/// 1.5 until the rule or the example is changed.
#[test]
fn test_form_number_open_question_comma_thousands() {
    assert_eq!(parse_form_number("1,500"), Some(dec!(1.5)));
    assert_ne!(parse_form_number("1,500"), Some(dec!(1500)));
}

#[test]
fn test_form_number_period_always_thousands() {
    // Diverges from the file rule: "1.250" is 1250 here.
    assert_eq!(parse_form_number("1.250"), Some(dec!(1250)));
    assert_eq!(parse_form_number("1.250,75"), Some(dec!(1250.75)));
    assert_ne!(parse_form_number("1.250"), Some(parse_import_number("1.250")));
}

#[test]
fn test_form_number_zero_is_a_value() {
    assert_eq!(parse_form_number("0"), Some(Decimal::ZERO));
}

#[test]
fn test_form_number_empty_or_garbage_is_none() {
    assert_eq!(parse_form_number(""), None);
    assert_eq!(parse_form_number("  "), None);
    assert_eq!(parse_form_number("três"), None);
    assert_eq!(parse_form_number("R$ 10,00"), None);
}

// ── parse_day_first_date ──────────────────────────────────────

#[test]
fn test_date_day_first() {
    let d = parse_day_first_date("05/08/2025").unwrap();
    assert_eq!(d, NaiveDate::from_ymd_opt(2025, 8, 5).unwrap());
}

#[test]
fn test_date_two_digit_year() {
    let d = parse_day_first_date("05/08/25").unwrap();
    assert_eq!(d, NaiveDate::from_ymd_opt(2025, 8, 5).unwrap());
}

#[test]
fn test_date_with_time_suffix() {
    let d = parse_day_first_date("31/12/2024 00:00:00").unwrap();
    assert_eq!(d, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
}

#[test]
fn test_date_iso() {
    let d = parse_day_first_date("2025-03-10").unwrap();
    assert_eq!(d, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
}

#[test]
fn test_date_dashes_and_dots() {
    assert_eq!(
        parse_day_first_date("10-03-2025"),
        NaiveDate::from_ymd_opt(2025, 3, 10)
    );
    assert_eq!(
        parse_day_first_date("10.03.2025"),
        NaiveDate::from_ymd_opt(2025, 3, 10)
    );
}

#[test]
fn test_date_invalid() {
    assert!(parse_day_first_date("").is_none());
    assert!(parse_day_first_date("sem data").is_none());
    assert!(parse_day_first_date("32/01/2025").is_none());
    assert!(parse_day_first_date("13/13/2025").is_none());
}
