//! Locale-aware number and date cleaning for pt-BR exports.
//!
//! Uploaded files and the measurement form deliberately use two different
//! numeric rules; see `parse_import_number` and `parse_form_number`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

const CURRENCY_MARKER: &str = "R$";

/// Clean a numeric cell from an uploaded file.
///
/// Strips `R$` and whitespace. When a comma is present the value is read as
/// pt-BR (`.` thousands, `,` decimal); otherwise it is parsed as-is, so a bare
/// `"1.250"` is 1.25, not 1250. Anything unreadable becomes zero.
pub(crate) fn parse_import_number(raw: &str) -> Decimal {
    let stripped = raw.replace(CURRENCY_MARKER, "");
    let cleaned = stripped.trim();
    if cleaned.is_empty() {
        return Decimal::ZERO;
    }

    if cleaned.contains(',') {
        parse_plain(&cleaned.replace('.', "").replace(',', "."))
    } else {
        parse_plain(cleaned)
    }
    .unwrap_or(Decimal::ZERO)
}

/// Clean a quantity typed into the measurement form.
///
/// Periods are always dropped and the comma becomes the decimal point, with no
/// currency handling. Unreadable input yields `None` so the caller can skip
/// the field instead of recording zero.
pub(crate) fn parse_form_number(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    parse_plain(&trimmed.replace('.', "").replace(',', "."))
}

fn parse_plain(s: &str) -> Option<Decimal> {
    let s = s.trim();
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

/// Parse a date with the day before the month, as pt-BR exports write them.
/// A trailing time component (`01/08/2025 00:00:00`) is ignored.
pub(crate) fn parse_day_first_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    let date_part = trimmed.split_whitespace().next()?;

    // Two-digit years first: `%Y` would otherwise accept "25" as year 25.
    for fmt in &[
        "%d/%m/%y", "%d/%m/%Y", "%d-%m-%y", "%d-%m-%Y", "%d.%m.%Y", "%Y-%m-%d",
    ] {
        if let Ok(d) = NaiveDate::parse_from_str(date_part, fmt) {
            return Some(d);
        }
    }
    None
}

#[cfg(test)]
#[path = "numbers_tests.rs"]
mod tests;
