use rust_decimal::{Decimal, RoundingStrategy};

/// Format with pt-BR grouping: `.` for thousands, `,` for decimals.
/// e.g. `1234567.891` with 2 places → `"1.234.567,89"`
pub(crate) fn format_decimal(val: Decimal, places: usize) -> String {
    let abs = val
        .abs()
        .round_dp_with_strategy(places as u32, RoundingStrategy::MidpointAwayFromZero);
    let formatted = format!("{abs:.places$}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next();

    let grouped: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(".");

    let sign = if val < Decimal::ZERO && abs != Decimal::ZERO {
        "-"
    } else {
        ""
    };
    match dec_part {
        Some(d) => format!("{sign}{grouped},{d}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Money amount, two decimal places: `1.250,50`.
pub(crate) fn format_brl(val: Decimal) -> String {
    format_decimal(val, 2)
}

/// Ratio in `[0, 1]` scale as a percentage with one decimal: `0.452` → `45,2%`.
pub(crate) fn format_percent(ratio: Decimal) -> String {
    format!("{}%", format_decimal(ratio.saturating_mul(Decimal::ONE_HUNDRED), 1))
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
