use rust_decimal::Decimal;

use crate::models::PaymentRecord;

use super::columns::{ColumnMap, Field};
use super::numbers::{parse_day_first_date, parse_import_number};
use super::reader::read_rows;
use super::{ImportBatch, ImportError};

/// Parse a GERFIN payments export into payment records.
pub(crate) fn load_payments(bytes: &[u8]) -> Result<ImportBatch<PaymentRecord>, ImportError> {
    let rows = read_rows(bytes)?;
    parse_payment_rows(&rows, &ColumnMap::payments())
}

pub(crate) fn parse_payment_rows(
    rows: &[Vec<String>],
    map: &ColumnMap,
) -> Result<ImportBatch<PaymentRecord>, ImportError> {
    let (header_idx, cols) = map.locate(rows)?;
    if !cols.has(Field::PaymentDate) {
        tracing::warn!("payments file has no date column; every payment will be undated");
    }

    let mut records = Vec::new();
    let mut skipped = 0;
    let data = &rows[header_idx + 1..];

    for row in data {
        let raw_amount = match cols.cell(row, Field::Amount) {
            Some(a) if !a.is_empty() => a,
            _ => {
                skipped += 1;
                continue;
            }
        };
        let amount = parse_import_number(raw_amount);
        if amount == Decimal::ZERO {
            skipped += 1;
            continue;
        }

        let payment_date = cols
            .cell(row, Field::PaymentDate)
            .and_then(parse_day_first_date);
        let text = |field| cols.cell(row, field).unwrap_or_default().to_string();

        records.push(PaymentRecord::new(
            payment_date,
            text(Field::Supplier),
            text(Field::Category),
            amount,
        ));
    }

    tracing::debug!(
        header_row = header_idx,
        payments = records.len(),
        skipped,
        "parsed payment rows"
    );

    Ok(ImportBatch {
        records,
        rows_read: data.len(),
        skipped,
    })
}

#[cfg(test)]
#[path = "payments_tests.rs"]
mod tests;
