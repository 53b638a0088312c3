use crate::models::BudgetItem;

use super::columns::{ColumnMap, Field};
use super::numbers::parse_import_number;
use super::reader::read_rows;
use super::{ImportBatch, ImportError};

/// Parse an SEO budget file into budget items.
pub(crate) fn load_budget(bytes: &[u8]) -> Result<ImportBatch<BudgetItem>, ImportError> {
    let rows = read_rows(bytes)?;
    parse_budget_rows(&rows, &ColumnMap::budget())
}

pub(crate) fn parse_budget_rows(
    rows: &[Vec<String>],
    map: &ColumnMap,
) -> Result<ImportBatch<BudgetItem>, ImportError> {
    let (header_idx, cols) = map.locate(rows)?;
    let description_spec = map.spec(Field::Description);

    let mut records = Vec::new();
    let mut skipped = 0;
    let data = &rows[header_idx + 1..];

    for row in data {
        let description = match cols.cell(row, Field::Description) {
            Some(d) if !d.is_empty() => d,
            _ => {
                skipped += 1;
                continue;
            }
        };
        // Header repeated on a page break.
        if description_spec.is_some_and(|s| s.matches(description)) {
            skipped += 1;
            continue;
        }

        let text = |field| cols.cell(row, field).unwrap_or_default().to_string();
        let number = |field| parse_import_number(cols.cell(row, field).unwrap_or_default());

        records.push(BudgetItem::new(
            text(Field::Code),
            description.to_string(),
            text(Field::Unit),
            number(Field::Quantity),
            number(Field::UnitPrice),
        ));
    }

    tracing::debug!(
        header_row = header_idx,
        items = records.len(),
        skipped,
        "parsed budget rows"
    );

    Ok(ImportBatch {
        records,
        rows_read: data.len(),
        skipped,
    })
}

#[cfg(test)]
#[path = "budget_tests.rs"]
mod tests;
