use tracing::{info, warn};

use crate::db::Database;

use super::{load_budget, load_payments, ImportError, ImportKind};

/// What one file import did to its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ImportSummary {
    pub(crate) kind: ImportKind,
    pub(crate) rows_read: usize,
    pub(crate) skipped: usize,
    pub(crate) inserted: usize,
    pub(crate) removed: usize,
    /// Measurements dropped because their budget items were replaced.
    pub(crate) dropped_measurements: usize,
}

/// Parse `bytes` as `kind` and replace the target table with the result.
///
/// Parsing completes before anything is written, so a malformed file
/// leaves the table as it was. Each call is its own transaction.
pub(crate) fn import_file(
    db: &mut Database,
    kind: ImportKind,
    bytes: &[u8],
) -> Result<ImportSummary, ImportError> {
    info!(%kind, bytes = bytes.len(), "import started");

    let result = match kind {
        ImportKind::Budget => load_budget(bytes).and_then(|batch| {
            let outcome = db
                .replace_budget_items(&batch.records)
                .map_err(ImportError::Storage)?;
            Ok((batch.rows_read, batch.skipped, outcome))
        }),
        ImportKind::Payments => load_payments(bytes).and_then(|batch| {
            let outcome = db
                .replace_payment_records(&batch.records)
                .map_err(ImportError::Storage)?;
            Ok((batch.rows_read, batch.skipped, outcome))
        }),
    };

    let (rows_read, skipped, outcome) = match result {
        Ok(r) => r,
        Err(e) => {
            warn!(%kind, error = %e, "import failed");
            return Err(e);
        }
    };

    if outcome.cascaded > 0 {
        warn!(
            %kind,
            dropped = outcome.cascaded,
            "budget replaced; existing measurements were removed with it"
        );
    }
    info!(
        %kind,
        rows_read,
        inserted = outcome.inserted,
        skipped,
        removed = outcome.removed,
        "import finished"
    );

    Ok(ImportSummary {
        kind,
        rows_read,
        skipped,
        inserted: outcome.inserted,
        removed: outcome.removed,
        dropped_measurements: outcome.cascaded,
    })
}

#[cfg(test)]
#[path = "apply_tests.rs"]
mod tests;
