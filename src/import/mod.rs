//! Tabular import normalizer for the SEO budget sheet and the GERFIN
//! payments export.
//!
//! Loaders only parse. Writing a batch is always a full replace of the
//! target table, done by `Database::replace_budget_items` /
//! `Database::replace_payment_records`.

mod apply;
mod budget;
mod columns;
mod error;
mod numbers;
mod payments;
mod reader;

pub(crate) use apply::{import_file, ImportSummary};
pub(crate) use budget::load_budget;
pub(crate) use error::ImportError;
pub(crate) use numbers::parse_form_number;
pub(crate) use payments::load_payments;

/// Which of the two exports a file is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum ImportKind {
    Budget,
    Payments,
}

impl ImportKind {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Budget => "SEO",
            Self::Payments => "GERFIN",
        }
    }
}

impl std::fmt::Display for ImportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Records parsed from one file. Always the complete new contents of the
/// target table, never a delta.
#[derive(Debug, Clone)]
pub(crate) struct ImportBatch<T> {
    pub(crate) records: Vec<T>,
    /// Data rows seen below the header.
    pub(crate) rows_read: usize,
    pub(crate) skipped: usize,
}
