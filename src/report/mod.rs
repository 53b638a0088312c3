//! Read-side views over the three tables: the per-item progress table and
//! the monthly cashflow dashboard.

mod cashflow;
mod format;
mod progress;

pub(crate) use cashflow::{build_cashflow, Cashflow};
pub(crate) use format::{format_brl, format_decimal, format_percent};
pub(crate) use progress::{summarize_progress, ItemProgress};
