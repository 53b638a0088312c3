use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::models::{BudgetItem, PaymentRecord, ProgressEntry};

/// Calendar-month bucket. Orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct YearMonth {
    pub(crate) year: i32,
    pub(crate) month: u32,
}

impl YearMonth {
    pub(crate) fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// `MM/YYYY`, as the dashboard axis shows it.
    pub(crate) fn label(&self) -> String {
        format!("{:02}/{}", self.month, self.year)
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

/// Planned value earned vs. spend, aligned on one month axis.
///
/// All series have the same length as `labels`.
/// Sums saturate at `Decimal::MAX`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub(crate) struct Cashflow {
    pub(crate) labels: Vec<String>,
    pub(crate) monthly_production: Vec<Decimal>,
    pub(crate) monthly_spend: Vec<Decimal>,
    pub(crate) cumulative_production: Vec<Decimal>,
    pub(crate) cumulative_spend: Vec<Decimal>,
    pub(crate) total_production: Decimal,
    pub(crate) total_spend: Decimal,
    /// Production minus spend.
    pub(crate) balance: Decimal,
    /// Payments left out of every series for lack of a date.
    pub(crate) undated_payments: usize,
}

impl Cashflow {
    pub(crate) fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

pub(crate) fn build_cashflow(
    items: &[BudgetItem],
    entries: &[ProgressEntry],
    payments: &[PaymentRecord],
) -> Cashflow {
    let items_by_id: HashMap<i64, &BudgetItem> = items
        .iter()
        .filter_map(|item| item.id.map(|id| (id, item)))
        .collect();

    // month → (production, spend)
    let mut buckets: BTreeMap<YearMonth, (Decimal, Decimal)> = BTreeMap::new();

    for entry in entries {
        let Some(item) = items_by_id.get(&entry.item_id) else {
            continue;
        };
        let bucket = buckets
            .entry(YearMonth::of(entry.reference_date))
            .or_default();
        bucket.0 = bucket.0.saturating_add(item.earned_value(entry.quantity));
    }

    let mut undated_payments = 0;
    for payment in payments {
        let Some(date) = payment.payment_date else {
            undated_payments += 1;
            continue;
        };
        let bucket = buckets.entry(YearMonth::of(date)).or_default();
        bucket.1 = bucket.1.saturating_add(payment.spend());
    }

    if let (Some(first), Some(last)) = (buckets.keys().next(), buckets.keys().next_back()) {
        tracing::debug!(%first, %last, months = buckets.len(), undated_payments, "built cashflow");
    }

    let mut flow = Cashflow {
        undated_payments,
        ..Cashflow::default()
    };
    let (mut running_production, mut running_spend) = (Decimal::ZERO, Decimal::ZERO);
    for (month, (production, spend)) in buckets {
        running_production = running_production.saturating_add(production);
        running_spend = running_spend.saturating_add(spend);
        flow.labels.push(month.label());
        flow.monthly_production.push(production);
        flow.monthly_spend.push(spend);
        flow.cumulative_production.push(running_production);
        flow.cumulative_spend.push(running_spend);
    }

    flow.total_production = running_production;
    flow.total_spend = running_spend;
    flow.balance = running_production.saturating_sub(running_spend);
    flow
}

#[cfg(test)]
#[path = "cashflow_tests.rs"]
mod tests;
