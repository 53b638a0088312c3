use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::models::{BudgetItem, ProgressEntry};

/// One row of the measurement screen.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ItemProgress {
    pub(crate) item: BudgetItem,
    /// Sum of every progress entry recorded for the item.
    pub(crate) executed: Decimal,
}

impl ItemProgress {
    /// Executed / contracted. `None` when nothing was contracted or the
    /// quotient does not fit in a `Decimal`. Over-execution is reported
    /// as-is (> 1).
    pub(crate) fn executed_ratio(&self) -> Option<Decimal> {
        self.executed.checked_div(self.item.contracted_quantity)
    }

    pub(crate) fn earned_value(&self) -> Decimal {
        self.item.earned_value(self.executed)
    }
}

pub(crate) fn summarize_progress(items: &[BudgetItem], entries: &[ProgressEntry]) -> Vec<ItemProgress> {
    let mut executed: HashMap<i64, Decimal> = HashMap::new();
    for entry in entries {
        let total = executed.entry(entry.item_id).or_default();
        *total = total.saturating_add(entry.quantity);
    }

    items
        .iter()
        .map(|item| ItemProgress {
            executed: item
                .id
                .and_then(|id| executed.get(&id).copied())
                .unwrap_or_default(),
            item: item.clone(),
        })
        .collect()
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
