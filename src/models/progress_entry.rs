use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Executed quantity recorded against one budget item (a "medição").
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressEntry {
    pub id: Option<i64>,
    pub reference_date: NaiveDate,
    pub item_id: i64,
    pub quantity: Decimal,
}

impl ProgressEntry {
    pub fn new(reference_date: NaiveDate, item_id: i64, quantity: Decimal) -> Self {
        Self {
            id: None,
            reference_date,
            item_id,
            quantity,
        }
    }
}
