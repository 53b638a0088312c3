use chrono::NaiveDate;
use rust_decimal::Decimal;

/// One disbursement from the GERFIN financial export.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRecord {
    pub id: Option<i64>,
    /// `None` when the source cell could not be read as a date.
    pub payment_date: Option<NaiveDate>,
    pub supplier: String,
    pub category: String,
    pub amount: Decimal,
}

impl PaymentRecord {
    pub fn new(
        payment_date: Option<NaiveDate>,
        supplier: String,
        category: String,
        amount: Decimal,
    ) -> Self {
        Self {
            id: None,
            payment_date,
            supplier,
            category,
            amount,
        }
    }

    /// Spend is counted regardless of the sign the export used.
    pub fn spend(&self) -> Decimal {
        self.amount.abs()
    }
}
