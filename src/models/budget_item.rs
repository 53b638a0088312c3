use rust_decimal::Decimal;

/// One contracted line item from the SEO budget sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetItem {
    pub id: Option<i64>,
    pub code: String,
    pub description: String,
    pub unit: String,
    pub contracted_quantity: Decimal,
    pub unit_price: Decimal,
}

impl BudgetItem {
    pub fn new(
        code: String,
        description: String,
        unit: String,
        contracted_quantity: Decimal,
        unit_price: Decimal,
    ) -> Self {
        Self {
            id: None,
            code,
            description,
            unit,
            contracted_quantity,
            unit_price,
        }
    }

    /// Contracted value of the whole line: quantity × unit price.
    /// Saturates at `Decimal::MAX` instead of overflowing.
    pub fn contracted_value(&self) -> Decimal {
        self.contracted_quantity.saturating_mul(self.unit_price)
    }

    /// Planned value earned by executing `quantity` of this item.
    /// Saturates like `contracted_value`.
    pub fn earned_value(&self, quantity: Decimal) -> Decimal {
        quantity.saturating_mul(self.unit_price)
    }
}
