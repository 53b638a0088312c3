use regex::Regex;
use rust_decimal::Decimal;

use crate::import::parse_form_number;

/// Recognizes measurement inputs: `qtd_mes_<id>` (what `/medicao` renders)
/// and `item_<id>_mes`.
pub(crate) struct FieldNames {
    pattern: Regex,
}

impl FieldNames {
    pub(crate) fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(r"^(?:qtd_mes_([0-9]+)|item_([0-9]+)_mes)$")?,
        })
    }

    pub(crate) fn item_id(&self, name: &str) -> Option<i64> {
        let caps = self.pattern.captures(name.trim())?;
        caps.get(1)
            .or_else(|| caps.get(2))?
            .as_str()
            .parse()
            .ok()
    }
}

/// Pick `(item id, quantity)` pairs out of a submitted form. Unknown fields,
/// unparseable values and quantities that are not positive are dropped.
pub(crate) fn parse_measurement_form(
    fields: &FieldNames,
    pairs: &[(String, String)],
) -> Vec<(i64, Decimal)> {
    pairs
        .iter()
        .filter_map(|(name, value)| {
            let item_id = fields.item_id(name)?;
            let quantity = parse_form_number(value)?;
            (quantity > Decimal::ZERO).then_some((item_id, quantity))
        })
        .collect()
}

#[cfg(test)]
#[path = "measurement_tests.rs"]
mod tests;
