//! Explicit header-label → field mapping for the two export shapes.

use std::collections::HashMap;

use super::ImportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Field {
    Code,
    Description,
    Unit,
    Quantity,
    UnitPrice,
    Supplier,
    Category,
    Amount,
    PaymentDate,
}

#[derive(Debug, Clone)]
pub(crate) struct ColumnSpec {
    pub(crate) field: Field,
    /// Accepted header labels. The first one is used in error messages.
    pub(crate) labels: Vec<String>,
    pub(crate) required: bool,
}

impl ColumnSpec {
    fn new(field: Field, labels: &[&str], required: bool) -> Self {
        Self {
            field,
            labels: labels.iter().map(|s| s.to_string()).collect(),
            required,
        }
    }

    pub(crate) fn matches(&self, header: &str) -> bool {
        let h = normalize_label(header);
        !h.is_empty() && self.labels.iter().any(|l| normalize_label(l) == h)
    }

    fn display_label(&self) -> &str {
        self.labels.first().map(|s| s.as_str()).unwrap_or("?")
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ColumnMap {
    pub(crate) columns: Vec<ColumnSpec>,
}

impl ColumnMap {
    /// SEO budget sheet.
    pub(crate) fn budget() -> Self {
        Self {
            columns: vec![
                ColumnSpec::new(Field::Code, &["Código", "Cód.", "Cod."], false),
                ColumnSpec::new(Field::Description, &["Descrição"], true),
                ColumnSpec::new(Field::Unit, &["Unid.", "Unidade", "Und."], false),
                ColumnSpec::new(Field::Quantity, &["Quant.", "Quantidade", "Qtd."], true),
                ColumnSpec::new(
                    Field::UnitPrice,
                    &["Unit.", "Preço Unit.", "Preço Unitário"],
                    true,
                ),
            ],
        }
    }

    /// GERFIN financial export.
    pub(crate) fn payments() -> Self {
        Self {
            columns: vec![
                ColumnSpec::new(Field::Supplier, &["Fornecedor", "Favorecido", "Credor"], false),
                ColumnSpec::new(Field::Category, &["Categoria", "Natureza", "Classificação"], false),
                ColumnSpec::new(Field::Amount, &["Valor", "Valor Pago", "Valor Líquido"], true),
                ColumnSpec::new(
                    Field::PaymentDate,
                    &["Data Pagamento", "Data de Pagamento", "Dt. Pagto", "Data"],
                    false,
                ),
            ],
        }
    }

    pub(crate) fn spec(&self, field: Field) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.field == field)
    }

    /// Find the header row (the first row carrying every required label) and
    /// resolve each field to a column index. Returns the header's row index.
    pub(crate) fn locate(&self, rows: &[Vec<String>]) -> Result<(usize, ResolvedColumns), ImportError> {
        for (idx, row) in rows.iter().enumerate() {
            let resolved = self.resolve(row);
            if self.missing_required(&resolved).is_empty() {
                return Ok((idx, resolved));
            }
        }

        // Report against the row that came closest to being a header.
        let closest = rows
            .iter()
            .map(|row| self.resolve(row))
            .max_by_key(|r| r.positions.len())
            .unwrap_or_default();
        Err(ImportError::MissingColumns(self.missing_required(&closest)))
    }

    fn resolve(&self, header: &[String]) -> ResolvedColumns {
        let mut positions = HashMap::new();
        for spec in &self.columns {
            if let Some(pos) = header.iter().position(|h| spec.matches(h)) {
                positions.insert(spec.field, pos);
            }
        }
        ResolvedColumns { positions }
    }

    fn missing_required(&self, resolved: &ResolvedColumns) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| c.required && !resolved.positions.contains_key(&c.field))
            .map(|c| c.display_label().to_string())
            .collect()
    }
}

/// Field → column index for one located header.
#[derive(Debug, Clone, Default)]
pub(crate) struct ResolvedColumns {
    positions: HashMap<Field, usize>,
}

impl ResolvedColumns {
    pub(crate) fn has(&self, field: Field) -> bool {
        self.positions.contains_key(&field)
    }

    /// Trimmed cell text for `field`, `None` when the column is unmapped or
    /// the row is too short.
    pub(crate) fn cell<'a>(&self, row: &'a [String], field: Field) -> Option<&'a str> {
        self.positions
            .get(&field)
            .and_then(|&pos| row.get(pos))
            .map(|s| s.trim())
    }
}

/// Lowercase, strip pt-BR accents and collapse whitespace so that
/// "DESCRICAO ", "Descrição" and "descrição" compare equal.
pub(crate) fn normalize_label(label: &str) -> String {
    let folded: String = label
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "columns_tests.rs"]
mod tests;
