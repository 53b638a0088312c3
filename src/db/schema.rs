pub(crate) const SCHEMA_V1: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS budget_items (
    id                  INTEGER PRIMARY KEY AUTOINCREMENT,
    code                TEXT NOT NULL DEFAULT '',
    description         TEXT NOT NULL,
    unit                TEXT NOT NULL DEFAULT '',
    contracted_quantity TEXT NOT NULL,
    unit_price          TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS progress_entries (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    reference_date TEXT NOT NULL,
    item_id        INTEGER NOT NULL REFERENCES budget_items(id) ON DELETE CASCADE,
    quantity       TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_progress_item ON progress_entries(item_id);
CREATE INDEX IF NOT EXISTS idx_progress_date ON progress_entries(reference_date);

CREATE TABLE IF NOT EXISTS payment_records (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    payment_date TEXT,
    supplier     TEXT NOT NULL DEFAULT '',
    category     TEXT NOT NULL DEFAULT '',
    amount       TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_payment_date ON payment_records(payment_date);
"#;

pub(crate) const CURRENT_VERSION: i32 = 1;

/// `(from_version, sql)` steps that bring an older obra database up to
/// `CURRENT_VERSION`. Append a step whenever a table or column changes.
pub(crate) const MIGRATIONS: &[(i32, &str)] = &[];
