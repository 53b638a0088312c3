mod schema;

use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::models::*;

/// Storage service owning the single SQLite connection. Built once at
/// startup and handed to the HTTP layer and the CLI.
pub(crate) struct Database {
    conn: Connection,
}

/// Row counts from a full-refresh write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ReplaceOutcome {
    pub(crate) removed: usize,
    pub(crate) inserted: usize,
    /// Progress entries deleted along with the budget items they pointed to.
    pub(crate) cascaded: usize,
}

impl Database {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")
            .context("Failed to set database pragmas")?;
        let mut db = Self { conn };
        db.migrate().context("Database migration failed")?;
        Ok(db)
    }

    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        let mut db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Fresh databases get `SCHEMA_V1` and the current version. Existing ones
    /// run every `schema::MIGRATIONS` step at or above their stored version;
    /// the list stays empty until the schema moves past version 1.
    fn migrate(&mut self) -> Result<()> {
        let has_version_table: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )?;

        if !has_version_table {
            self.conn.execute_batch(schema::SCHEMA_V1)?;
            self.conn.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![schema::CURRENT_VERSION],
            )?;
            return Ok(());
        }

        let current: i32 = self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })
            .unwrap_or(0);

        for &(from_version, sql) in schema::MIGRATIONS {
            if current <= from_version {
                self.conn.execute_batch(sql)?;
            }
        }

        if current < schema::CURRENT_VERSION {
            self.conn.execute(
                "UPDATE schema_version SET version = ?1",
                params![schema::CURRENT_VERSION],
            )?;
        }

        Ok(())
    }

    // ── Budget items ──────────────────────────────────────────

    /// Delete every budget item and insert `items` in one transaction.
    /// Progress entries of the old items go with them (ON DELETE CASCADE).
    pub(crate) fn replace_budget_items(&mut self, items: &[BudgetItem]) -> Result<ReplaceOutcome> {
        let tx = self.conn.transaction()?;
        let cascaded: i64 =
            tx.query_row("SELECT COUNT(*) FROM progress_entries", [], |row| row.get(0))?;
        let removed = tx.execute("DELETE FROM budget_items", [])?;

        let mut inserted = 0;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO budget_items (code, description, unit, contracted_quantity, unit_price)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for item in items {
                stmt.execute(params![
                    item.code,
                    item.description,
                    item.unit,
                    item.contracted_quantity.to_string(),
                    item.unit_price.to_string(),
                ])?;
                inserted += 1;
            }
        }
        tx.commit()?;

        Ok(ReplaceOutcome {
            removed,
            inserted,
            cascaded: cascaded as usize,
        })
    }

    pub(crate) fn get_budget_items(&self) -> Result<Vec<BudgetItem>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, code, description, unit, contracted_quantity, unit_price
             FROM budget_items ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            let qty_str: String = row.get(4)?;
            let price_str: String = row.get(5)?;
            Ok(BudgetItem {
                id: Some(row.get(0)?),
                code: row.get(1)?,
                description: row.get(2)?,
                unit: row.get(3)?,
                contracted_quantity: Decimal::from_str(&qty_str).unwrap_or_default(),
                unit_price: Decimal::from_str(&price_str).unwrap_or_default(),
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    pub(crate) fn get_budget_item_count(&self) -> Result<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM budget_items", [], |row| row.get(0))?)
    }

    // ── Progress entries ──────────────────────────────────────

    /// Append measurements in one transaction. A missing budget item fails
    /// the whole batch on the foreign key.
    pub(crate) fn insert_progress_entries(&mut self, entries: &[ProgressEntry]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        let mut count = 0;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO progress_entries (reference_date, item_id, quantity)
                 VALUES (?1, ?2, ?3)",
            )?;
            for entry in entries {
                stmt.execute(params![
                    entry.reference_date,
                    entry.item_id,
                    entry.quantity.to_string(),
                ])
                .with_context(|| format!("Failed to record measurement for item {}", entry.item_id))?;
                count += 1;
            }
        }
        tx.commit()?;
        Ok(count)
    }

    pub(crate) fn get_progress_entries(&self) -> Result<Vec<ProgressEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, reference_date, item_id, quantity
             FROM progress_entries ORDER BY reference_date, id",
        )?;
        let rows = stmt.query_map([], |row| {
            let qty_str: String = row.get(3)?;
            Ok(ProgressEntry {
                id: Some(row.get(0)?),
                reference_date: row.get(1)?,
                item_id: row.get(2)?,
                quantity: Decimal::from_str(&qty_str).unwrap_or_default(),
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    pub(crate) fn get_progress_entry_count(&self) -> Result<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM progress_entries", [], |row| row.get(0))?)
    }

    // ── Payment records ───────────────────────────────────────

    /// Delete every payment record and insert `records` in one transaction.
    pub(crate) fn replace_payment_records(
        &mut self,
        records: &[PaymentRecord],
    ) -> Result<ReplaceOutcome> {
        let tx = self.conn.transaction()?;
        let removed = tx.execute("DELETE FROM payment_records", [])?;

        let mut inserted = 0;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO payment_records (payment_date, supplier, category, amount)
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for record in records {
                stmt.execute(params![
                    record.payment_date,
                    record.supplier,
                    record.category,
                    record.amount.to_string(),
                ])?;
                inserted += 1;
            }
        }
        tx.commit()?;

        Ok(ReplaceOutcome {
            removed,
            inserted,
            cascaded: 0,
        })
    }

    pub(crate) fn get_payment_records(&self) -> Result<Vec<PaymentRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, payment_date, supplier, category, amount
             FROM payment_records ORDER BY payment_date, id",
        )?;
        let rows = stmt.query_map([], |row| {
            let amount_str: String = row.get(4)?;
            Ok(PaymentRecord {
                id: Some(row.get(0)?),
                payment_date: row.get(1)?,
                supplier: row.get(2)?,
                category: row.get(3)?,
                amount: Decimal::from_str(&amount_str).unwrap_or_default(),
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }
}
