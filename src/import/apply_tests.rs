#![allow(clippy::unwrap_used)]

use super::*;
use crate::models::ProgressEntry;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn cp1252(text: &str) -> Vec<u8> {
    let (bytes, _, _) = encoding_rs::WINDOWS_1252.encode(text);
    bytes.into_owned()
}

const SEO: &str = "\
Código;Descrição;Unid.;Quant.;Unit.
1.1;Escavação manual;m3;10;100,00
;;;;
1.2;Forma de madeira;m2;50;35,00
";

const GERFIN: &str = "\
Data Pagamento;Fornecedor;Valor
05/08/2025;Concreteira;R$ 1.000,00
;Sem data;50,00
";

#[test]
fn test_import_budget_replaces_items() {
    let mut db = Database::open_in_memory().unwrap();
    let summary = import_file(&mut db, ImportKind::Budget, &cp1252(SEO)).unwrap();
    assert_eq!(summary.kind, ImportKind::Budget);
    assert_eq!(summary.inserted, 2);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.removed, 0);
    assert_eq!(db.get_budget_item_count().unwrap(), 2);

    let again = import_file(&mut db, ImportKind::Budget, &cp1252(SEO)).unwrap();
    assert_eq!(again.removed, 2);
    assert_eq!(db.get_budget_item_count().unwrap(), 2);
}

#[test]
fn test_import_budget_reports_dropped_measurements() {
    let mut db = Database::open_in_memory().unwrap();
    import_file(&mut db, ImportKind::Budget, &cp1252(SEO)).unwrap();
    let id = db.get_budget_items().unwrap()[0].id.unwrap();
    let day = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
    db.insert_progress_entries(&[ProgressEntry::new(day, id, dec!(3))])
        .unwrap();

    let summary = import_file(&mut db, ImportKind::Budget, &cp1252(SEO)).unwrap();
    assert_eq!(summary.dropped_measurements, 1);
    assert_eq!(db.get_progress_entry_count().unwrap(), 0);
}

#[test]
fn test_import_payments_keeps_undated_rows() {
    let mut db = Database::open_in_memory().unwrap();
    let summary = import_file(&mut db, ImportKind::Payments, &cp1252(GERFIN)).unwrap();
    assert_eq!(summary.inserted, 2);
    let records = db.get_payment_records().unwrap();
    assert_eq!(records.iter().filter(|r| r.payment_date.is_none()).count(), 1);
}

#[test]
fn test_malformed_file_leaves_table_untouched() {
    let mut db = Database::open_in_memory().unwrap();
    import_file(&mut db, ImportKind::Budget, &cp1252(SEO)).unwrap();

    let err = import_file(&mut db, ImportKind::Budget, b"foo;bar\n1;2\n").unwrap_err();
    assert!(matches!(err, ImportError::MissingColumns(_)));
    assert_eq!(db.get_budget_item_count().unwrap(), 2);

    let err = import_file(&mut db, ImportKind::Budget, b"").unwrap_err();
    assert!(matches!(err, ImportError::Empty));
    assert_eq!(db.get_budget_item_count().unwrap(), 2);
}

#[test]
fn test_header_only_file_empties_table() {
    let mut db = Database::open_in_memory().unwrap();
    import_file(&mut db, ImportKind::Budget, &cp1252(SEO)).unwrap();

    let header_only = cp1252("Código;Descrição;Unid.;Quant.;Unit.\n");
    let summary = import_file(&mut db, ImportKind::Budget, &header_only).unwrap();
    assert_eq!(summary.inserted, 0);
    assert_eq!(summary.removed, 2);
    assert_eq!(db.get_budget_item_count().unwrap(), 0);
}
