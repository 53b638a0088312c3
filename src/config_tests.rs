#![allow(clippy::unwrap_used)]

use super::*;
use std::collections::HashMap;

fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_vars(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config.database, DatabaseLocation::UserData);
    assert_eq!(config.addr, "127.0.0.1:5000".parse().unwrap());
    assert_eq!(config.max_upload_bytes, 25 * 1024 * 1024);
}

#[test]
fn test_overrides() {
    let config = config_from(&[
        ("DATABASE_URL", "sqlite://obra_dev.db"),
        ("OBRA_ADDR", "0.0.0.0:8080"),
        ("OBRA_MAX_UPLOAD_MB", "2"),
    ])
    .unwrap();
    assert_eq!(
        config.database,
        DatabaseLocation::File(PathBuf::from("obra_dev.db"))
    );
    assert_eq!(config.addr.port(), 8080);
    assert_eq!(config.max_upload_bytes, 2 * 1024 * 1024);
}

#[test]
fn test_bad_values_rejected() {
    assert!(config_from(&[("OBRA_ADDR", "localhost")]).is_err());
    assert!(config_from(&[("OBRA_MAX_UPLOAD_MB", "lots")]).is_err());
    assert!(config_from(&[("OBRA_MAX_UPLOAD_MB", "0")]).is_err());
}

#[test]
fn test_parse_database_url_forms() {
    assert_eq!(
        parse_database_url("sqlite:///var/lib/obra/obra.db").unwrap(),
        DatabaseLocation::File(PathBuf::from("/var/lib/obra/obra.db"))
    );
    assert_eq!(
        parse_database_url("sqlite://obra.db?mode=rwc").unwrap(),
        DatabaseLocation::File(PathBuf::from("obra.db"))
    );
    assert_eq!(
        parse_database_url("sqlite::memory:").unwrap(),
        DatabaseLocation::InMemory
    );
    assert_eq!(
        parse_database_url("data/obra.db").unwrap(),
        DatabaseLocation::File(PathBuf::from("data/obra.db"))
    );
    assert_eq!(parse_database_url("  ").unwrap(), DatabaseLocation::UserData);
}

#[test]
fn test_parse_database_url_rejects_other_engines() {
    let err = parse_database_url("postgres://user:pw@localhost/obra").unwrap_err();
    assert!(err.to_string().contains("postgres"));
    assert!(parse_database_url("sqlite://").is_err());
}

#[test]
fn test_open_in_memory_location() {
    let db = DatabaseLocation::InMemory.open().unwrap();
    assert_eq!(db.get_budget_item_count().unwrap(), 0);
}
