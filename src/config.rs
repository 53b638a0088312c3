//! Runtime settings, read from the environment (and `.env`, loaded in `main`).

use anyhow::{bail, Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::db::Database;

const DEFAULT_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_MAX_UPLOAD_MB: usize = 25;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DatabaseLocation {
    File(PathBuf),
    InMemory,
    /// `obra.db` in the per-user data directory.
    UserData,
}

impl DatabaseLocation {
    pub(crate) fn open(&self) -> Result<Database> {
        match self {
            Self::File(path) => Database::open(path),
            Self::InMemory => Database::open_in_memory(),
            Self::UserData => Database::open(&user_data_path()?),
        }
    }
}

impl std::fmt::Display for DatabaseLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::InMemory => write!(f, ":memory:"),
            Self::UserData => write!(f, "<user data dir>/obra.db"),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) database: DatabaseLocation,
    pub(crate) addr: SocketAddr,
    pub(crate) max_upload_bytes: usize,
}

impl Config {
    pub(crate) fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database = match get("DATABASE_URL") {
            Some(url) => parse_database_url(&url)?,
            None => DatabaseLocation::UserData,
        };

        let addr_raw = get("OBRA_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr: SocketAddr = addr_raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid OBRA_ADDR: {addr_raw}"))?;

        let max_upload_mb = match get("OBRA_MAX_UPLOAD_MB") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("Invalid OBRA_MAX_UPLOAD_MB: {raw}"))?,
            None => DEFAULT_MAX_UPLOAD_MB,
        };
        if max_upload_mb == 0 {
            bail!("OBRA_MAX_UPLOAD_MB must be at least 1");
        }

        Ok(Self {
            database,
            addr,
            max_upload_bytes: max_upload_mb.saturating_mul(1024 * 1024),
        })
    }
}

/// Accepts `sqlite://<path>`, `sqlite:///<abs path>`, `sqlite:<path>`,
/// `sqlite::memory:` and bare paths. Other schemes are rejected.
pub(crate) fn parse_database_url(url: &str) -> Result<DatabaseLocation> {
    let url = url.trim();
    if url.is_empty() {
        return Ok(DatabaseLocation::UserData);
    }

    let rest = if let Some(rest) = url.strip_prefix("sqlite://") {
        rest
    } else if let Some(rest) = url.strip_prefix("sqlite:") {
        rest
    } else if let Some((scheme, _)) = url.split_once("://") {
        bail!("Unsupported DATABASE_URL scheme '{scheme}': only SQLite is supported");
    } else {
        url
    };

    // sqlx-style options such as `?mode=rwc` carry nothing for rusqlite.
    let path = rest.split('?').next().unwrap_or_default();
    match path {
        ":memory:" => Ok(DatabaseLocation::InMemory),
        "" => bail!("DATABASE_URL has no database path: {url}"),
        p => Ok(DatabaseLocation::File(PathBuf::from(p))),
    }
}

fn user_data_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("br", "obra", "ObraTracker")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.join("obra.db"))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
