use anyhow::{Context, Result};

use crate::config::Config;
use crate::db::Database;
use crate::web::{run_server, AppState};

/// Serve HTTP until the process is stopped. The runtime is built here so the
/// CLI commands stay synchronous.
pub(crate) fn as_server(config: &Config, db: Database) -> Result<()> {
    let state = AppState::new(db)?;
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(run_server(config.addr, state, config.max_upload_bytes))
}
