//! HTTP surface: server-rendered pages over the shared `Database`.

mod error;
mod handlers;
mod measurement;
mod pages;

use anyhow::{Context, Result};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use chrono::NaiveDate;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::info;

use crate::db::Database;

pub(crate) use error::AppError;
pub(crate) use measurement::{parse_measurement_form, FieldNames};

/// Source of "today" for measurement dates.
pub(crate) type Clock = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

/// Shared by every handler through axum `State`.
#[derive(Clone)]
pub(crate) struct AppState {
    db: Arc<Mutex<Database>>,
    today: Clock,
    fields: Arc<FieldNames>,
}

impl AppState {
    pub(crate) fn new(db: Database) -> Result<Self> {
        Self::with_clock(
            Arc::new(Mutex::new(db)),
            Arc::new(|| chrono::Local::now().date_naive()),
        )
    }

    pub(crate) fn with_clock(db: Arc<Mutex<Database>>, today: Clock) -> Result<Self> {
        let fields = FieldNames::new().context("Failed to compile measurement field pattern")?;
        Ok(Self {
            db,
            today,
            fields: Arc::new(fields),
        })
    }

    /// Lock the database. Callers must drop the guard before any `.await`.
    fn db(&self) -> Result<MutexGuard<'_, Database>, AppError> {
        self.db
            .lock()
            .map_err(|_| AppError::Internal("database lock poisoned".into()))
    }

    fn today(&self) -> NaiveDate {
        (self.today)()
    }
}

pub(crate) fn create_router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/medicao", get(handlers::measurement_form))
        .route("/salvar_medicao", post(handlers::save_measurement))
        .route("/upload", get(handlers::upload_form).post(handlers::upload))
        .route("/dashboard", get(handlers::dashboard))
        .route("/api/cashflow", get(handlers::cashflow_json))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

pub(crate) async fn run_server(
    addr: SocketAddr,
    state: AppState,
    max_upload_bytes: usize,
) -> Result<()> {
    let app = create_router(state, max_upload_bytes);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, max_upload_bytes, "obra server listening");
    info!("dashboard: http://{addr}/dashboard");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
