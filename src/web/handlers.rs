use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Html,
    Form, Json,
};
use tracing::info;

use crate::import::{import_file, ImportKind};
use crate::models::ProgressEntry;
use crate::report::{build_cashflow, summarize_progress, Cashflow};

use super::{pages, parse_measurement_form, AppError, AppState};

pub(crate) async fn health() -> &'static str {
    "ok"
}

pub(crate) async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let db = state.db()?;
    let items = db.get_budget_item_count()?;
    let entries = db.get_progress_entry_count()?;
    Ok(Html(pages::index(items, entries)))
}

pub(crate) async fn measurement_form(
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let rows = {
        let db = state.db()?;
        summarize_progress(&db.get_budget_items()?, &db.get_progress_entries()?)
    };
    Ok(Html(pages::measurement_form(&rows)))
}

/// Each positive quantity becomes one progress entry dated today. The whole
/// submission is one transaction.
pub(crate) async fn save_measurement(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    let today = state.today();
    let entries: Vec<ProgressEntry> = parse_measurement_form(&state.fields, &pairs)
        .into_iter()
        .map(|(item_id, quantity)| ProgressEntry::new(today, item_id, quantity))
        .collect();

    let saved = state.db()?.insert_progress_entries(&entries)?;
    info!(saved, fields = pairs.len(), %today, "measurement saved");
    Ok(Html(pages::measurement_saved(saved)))
}

pub(crate) async fn upload_form() -> Html<String> {
    Html(pages::upload_form())
}

/// Imports whichever of `arquivo_seo` / `arquivo_gerfin` were sent. Each
/// file is its own unit of work; the page reports both outcomes and the
/// status is 422 when any of them failed.
pub(crate) async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Html<String>), AppError> {
    let mut files = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        let kind = match field.name() {
            Some("arquivo_seo") => ImportKind::Budget,
            Some("arquivo_gerfin") => ImportKind::Payments,
            _ => continue,
        };
        let data = field.bytes().await?;
        if !data.is_empty() {
            files.push((kind, data));
        }
    }
    // Budget first, so a measurement cascade is reported before payments.
    files.sort_by_key(|(kind, _)| *kind);

    let outcomes: Vec<_> = {
        let mut db = state.db()?;
        files
            .iter()
            .map(|(kind, data)| (*kind, import_file(&mut db, *kind, data)))
            .collect()
    };

    let status = if outcomes.iter().any(|(_, r)| r.is_err()) {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::OK
    };
    Ok((status, Html(pages::upload_result(&outcomes))))
}

fn load_cashflow(state: &AppState) -> Result<Cashflow, AppError> {
    let db = state.db()?;
    Ok(build_cashflow(
        &db.get_budget_items()?,
        &db.get_progress_entries()?,
        &db.get_payment_records()?,
    ))
}

pub(crate) async fn dashboard(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let cashflow = load_cashflow(&state)?;
    Ok(Html(pages::dashboard(&cashflow)))
}

pub(crate) async fn cashflow_json(State(state): State<AppState>) -> Result<Json<Cashflow>, AppError> {
    Ok(Json(load_cashflow(&state)?))
}
