//! HTTP surface: three read views, a health check, and the fallback pages.

/// HTML rendering for the read views
pub mod views;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use tracing::{error, instrument};

use crate::APP_VERSION;
use crate::config::AppConfig;
use crate::core::balance::BalanceSheet;
use crate::db::{self, Db};
use crate::errors::Error;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub config: Arc<AppConfig>,
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(get_home))
        .route("/splits", get(get_splits))
        .route("/splits/:id", get(get_split_detail))
        .route("/healthz", get(get_healthz))
        .fallback(handle_not_found)
        .with_state(state)
}

/// Storage failure surfaced by a handler. Renders the generic failure page;
/// the underlying detail goes to the log only, unlike `/healthz` which
/// reports it verbatim.
pub struct WebError(Error);

impl From<Error> for WebError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(views::error_page()),
        )
            .into_response()
    }
}

#[instrument(skip(state))]
async fn get_home(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    // Bootstrap runs on every visit so a fresh database serves its first
    // request without a separate migration step.
    db::ensure_schema(&state.db, &state.config.guild_name).await?;
    let rows = db::list_balances(&state.db, &state.config.guild_name).await?;
    let sheet = BalanceSheet::from_rows(rows, &state.config.guild_name);
    Ok(Html(views::index_page(&sheet, &state.config.guild_name)))
}

#[instrument(skip(state))]
async fn get_splits(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let splits = db::list_splits(&state.db).await?;
    Ok(Html(views::splits_page(&splits)))
}

#[instrument(skip(state))]
async fn get_split_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    // A non-numeric id is an unknown resource, not a client error.
    let Ok(split_id) = id.parse::<i64>() else {
        return Ok(handle_not_found().await.into_response());
    };

    match db::split_detail(&state.db, split_id).await? {
        Some((split, transactions)) => {
            Ok(Html(views::split_detail_page(&split, &transactions)).into_response())
        }
        None => Ok(handle_not_found().await.into_response()),
    }
}

/// Liveness probe. Unlike the HTML routes this deliberately reports the raw
/// storage error text for operational diagnosis.
#[instrument(skip(state))]
async fn get_healthz(State(state): State<AppState>) -> Response {
    match liveness_check(&state.db) {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({"status": "ok", "version": APP_VERSION})),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"status": "error", "detail": err.to_string()})),
        )
            .into_response(),
    }
}

fn liveness_check(db: &Db) -> crate::errors::Result<()> {
    let conn = db.open()?;
    conn.query_row("SELECT 1", [], |_row| Ok(()))?;
    Ok(())
}

async fn handle_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(views::not_found_page()))
}
