use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Instant;

use crate::query::search_variants;
use crate::server::AppState;
use crate::server::error::ApiError;
use crate::server::protocol::{SearchParams, StatusResponse};

/// `GET /search?q=...`
///
/// Searches the lower-, title- and upper-case spellings of `q` and returns
/// the concatenated snippets as a JSON array.
pub(crate) async fn search(
    State(state): State<Arc<AppState>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<String>>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let query = params
        .query()
        .ok_or_else(|| ApiError::bad_request("missing search query in URL params"))?
        .to_string();
    let options = params.options(state.limits.context_radius, state.limits.max_results);

    let start = Instant::now();
    let index = Arc::clone(&state.index);
    let task_query = query.clone();
    let results =
        tokio::task::spawn_blocking(move || search_variants(&index, &task_query, &options))
            .await
            .map_err(|e| ApiError::internal(format!("search task failed: {}", e)))?;

    state.queries_served.fetch_add(1, Ordering::Relaxed);
    tracing::debug!(
        query = %query,
        results = results.len(),
        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
        "search"
    );

    Ok(Json(results))
}

/// `GET /stats`
pub(crate) async fn stats(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let index = state.index.stats();
    Json(StatusResponse {
        uptime_secs: state.start_time.elapsed().as_secs(),
        queries_served: state.queries_served.load(Ordering::Relaxed),
        memory_bytes: index.memory_bytes(),
        index,
    })
}

/// `GET /health`
pub(crate) async fn health() -> &'static str {
    "ok"
}
