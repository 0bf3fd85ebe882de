use std::time::Instant;

use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{
    error::{AppError, AppResult, PRODUCT_NOT_FOUND},
    models::{parse_int, ListParams, Record},
    query, AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

/// `GET /products?offset=&limit=`. Repeated keys keep their first value.
pub async fn list_products(
    State(state): State<AppState>,
    pairs: Option<Query<Vec<(String, String)>>>,
) -> AppResult<(StatusCode, Json<Vec<Record>>)> {
    let start = Instant::now();
    let page = pairs
        .map(|Query(pairs)| ListParams::from_pairs(pairs))
        .unwrap_or_default()
        .page();

    let products = state.products.load().await?;
    let window = query::paginate(products.records(), page);

    info!(
        total = products.len(),
        count = window.len(),
        offset = ?page.offset,
        limit = ?page.limit,
        elapsed_ms = start.elapsed().as_millis(),
        "Listed products"
    );

    Ok((StatusCode::OK, Json(window.to_vec())))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
) -> AppResult<(StatusCode, Json<Record>)> {
    let products = state.products.load().await?;

    // An undecodable or unparsable id can never match, so it takes the same 404 path.
    let raw_id = raw_id.map(|Path(raw)| raw).unwrap_or_default();
    let product = parse_int(&raw_id)
        .and_then(|id| query::find_by_id(products.records(), id))
        .cloned()
        .ok_or_else(|| AppError::NotFound(PRODUCT_NOT_FOUND.to_string()))?;

    info!(id = %raw_id, "Fetched product");

    Ok((StatusCode::OK, Json(product)))
}
