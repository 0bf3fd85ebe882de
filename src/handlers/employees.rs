use std::time::Instant;

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use crate::{error::AppResult, models::Record, AppState};

pub async fn list_employees(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<Vec<Record>>)> {
    let start = Instant::now();
    let employees = state.employees.load().await?;

    info!(
        count = employees.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "Listed employees"
    );

    Ok((StatusCode::OK, Json(employees.records().to_vec())))
}
