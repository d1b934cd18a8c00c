//! Axum handlers for the timer routes

use axum::{body::Bytes, extract::State, http::StatusCode, Json};

use crate::{errors::AppError, timer::Timer, AppState};

pub async fn list_timers(State(state): State<AppState>) -> Result<Json<Vec<Timer>>, AppError> {
    let timers = state.store.find_all().await?;
    Ok(Json(timers))
}

pub async fn create_timer(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let timer = Timer::from_json(&body).map_err(|err| AppError::bad_request(err.to_string()))?;
    state.store.insert(&timer).await?;
    Ok(StatusCode::CREATED)
}

pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 page not found")
}
