use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::{
    errors::AppError,
    extractors::{AppJson, AppPath},
    services::shifts,
    state::AppState,
    structs::shifts::{NewShift, Shift, UpdateShift},
};

pub fn new() -> Router<AppState> {
    Router::new()
        .route("/", get(get_shifts).post(create_shift))
        .route(
            "/{id}",
            get(get_shift).put(update_shift).delete(delete_shift),
        )
}

/// 取 shifts 清單
async fn get_shifts(State(state): State<AppState>) -> Result<Json<Vec<Shift>>, AppError> {
    let result = shifts::list(state.store()).await?;

    Ok(Json(result))
}

async fn get_shift(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<Shift>, AppError> {
    let shift = shifts::get(state.store(), id).await?;

    Ok(Json(shift))
}

async fn create_shift(
    State(state): State<AppState>,
    AppJson(shift): AppJson<NewShift>,
) -> Result<(StatusCode, Json<Shift>), AppError> {
    let shift = shifts::create(state.store(), shift).await?;

    Ok((StatusCode::CREATED, Json(shift)))
}

async fn update_shift(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(body): AppJson<UpdateShift>,
) -> Result<Json<Shift>, AppError> {
    let shift = shifts::update(state.store(), id, body).await?;

    Ok(Json(shift))
}

async fn delete_shift(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<Value>, AppError> {
    shifts::delete(state.store(), id).await?;

    Ok(Json(json!({ "message": "Shift deleted successfully" })))
}
