use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    routing::{get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::{
    auth::authorize,
    errors::AppError,
    extractors::{AppJson, AppPath, Caller},
    services::leave_requests,
    state::AppState,
    structs::leave_requests::{CreateLeaveRequest, LeaveRequest, UpdateLeaveRequest},
};

/// 建立與更新需要登入, 讀取不用
pub fn new(state: AppState) -> Router<AppState> {
    let auth = middleware::from_fn_with_state(state, authorize);

    Router::new()
        .route(
            "/",
            get(get_leave_requests).merge(post(create_leave_request).route_layer(auth.clone())),
        )
        .route(
            "/{id}",
            get(get_leave_request).merge(put(update_leave_request).route_layer(auth)),
        )
}

/// 取請假單清單, 不做任何過濾
async fn get_leave_requests(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeaveRequest>>, AppError> {
    let result = leave_requests::list(state.store()).await?;

    Ok(Json(result))
}

async fn get_leave_request(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<LeaveRequest>, AppError> {
    let request = leave_requests::get(state.store(), id).await?;

    Ok(Json(request))
}

async fn create_leave_request(
    State(state): State<AppState>,
    Caller(caller): Caller,
    AppJson(body): AppJson<CreateLeaveRequest>,
) -> Result<(StatusCode, Json<LeaveRequest>), AppError> {
    let request = leave_requests::create(state.store(), caller.as_ref(), body).await?;

    Ok((StatusCode::CREATED, Json(request)))
}

async fn update_leave_request(
    State(state): State<AppState>,
    Caller(caller): Caller,
    AppPath(id): AppPath<Uuid>,
    AppJson(body): AppJson<UpdateLeaveRequest>,
) -> Result<Json<LeaveRequest>, AppError> {
    let caller = caller.ok_or(AppError::Authentication)?;
    let request = leave_requests::update(state.store(), &caller, id, body).await?;

    Ok(Json(request))
}
