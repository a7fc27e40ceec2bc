use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{authorization::Bearer, Authorization, HeaderMapExt};
use jsonwebtoken::{decode, errors::ErrorKind, TokenData};

use crate::{
    errors::AppError,
    state::{AppState, JwtKeys},
    structs::auth::{Claims, CurrentUser},
};

/// 驗證 bearer token, 把 `CurrentUser` 放進 request extensions
pub async fn authorize(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_token(req.headers())?;
    let token_data = decode_jwt(&token, &state.jwt_keys)?;

    let current_user = CurrentUser::from(token_data.claims);
    tracing::debug!("authorized {:?} as {:?}", current_user.name, current_user.role);

    req.extensions_mut().insert(current_user);
    Ok(next.run(req).await)
}

fn extract_token(headers: &HeaderMap) -> Result<String, AppError> {
    headers
        .typed_get::<Authorization<Bearer>>()
        .map(|auth| auth.token().to_string())
        .ok_or(AppError::Unauthorized(
            "Please add the JWT token to the header",
        ))
}

pub fn decode_jwt(token: &str, keys: &JwtKeys) -> Result<TokenData<Claims>, AppError> {
    decode::<Claims>(token, &keys.decoding, &keys.validation).map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AppError::Unauthorized("Token has expired"),
        _ => AppError::Unauthorized("Unable to decode token"),
    })
}
