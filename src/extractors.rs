use std::convert::Infallible;

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json, RequestExt,
};
use serde::de::DeserializeOwned;

use crate::{errors::AppError, structs::auth::CurrentUser};

/// `authorize` 放進來的呼叫者, 沒經過 middleware 時是 None
pub struct Caller(pub Option<CurrentUser>);

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Caller(parts.extensions.get::<CurrentUser>().cloned()))
    }
}

/// 解析失敗時回 400 `{message}` 的 Json
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned + Send + 'static,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        match req.extract::<Json<T>, _>().await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(err) => Err(AppError::Validation(err.body_text())),
        }
    }
}

pub struct AppPath<T>(pub T);

impl<S, T> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send + 'static,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(AppPath(value)),
            Err(err) => Err(AppError::Validation(err.body_text())),
        }
    }
}
