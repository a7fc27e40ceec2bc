use uuid::Uuid;

use crate::{
    errors::AppError,
    repositories::Store,
    structs::shifts::{NewShift, Shift, UpdateShift},
};

const NOT_FOUND: &str = "Shift not found";

pub async fn create(store: &dyn Store, shift: NewShift) -> Result<Shift, AppError> {
    store
        .create_shift(shift)
        .await
        .map_err(AppError::internal("Failed to create shift."))
}

pub async fn list(store: &dyn Store) -> Result<Vec<Shift>, AppError> {
    store
        .find_shifts()
        .await
        .map_err(AppError::internal("Failed to fetch shifts"))
}

pub async fn get(store: &dyn Store, id: Uuid) -> Result<Shift, AppError> {
    store
        .find_shift(id)
        .await
        .map_err(AppError::internal("Failed to fetch shift"))?
        .ok_or(AppError::NotFound(NOT_FOUND))
}

/// 沒有擁有者檢查, 任何人都能改任何欄位
pub async fn update(store: &dyn Store, id: Uuid, body: UpdateShift) -> Result<Shift, AppError> {
    const CONTEXT: &str = "Failed to update shift";

    let mut shift = store
        .find_shift(id)
        .await
        .map_err(AppError::internal(CONTEXT))?
        .ok_or(AppError::NotFound(NOT_FOUND))?;

    body.apply(&mut shift)?;

    // 讀取後被刪掉也算找不到
    store
        .update_shift(&shift)
        .await
        .map_err(AppError::internal(CONTEXT))?
        .ok_or(AppError::NotFound(NOT_FOUND))
}

pub async fn delete(store: &dyn Store, id: Uuid) -> Result<Shift, AppError> {
    let deleted = store
        .delete_shift(id)
        .await
        .map_err(AppError::internal_bare("Failed to delete shift"))?
        .ok_or(AppError::NotFoundBare(NOT_FOUND))?;

    tracing::info!("shift {} deleted", deleted.id);
    Ok(deleted)
}
