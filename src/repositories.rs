pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::structs::{
    leave_requests::{LeaveRequest, NewLeaveRequest},
    shifts::{NewShift, Shift},
};

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error("corrupt record: {0}")]
    Corrupt(String),
}

#[async_trait]
pub trait ShiftStore: Send + Sync {
    async fn create_shift(&self, shift: NewShift) -> Result<Shift, StoreError>;

    async fn find_shifts(&self) -> Result<Vec<Shift>, StoreError>;

    async fn find_shift(&self, id: Uuid) -> Result<Option<Shift>, StoreError>;

    // 找不到時回傳 None
    async fn update_shift(&self, shift: &Shift) -> Result<Option<Shift>, StoreError>;

    // 回傳被刪除的資料, 找不到時回傳 None
    async fn delete_shift(&self, id: Uuid) -> Result<Option<Shift>, StoreError>;
}

#[async_trait]
pub trait LeaveRequestStore: Send + Sync {
    async fn create_leave_request(
        &self,
        request: NewLeaveRequest,
    ) -> Result<LeaveRequest, StoreError>;

    async fn find_leave_requests(&self) -> Result<Vec<LeaveRequest>, StoreError>;

    async fn find_leave_request(&self, id: Uuid) -> Result<Option<LeaveRequest>, StoreError>;

    async fn update_leave_request(
        &self,
        request: &LeaveRequest,
    ) -> Result<Option<LeaveRequest>, StoreError>;
}

/// 注入到 handlers 的 record store
pub trait Store: ShiftStore + LeaveRequestStore {}

impl<T> Store for T where T: ShiftStore + LeaveRequestStore {}
