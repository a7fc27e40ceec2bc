use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::{
    repositories::{LeaveRequestStore, ShiftStore, StoreError},
    structs::{
        leave_requests::{LeaveRequest, NewLeaveRequest},
        shifts::{NewShift, Shift},
    },
};

pub fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
}

fn db_error() -> StoreError {
    StoreError::Corrupt("DB Error".to_string())
}

/// 每個操作都失敗的 store
pub struct FailingStore;

#[async_trait]
impl ShiftStore for FailingStore {
    async fn create_shift(&self, _shift: NewShift) -> Result<Shift, StoreError> {
        Err(db_error())
    }

    async fn find_shifts(&self) -> Result<Vec<Shift>, StoreError> {
        Err(db_error())
    }

    async fn find_shift(&self, _id: Uuid) -> Result<Option<Shift>, StoreError> {
        Err(db_error())
    }

    async fn update_shift(&self, _shift: &Shift) -> Result<Option<Shift>, StoreError> {
        Err(db_error())
    }

    async fn delete_shift(&self, _id: Uuid) -> Result<Option<Shift>, StoreError> {
        Err(db_error())
    }
}

#[async_trait]
impl LeaveRequestStore for FailingStore {
    async fn create_leave_request(
        &self,
        _request: NewLeaveRequest,
    ) -> Result<LeaveRequest, StoreError> {
        Err(db_error())
    }

    async fn find_leave_requests(&self) -> Result<Vec<LeaveRequest>, StoreError> {
        Err(db_error())
    }

    async fn find_leave_request(&self, _id: Uuid) -> Result<Option<LeaveRequest>, StoreError> {
        Err(db_error())
    }

    async fn update_leave_request(
        &self,
        _request: &LeaveRequest,
    ) -> Result<Option<LeaveRequest>, StoreError> {
        Err(db_error())
    }
}
