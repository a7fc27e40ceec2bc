use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{LeaveRequestStore, ShiftStore, StoreError};
use crate::structs::{
    leave_requests::{LeaveRequest, NewLeaveRequest},
    shifts::{NewShift, Shift},
};

/// 沒有設定 DATABASE_URL 時使用, 重啟後資料就不見了
#[derive(Default)]
pub struct MemoryStore {
    shifts: RwLock<Vec<Shift>>,
    leave_requests: RwLock<Vec<LeaveRequest>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShiftStore for MemoryStore {
    async fn create_shift(&self, shift: NewShift) -> Result<Shift, StoreError> {
        let shift = Shift {
            id: Uuid::new_v4(),
            person: shift.person,
            start: shift.start,
            end: shift.end,
        };
        self.shifts.write().await.push(shift.clone());
        Ok(shift)
    }

    async fn find_shifts(&self) -> Result<Vec<Shift>, StoreError> {
        Ok(self.shifts.read().await.clone())
    }

    async fn find_shift(&self, id: Uuid) -> Result<Option<Shift>, StoreError> {
        Ok(self.shifts.read().await.iter().find(|s| s.id == id).cloned())
    }

    async fn update_shift(&self, shift: &Shift) -> Result<Option<Shift>, StoreError> {
        let mut shifts = self.shifts.write().await;
        Ok(shifts.iter_mut().find(|s| s.id == shift.id).map(|stored| {
            *stored = shift.clone();
            stored.clone()
        }))
    }

    async fn delete_shift(&self, id: Uuid) -> Result<Option<Shift>, StoreError> {
        let mut shifts = self.shifts.write().await;
        Ok(shifts
            .iter()
            .position(|s| s.id == id)
            .map(|index| shifts.remove(index)))
    }
}

#[async_trait]
impl LeaveRequestStore for MemoryStore {
    async fn create_leave_request(
        &self,
        request: NewLeaveRequest,
    ) -> Result<LeaveRequest, StoreError> {
        let request = LeaveRequest {
            id: Uuid::new_v4(),
            person: request.person,
            start: request.start,
            end: request.end,
            status: request.status,
        };
        self.leave_requests.write().await.push(request.clone());
        Ok(request)
    }

    async fn find_leave_requests(&self) -> Result<Vec<LeaveRequest>, StoreError> {
        Ok(self.leave_requests.read().await.clone())
    }

    async fn find_leave_request(&self, id: Uuid) -> Result<Option<LeaveRequest>, StoreError> {
        Ok(self
            .leave_requests
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn update_leave_request(
        &self,
        request: &LeaveRequest,
    ) -> Result<Option<LeaveRequest>, StoreError> {
        let mut requests = self.leave_requests.write().await;
        Ok(requests.iter_mut().find(|r| r.id == request.id).map(|stored| {
            *stored = request.clone();
            stored.clone()
        }))
    }
}
