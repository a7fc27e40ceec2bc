use std::time::Duration;

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, Pool, Postgres};
use uuid::Uuid;

use super::{LeaveRequestStore, ShiftStore, StoreError};
use crate::structs::{
    leave_requests::{DbLeaveRequest, LeaveRequest, NewLeaveRequest},
    shifts::{DbShift, NewShift, Shift},
};

#[derive(Clone)]
pub struct PgStore {
    pool: Pool<Postgres>,
}

impl PgStore {
    pub async fn connect(db_uri: &str, max_connections: u32) -> Result<Self, StoreError> {
        // set up connection pool
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .connect(db_uri)
            .await?;

        Ok(PgStore { pool })
    }

    pub fn get_pool(&self) -> &Pool<Postgres> {
        &self.pool
    }

    /// 建立資料表
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
                CREATE TABLE IF NOT EXISTS shifts (
                    id UUID PRIMARY KEY,
                    person TEXT NOT NULL,
                    start_at TIMESTAMPTZ NOT NULL,
                    end_at TIMESTAMPTZ NOT NULL,
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );
            "#,
        )
        .execute(self.get_pool())
        .await?;

        sqlx::query(
            r#"
                CREATE TABLE IF NOT EXISTS leave_requests (
                    id UUID PRIMARY KEY,
                    person TEXT NOT NULL,
                    start_at TIMESTAMPTZ NOT NULL,
                    end_at TIMESTAMPTZ NOT NULL,
                    status TEXT NOT NULL DEFAULT 'pending'
                        CHECK (status IN ('pending', 'approved', 'denied')),
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );
            "#,
        )
        .execute(self.get_pool())
        .await?;

        Ok(())
    }
}

fn to_leave_request(row: DbLeaveRequest) -> Result<LeaveRequest, StoreError> {
    LeaveRequest::try_from(row).map_err(StoreError::Corrupt)
}

#[async_trait]
impl ShiftStore for PgStore {
    async fn create_shift(&self, shift: NewShift) -> Result<Shift, StoreError> {
        let row = sqlx::query_as::<_, DbShift>(
            r#"
                INSERT INTO shifts (id, person, start_at, end_at)
                VALUES ($1, $2, $3, $4)
                RETURNING id, person, start_at, end_at;
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(shift.person)
        .bind(shift.start)
        .bind(shift.end)
        .fetch_one(self.get_pool())
        .await?;

        Ok(row.into())
    }

    async fn find_shifts(&self) -> Result<Vec<Shift>, StoreError> {
        let rows = sqlx::query_as::<_, DbShift>(
            r#"
                SELECT id, person, start_at, end_at
                FROM shifts
                ORDER BY created_at;
            "#,
        )
        .fetch_all(self.get_pool())
        .await?;

        Ok(rows.into_iter().map(Shift::from).collect())
    }

    async fn find_shift(&self, id: Uuid) -> Result<Option<Shift>, StoreError> {
        let row = sqlx::query_as::<_, DbShift>(
            r#"
                SELECT id, person, start_at, end_at
                FROM shifts
                WHERE id = $1;
            "#,
        )
        .bind(id)
        .fetch_optional(self.get_pool())
        .await?;

        Ok(row.map(Shift::from))
    }

    async fn update_shift(&self, shift: &Shift) -> Result<Option<Shift>, StoreError> {
        let row = sqlx::query_as::<_, DbShift>(
            r#"
                UPDATE shifts
                SET person = $2, start_at = $3, end_at = $4
                WHERE id = $1
                RETURNING id, person, start_at, end_at;
            "#,
        )
        .bind(shift.id)
        .bind(&shift.person)
        .bind(shift.start)
        .bind(shift.end)
        .fetch_optional(self.get_pool())
        .await?;

        Ok(row.map(Shift::from))
    }

    async fn delete_shift(&self, id: Uuid) -> Result<Option<Shift>, StoreError> {
        let row = sqlx::query_as::<_, DbShift>(
            r#"
                DELETE FROM shifts
                WHERE id = $1
                RETURNING id, person, start_at, end_at;
            "#,
        )
        .bind(id)
        .fetch_optional(self.get_pool())
        .await?;

        Ok(row.map(Shift::from))
    }
}

#[async_trait]
impl LeaveRequestStore for PgStore {
    async fn create_leave_request(
        &self,
        request: NewLeaveRequest,
    ) -> Result<LeaveRequest, StoreError> {
        let row = sqlx::query_as::<_, DbLeaveRequest>(
            r#"
                INSERT INTO leave_requests (id, person, start_at, end_at, status)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, person, start_at, end_at, status;
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.person)
        .bind(request.start)
        .bind(request.end)
        .bind(request.status.as_str())
        .fetch_one(self.get_pool())
        .await?;

        to_leave_request(row)
    }

    async fn find_leave_requests(&self) -> Result<Vec<LeaveRequest>, StoreError> {
        sqlx::query_as::<_, DbLeaveRequest>(
            r#"
                SELECT id, person, start_at, end_at, status
                FROM leave_requests
                ORDER BY created_at;
            "#,
        )
        .fetch_all(self.get_pool())
        .await?
        .into_iter()
        .map(to_leave_request)
        .collect()
    }

    async fn find_leave_request(&self, id: Uuid) -> Result<Option<LeaveRequest>, StoreError> {
        sqlx::query_as::<_, DbLeaveRequest>(
            r#"
                SELECT id, person, start_at, end_at, status
                FROM leave_requests
                WHERE id = $1;
            "#,
        )
        .bind(id)
        .fetch_optional(self.get_pool())
        .await?
        .map(to_leave_request)
        .transpose()
    }

    async fn update_leave_request(
        &self,
        request: &LeaveRequest,
    ) -> Result<Option<LeaveRequest>, StoreError> {
        sqlx::query_as::<_, DbLeaveRequest>(
            r#"
                UPDATE leave_requests
                SET start_at = $2, end_at = $3, status = $4
                WHERE id = $1
                RETURNING id, person, start_at, end_at, status;
            "#,
        )
        .bind(request.id)
        .bind(request.start)
        .bind(request.end)
        .bind(request.status.as_str())
        .fetch_optional(self.get_pool())
        .await?
        .map(to_leave_request)
        .transpose()
    }
}
