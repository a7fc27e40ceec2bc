use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{patch::Patch, timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Denied,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Denied => "denied",
        }
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeaveStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(LeaveStatus::Pending),
            "approved" => Ok(LeaveStatus::Approved),
            "denied" => Ok(LeaveStatus::Denied),
            other => Err(format!("unknown leave status `{other}`")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: Uuid,
    pub person: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: LeaveStatus,
}

/// leave_requests 資料表的 row, status 以 text 儲存
#[derive(FromRow)]
pub struct DbLeaveRequest {
    pub id: Uuid,
    pub person: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub status: String,
}

impl TryFrom<DbLeaveRequest> for LeaveRequest {
    type Error = String;

    fn try_from(row: DbLeaveRequest) -> Result<Self, Self::Error> {
        Ok(LeaveRequest {
            id: row.id,
            person: row.person,
            start: row.start_at,
            end: row.end_at,
            status: row.status.parse()?,
        })
    }
}

/// POST /leave 的 body, person 與 status 一律由伺服器決定
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLeaveRequest {
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub start: DateTime<Utc>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub end: DateTime<Utc>,
}

/// 寫入 store 用的完整新資料
#[derive(Debug, Clone)]
pub struct NewLeaveRequest {
    pub person: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: LeaveStatus,
}

/// 欄位先保留原始 JSON, 依呼叫者角色只解析會用到的欄位
#[derive(Debug, Default, Deserialize)]
pub struct UpdateLeaveRequest {
    #[serde(default)]
    pub start: Patch<serde_json::Value>,
    #[serde(default)]
    pub end: Patch<serde_json::Value>,
    #[serde(default)]
    pub status: Patch<serde_json::Value>,
}
