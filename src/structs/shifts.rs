use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{patch::Patch, timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub id: Uuid,
    pub person: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// shifts 資料表的 row, `end` 是 SQL 保留字所以欄位叫 `end_at`
#[derive(FromRow)]
pub struct DbShift {
    pub id: Uuid,
    pub person: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
}

impl From<DbShift> for Shift {
    fn from(row: DbShift) -> Self {
        Shift {
            id: row.id,
            person: row.person,
            start: row.start_at,
            end: row.end_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewShift {
    pub person: String,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub start: DateTime<Utc>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub end: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateShift {
    #[serde(default)]
    pub person: Patch<String>,
    #[serde(default, deserialize_with = "timestamp::deserialize_patch")]
    pub start: Patch<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_patch")]
    pub end: Patch<DateTime<Utc>>,
}

impl UpdateShift {
    /// 有帶的欄位覆蓋, 沒帶的保留原值
    pub fn apply(self, shift: &mut Shift) -> Result<(), crate::errors::AppError> {
        self.person.check_required("person")?;
        self.start.check_required("start")?;
        self.end.check_required("end")?;

        self.person.apply_required("person", &mut shift.person)?;
        self.start.apply_required("start", &mut shift.start)?;
        self.end.apply_required("end", &mut shift.end)?;
        Ok(())
    }
}
