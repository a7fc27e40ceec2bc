use std::fmt;

use serde::{Deserialize, Deserializer};

use crate::errors::AppError;

/// 更新欄位的三種狀態: 沒帶、明確給 null、給值
///
/// 搭配 `#[serde(default)]` 使用, 欄位缺席時才會是 `Absent`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Absent,
    Null,
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Absent
    }
}

impl<T> Patch<T> {
    /// 套用到必填欄位, null 不能清空必填欄位
    pub fn apply_required(self, field: &'static str, target: &mut T) -> Result<(), AppError> {
        match self {
            Patch::Absent => Ok(()),
            Patch::Null => Err(AppError::Validation(format!("{field} cannot be cleared"))),
            Patch::Value(value) => {
                *target = value;
                Ok(())
            }
        }
    }

    pub fn check_required(&self, field: &'static str) -> Result<(), AppError> {
        match self {
            Patch::Null => Err(AppError::Validation(format!("{field} cannot be cleared"))),
            _ => Ok(()),
        }
    }
}

impl Patch<serde_json::Value> {
    /// 把原始 JSON 轉成欄位型別, 轉不過就是 400
    pub fn decode<T, E, F>(self, field: &'static str, decode: F) -> Result<Patch<T>, AppError>
    where
        F: FnOnce(serde_json::Value) -> Result<T, E>,
        E: fmt::Display,
    {
        match self {
            Patch::Absent => Ok(Patch::Absent),
            Patch::Null => Ok(Patch::Null),
            Patch::Value(value) => decode(value)
                .map(Patch::Value)
                .map_err(|e| AppError::Validation(format!("invalid {field}: {e}"))),
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(|value| match value {
            Some(value) => Patch::Value(value),
            None => Patch::Null,
        })
    }
}
