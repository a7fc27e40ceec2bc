use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{de::Error, Deserialize, Deserializer};

use super::patch::Patch;

/// RFC 3339 之外也接受沒有時區的日期 / 日期時間, 一律當 UTC
pub fn parse(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| s.parse::<NaiveDateTime>().ok().map(|dt| dt.and_utc()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
                .ok()
                .map(|dt| dt.and_utc())
        })
        .or_else(|| {
            s.parse::<NaiveDate>()
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|dt| dt.and_utc())
        })
}

pub fn from_value(value: serde_json::Value) -> Result<DateTime<Utc>, String> {
    match value {
        serde_json::Value::String(s) => {
            parse(&s).ok_or_else(|| format!("`{s}` is not a valid timestamp"))
        }
        other => Err(format!("expected a timestamp string, got {other}")),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse(&s).ok_or_else(|| D::Error::custom(format!("`{s}` is not a valid timestamp")))
}

/// 搭配 `#[serde(default, deserialize_with = ...)]`, 缺席時是 `Patch::Absent`
pub fn deserialize_patch<'de, D>(deserializer: D) -> Result<Patch<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(Patch::Null),
        Some(s) => parse(&s)
            .map(Patch::Value)
            .ok_or_else(|| D::Error::custom(format!("`{s}` is not a valid timestamp"))),
    }
}
