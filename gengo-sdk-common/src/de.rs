//! API返回的数值字段有时是字符串有时是数字（如`"credits": "0.05"`和`"credits": 0.05`），
//! 统一按字符串读取

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn value_to_string(v: Value) -> Option<String> {
    match v {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(deserializer)?;
    value_to_string(v).ok_or_else(|| serde::de::Error::custom("expected string or number, got null"))
}

/// 配合`#[serde(default)]`使用
pub fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(deserializer)?;
    Ok(value_to_string(v))
}
