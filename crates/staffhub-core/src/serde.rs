//! Lenient deserializers for the company-hub API's loosely-typed fields.
//!
//! Older deployments of the API serialize numeric IDs inconsistently: some
//! endpoints emit JSON numbers, others emit the same values as numeric
//! strings (`"42"`). The typed ID newtypes route their deserialization
//! through this helper so every wire shape tolerates both, list elements
//! included.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    String(String),
}

/// Deserializes an ID that may arrive as a JSON number or a numeric string.
pub fn deserialize_lenient_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s.trim().parse::<i64>().map_err(serde::de::Error::custom),
    }
}
