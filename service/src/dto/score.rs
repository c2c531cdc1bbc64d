//! Scores come from hand-filled admin forms, so anything that is not a whole
//! number (or a string holding one) in the playable range of a nine is read
//! as "not recorded yet".

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub const MIN_NINE_SCORE: i32 = 1;
pub const MAX_NINE_SCORE: i32 = 99;

pub fn coerce_score(value: &Value) -> Option<i32> {
    let score = match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| {
                number
                    .as_f64()
                    .filter(|f| f.fract() == 0.0)
                    .map(|f| f as i64)
            })
            .and_then(|n| i32::try_from(n).ok()),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }?;
    (MIN_NINE_SCORE..=MAX_NINE_SCORE)
        .contains(&score)
        .then_some(score)
}

pub fn lenient_score<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(coerce_score))
}
