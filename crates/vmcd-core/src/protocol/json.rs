//! Lenient JSON decoding for terminal payloads.
//!
//! Deployed terminals are looser than strict JSON consumers expect:
//! - string values may carry non-UTF-8 bytes (GBK / Latin-1 firmware);
//!   those are replaced with U+FFFD instead of failing the request.
//! - object keys are matched case-insensitively (`"amount"`, `"Vmc_No"`);
//!   when two keys fold to the same name, the later one wins.
//! - `null` for a scalar field means "leave it at its zero value"
//!   (see [`null_as_default`]).

use std::borrow::Cow;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Frame bytes as text. Borrowed when the bytes are already valid UTF-8.
pub fn frame_text(json: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(json)
}

/// Decode `json` into `T` after lossy UTF-8 conversion and key folding.
///
/// Field names of `T` must be lowercase (or carry a lowercase alias).
pub fn decode_lenient<T: DeserializeOwned>(json: &[u8]) -> serde_json::Result<T> {
    let value: Value = serde_json::from_str(&frame_text(json))?;
    serde_json::from_value(fold_keys(value))
}

/// Lowercase the keys of a top-level object. Nested values are untouched.
fn fold_keys(value: Value) -> Value {
    match value {
        Value::Object(obj) => {
            let mut folded = Map::with_capacity(obj.len());
            for (k, v) in obj {
                folded.insert(k.to_lowercase(), v);
            }
            Value::Object(folded)
        }
        other => other,
    }
}

/// `deserialize_with` helper: JSON `null` becomes `T::default()`.
pub fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}
