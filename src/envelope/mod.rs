//! Standardized response envelope.
//!
//! Every body leaving the API has the shape
//! `{"success": bool, "code": int, "message": str, "data": any}`.

pub mod codes;
pub mod normalizer;
pub mod translator;

pub use codes::{BusinessCode, ErrorCatalog};
pub use normalizer::ResponseNormalizer;
pub use translator::ErrorTranslator;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level keys of an envelope, in wire order.
pub const ENVELOPE_KEYS: [&str; 4] = ["success", "code", "message", "data"];

/// The single wire-level response shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub success: bool,
    pub code: BusinessCode,
    pub message: String,
    pub data: Value,
}

impl Envelope {
    pub fn success(code: BusinessCode, message: impl Into<String>, data: Value) -> Self {
        Self {
            success: true,
            code,
            message: message.into(),
            data,
        }
    }

    pub fn failure(code: BusinessCode, message: impl Into<String>, data: Value) -> Self {
        Self {
            success: false,
            code,
            message: message.into(),
            data,
        }
    }

    /// Convert into a JSON object with keys in wire order.
    pub fn into_value(self) -> Value {
        let mut obj = Map::new();
        obj.insert("success".into(), Value::Bool(self.success));
        obj.insert("code".into(), Value::from(self.code));
        obj.insert("message".into(), Value::String(self.message));
        obj.insert("data".into(), self.data);
        Value::Object(obj)
    }
}

/// Structural check: an object with exactly the four envelope keys, each of
/// the expected JSON type (`data` may be anything).
pub fn is_envelope(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };

    obj.len() == ENVELOPE_KEYS.len()
        && obj.get("success").is_some_and(Value::is_boolean)
        && obj.get("code").is_some_and(|c| c.as_i64().is_some())
        && obj.get("message").is_some_and(Value::is_string)
        && obj.contains_key("data")
}

/// Human-readable text out of an error detail payload.
///
/// Strings are used as-is, lists yield their first entry and objects prefer
/// `detail`, then `message`, then their first value. Empty text counts as
/// absent.
pub fn detail_text(detail: &Value) -> Option<String> {
    match detail {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Array(items) => items.iter().find_map(detail_text),
        Value::Object(obj) => obj
            .get("detail")
            .and_then(detail_text)
            .or_else(|| obj.get("message").and_then(detail_text))
            .or_else(|| obj.values().find_map(detail_text)),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(_) | Value::Null => None,
    }
}
