use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::{Map, Value};

use super::codes::{BusinessCode, ErrorCatalog};
use super::{detail_text, is_envelope, Envelope};

/// Keys lifted out of a keyed payload before it becomes `data`.
const STRIPPED_KEYS: [&str; 4] = ["success", "code", "message", "detail"];

/// Wraps handler payloads into the envelope.
#[derive(Debug, Clone)]
pub struct ResponseNormalizer {
    catalog: Arc<ErrorCatalog>,
}

impl ResponseNormalizer {
    pub fn new(catalog: Arc<ErrorCatalog>) -> Self {
        Self { catalog }
    }

    /// Normalize `payload` returned under `status`.
    ///
    /// A payload that already is a complete envelope comes back unchanged.
    pub fn normalize(&self, payload: Value, status: StatusCode) -> Value {
        if is_envelope(&payload) {
            return payload;
        }
        self.envelope_for(payload, status).into_value()
    }

    /// Build the envelope for a payload that is not one yet.
    pub fn envelope_for(&self, payload: Value, status: StatusCode) -> Envelope {
        let success = !self.catalog.is_failure(status);
        let code = payload_code(&payload).unwrap_or_else(|| self.catalog.code_for_status(status));
        let message = payload_message(&payload)
            .unwrap_or_else(|| self.catalog.message_for_status(status).to_string());

        Envelope {
            success,
            code,
            message,
            data: extract_data(payload),
        }
    }
}

fn payload_code(payload: &Value) -> Option<BusinessCode> {
    payload.get("code").and_then(Value::as_i64)
}

fn payload_message(payload: &Value) -> Option<String> {
    payload
        .get("message")
        .and_then(detail_text)
        .or_else(|| payload.get("detail").and_then(detail_text))
}

/// `data` for a payload: lists and paginated results as-is, other objects
/// without the envelope keys, scalars untouched.
fn extract_data(payload: Value) -> Value {
    match payload {
        Value::Object(obj) if is_paginated(&obj) => Value::Object(obj),
        Value::Object(obj) => Value::Object(
            obj.into_iter()
                .filter(|(k, _)| !STRIPPED_KEYS.contains(&k.as_str()))
                .collect::<Map<String, Value>>(),
        ),
        other => other,
    }
}

fn is_paginated(obj: &Map<String, Value>) -> bool {
    obj.contains_key("pagination") && obj.contains_key("results")
}
