use axum::{
    body::{to_bytes, Body, Bytes},
    extract::{Request, State},
    http::{header, response::Parts, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use serde_json::Value;

use crate::envelope::{codes, is_envelope, Envelope};
use crate::error::ApiError;
use crate::state::AppState;

/// Response boundary: every body leaving the router is rewritten into the
/// envelope. Transport status is left untouched.
pub async fn envelope_middleware(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    wrap_response(&state, response).await
}

pub async fn wrap_response(state: &AppState, response: Response) -> Response {
    let catalog = state.translator.catalog();
    let status = response.status();

    // Statuses that cannot carry a body
    if status.is_informational() || status == StatusCode::NO_CONTENT || status == StatusCode::NOT_MODIFIED {
        return response;
    }

    let (mut parts, body) = response.into_parts();

    if let Some(error) = parts.extensions.remove::<ApiError>() {
        let envelope = state.translator.translate(&error);
        return render(parts, &envelope, &catalog.server_error);
    }

    let is_json = is_json(&parts);
    let failed = catalog.is_failure(status);

    // Non-JSON success bodies (downloads, docs) are not ours to rewrite
    if !failed && !is_json && parts.headers.contains_key(header::CONTENT_TYPE) {
        return Response::from_parts(parts, body);
    }

    let bytes = match to_bytes(body, state.config.api.max_response_size_bytes).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("Failed to buffer response body for enveloping: {}", e);
            let envelope = state
                .translator
                .translate_status(StatusCode::INTERNAL_SERVER_ERROR, None);
            parts.status = StatusCode::INTERNAL_SERVER_ERROR;
            return render(parts, &envelope, &catalog.server_error);
        }
    };

    let payload = if bytes.is_empty() {
        None
    } else if is_json {
        match serde_json::from_slice::<Value>(&bytes) {
            Ok(value) => Some(value),
            Err(e) if failed => {
                tracing::error!("Error response carried malformed JSON ({}): {}", status, e);
                Some(Value::String(String::from_utf8_lossy(&bytes).into_owned()))
            }
            Err(e) => {
                tracing::error!("Handler produced malformed JSON ({}): {}", status, e);
                return Response::from_parts(parts, Body::from(bytes));
            }
        }
    } else {
        Some(Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    let envelope = if failed && has_fixed_code(status) {
        state.translator.translate_status(status, payload.as_ref())
    } else if failed {
        match payload {
            Some(value) if is_envelope(&value) && value["success"] == Value::Bool(false) => {
                return Response::from_parts(parts, Body::from(bytes));
            }
            Some(value) if is_envelope(&value) => as_failure(value),
            // Already handled upstream: it carries its own business code
            Some(value) if value.get("code").is_some_and(|c| c.as_i64().is_some()) => {
                state.normalizer.envelope_for(value, status)
            }
            other => state.translator.translate_status(status, other.as_ref()),
        }
    } else {
        match payload {
            Some(value) if is_envelope(&value) => return Response::from_parts(parts, Body::from(bytes)),
            other => state.normalizer.envelope_for(other.unwrap_or(Value::Null), status),
        }
    };

    if envelope.code == codes::SERVER_ERROR {
        tracing::error!("Enveloped server error response ({})", status);
    }

    render(parts, &envelope, &catalog.server_error)
}

/// 401, 403 and 404 always carry their table code and message.
fn has_fixed_code(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND
    )
}

/// An envelope returned under a failing status that claims success.
fn as_failure(value: Value) -> Envelope {
    let code = value["code"].as_i64().unwrap_or(codes::SERVER_ERROR);
    let message = value["message"].as_str().unwrap_or_default().to_string();
    let data = match value {
        Value::Object(mut obj) => obj.remove("data").unwrap_or(Value::Null),
        _ => Value::Null,
    };
    Envelope::failure(code, message, data)
}

fn is_json(parts: &Parts) -> bool {
    parts
        .headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| {
            let mime = ct.split(';').next().unwrap_or("").trim();
            mime == "application/json" || mime.ends_with("+json")
        })
}

fn server_error_body(message: &str) -> Bytes {
    let envelope = Envelope::failure(codes::SERVER_ERROR, message.to_string(), Value::Null);
    Bytes::from(envelope.into_value().to_string())
}

fn render(mut parts: Parts, envelope: &Envelope, fallback_message: &str) -> Response {
    let bytes = match serde_json::to_vec(envelope) {
        Ok(bytes) => Bytes::from(bytes),
        Err(e) => {
            tracing::error!("Failed to serialize envelope: {}", e);
            parts.status = StatusCode::INTERNAL_SERVER_ERROR;
            server_error_body(fallback_message)
        }
    };

    parts.headers.remove(header::CONTENT_LENGTH);
    parts
        .headers
        .insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Response::from_parts(parts, Body::from(bytes))
}
