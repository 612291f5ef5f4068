//! Response classification: the single error taxonomy of the adapter.
//!
//! Every backend answer is folded into [`ApiResponse`] here and nowhere else.
//! A status of 400 or above is always an [`ApiFailure`], and so is any JSON
//! object carrying an `"error"` key whatever its status. Every other body is
//! a success handed through untouched.

use serde_json::{Map, Value, json};
use std::fmt;

/// Characters of raw body kept in a synthesized failure message.
pub const ERROR_BODY_PREVIEW_CHARS: usize = 200;

/// A backend-reported failure.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiFailure {
    pub message: String,
    /// HTTP status that produced the failure.
    pub status: Option<u16>,
    /// The full error object. Always contains an `"error"` key; structured
    /// backend errors keep every extra field they were sent with.
    pub payload: Value,
}

impl ApiFailure {
    pub fn new(message: impl Into<String>, status: Option<u16>) -> Self {
        let message = message.into();
        Self {
            payload: json!({ "error": message }),
            message,
            status,
        }
    }

    /// Build from a backend object known to contain `"error"`.
    fn from_error_object(object: Map<String, Value>, status: u16) -> Self {
        let message = match object.get("error") {
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };
        Self {
            message,
            status: Some(status),
            payload: Value::Object(object),
        }
    }

    /// Extra field sent alongside `"error"`, if any.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Normalized result of one backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Success(Value),
    Failure(ApiFailure),
}

impl ApiResponse {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    pub fn failure(&self) -> Option<&ApiFailure> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    pub fn into_result(self) -> Result<Value, ApiFailure> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(failure) => Err(failure),
        }
    }
}

/// Free-function form of [`ApiResponse::is_error`].
pub fn is_error(response: &ApiResponse) -> bool {
    response.is_error()
}

/// Classify a raw backend answer.
///
/// Below 400 the body must be JSON (an empty body reads as `null`); a parse
/// failure there is a contract error returned to the caller as `Err`. An
/// object with an `"error"` key is a failure at any status. From 400 up the
/// result is always `Ok(Failure)`.
pub fn classify(status: u16, body: &[u8]) -> Result<ApiResponse, serde_json::Error> {
    if status < 400 {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(ApiResponse::Success(Value::Null));
        }
        return match serde_json::from_slice(body)? {
            Value::Object(object) if object.contains_key("error") => Ok(ApiResponse::Failure(
                ApiFailure::from_error_object(object, status),
            )),
            value => Ok(ApiResponse::Success(value)),
        };
    }

    if let Ok(Value::Object(object)) = serde_json::from_slice::<Value>(body)
        && object.contains_key("error")
    {
        return Ok(ApiResponse::Failure(ApiFailure::from_error_object(
            object, status,
        )));
    }

    let raw = String::from_utf8_lossy(body);
    let preview: String = raw.chars().take(ERROR_BODY_PREVIEW_CHARS).collect();
    Ok(ApiResponse::Failure(ApiFailure::new(
        format!("HTTP {status}: {preview}"),
        Some(status),
    )))
}
