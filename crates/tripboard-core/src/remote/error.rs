//! Typed error for failed backend calls.

use serde_json::Value;
use thiserror::Error;

/// Code the backend uses when a group's knowledge base has not been built.
pub const KNOWLEDGE_NOT_READY: &str = "KN_NOT_READY";

const DEFAULT_MESSAGE: &str = "Request failed with error";
const DEFAULT_DETAIL_MESSAGE: &str = "Request failed";

/// A failed backend call.
///
/// `status` is the HTTP status, or 0 when the request never produced a
/// response (connection refused, DNS failure, timeout).
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message} (status {status})")]
pub struct ApiError {
    pub status: u16,
    pub code: Option<String>,
    pub message: String,
    pub trace_id: Option<String>,
    pub details: Option<Value>,
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Fields recovered from whatever error body the backend sent.
#[derive(Debug, Default)]
struct ErrorPayload {
    code: Option<String>,
    message: Option<String>,
    trace_id: Option<String>,
    details: Option<Value>,
}

impl ErrorPayload {
    /// Accepts plain text, `{"detail": "..."}`, `{"detail": {...}}` and the
    /// flat `{code, message, trace_id, details}` shape.
    fn normalize(raw: &Value) -> Self {
        match raw {
            Value::Null => Self::default(),
            Value::String(text) => Self {
                message: non_empty(Some(text.as_str())),
                ..Self::default()
            },
            _ => match raw.get("detail") {
                Some(Value::String(text)) if !text.is_empty() => Self {
                    message: Some(text.clone()),
                    ..Self::default()
                },
                Some(detail @ (Value::Object(_) | Value::Array(_))) => Self {
                    code: string_field(detail, "code"),
                    message: string_field(detail, "message")
                        .or_else(|| string_field(detail, "detail"))
                        .or_else(|| Some(DEFAULT_DETAIL_MESSAGE.to_string())),
                    trace_id: string_field(detail, "trace_id"),
                    details: value_field(detail, "details"),
                },
                _ => Self {
                    code: string_field(raw, "code"),
                    message: string_field(raw, "message"),
                    trace_id: string_field(raw, "trace_id"),
                    details: value_field(raw, "details"),
                },
            },
        }
    }
}

fn non_empty(text: Option<&str>) -> Option<String> {
    text.filter(|s| !s.is_empty()).map(str::to_string)
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    non_empty(value.get(key).and_then(Value::as_str))
}

fn value_field(value: &Value, key: &str) -> Option<Value> {
    value.get(key).filter(|v| !v.is_null()).cloned()
}

impl ApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            code: None,
            message: message.into(),
            trace_id: None,
            details: None,
        }
    }

    /// Builds the error for a non-success response from its status and raw
    /// body text.
    pub fn from_response(status: u16, body: &str) -> Self {
        let data = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
        };

        let payload = ErrorPayload::normalize(&data);
        let message = payload.message.unwrap_or_else(|| match &data {
            Value::String(text) => text.clone(),
            _ => DEFAULT_MESSAGE.to_string(),
        });

        Self {
            status,
            code: payload.code,
            message,
            trace_id: payload.trace_id,
            details: payload.details,
        }
    }

    /// A request that never produced a response.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(0, message)
    }

    pub fn is_transport(&self) -> bool {
        self.status == 0
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// True when the group must be processed before plans can be generated.
    pub fn is_knowledge_not_ready(&self) -> bool {
        self.code.as_deref() == Some(KNOWLEDGE_NOT_READY)
    }
}
