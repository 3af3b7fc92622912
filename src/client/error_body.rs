//! Error payload shapes returned by the backend
//!
//! The backend reports failures as `{"detail": "..."}`, as a validation list
//! `{"detail": [{"msg": "..."}, ...]}`, or as `{"message": "..."}`.

use serde_json::Value;

/// A decoded error body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorBody {
    /// `detail` is a plain string
    Detail(String),
    /// `detail` is a list of validation entries
    ValidationErrors(Vec<String>),
    /// Only a `message` field
    Message(String),
    /// Nothing readable (no body, bad JSON or unknown shape)
    Empty,
}

impl ErrorBody {
    /// Classify a parsed payload. `Value::Null` stands for an absent payload.
    pub fn from_payload(payload: &Value) -> Self {
        match payload.get("detail") {
            Some(Value::String(detail)) if !detail.is_empty() => {
                return ErrorBody::Detail(detail.clone());
            }
            Some(Value::Array(entries)) if !entries.is_empty() => {
                return ErrorBody::ValidationErrors(entries.iter().map(entry_message).collect());
            }
            _ => {}
        }

        match payload.get("message") {
            Some(Value::String(message)) if !message.is_empty() => {
                ErrorBody::Message(message.clone())
            }
            _ => ErrorBody::Empty,
        }
    }

    /// Human-readable message, if the body carried one
    pub fn message(&self) -> Option<String> {
        match self {
            ErrorBody::Detail(detail) => Some(detail.clone()),
            ErrorBody::ValidationErrors(entries) => Some(entries.join(", ")),
            ErrorBody::Message(message) => Some(message.clone()),
            ErrorBody::Empty => None,
        }
    }

    /// Message, or `fallback` when the body carried none
    pub fn message_or(&self, fallback: &str) -> String {
        self.message().unwrap_or_else(|| fallback.to_string())
    }
}

/// Text of one validation entry: `msg`, then `message`, then its string form
fn entry_message(entry: &Value) -> String {
    if let Some(msg) = entry.get("msg").and_then(Value::as_str) {
        return msg.to_string();
    }
    if let Some(message) = entry.get("message").and_then(Value::as_str) {
        return message.to_string();
    }
    match entry {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
