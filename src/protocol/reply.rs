use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::{Map, Value};

use crate::error::StoreError;

/// Outcome of a command, independent of how it is written to the wire
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
  /// Plain text success message
  Text(String),
  /// A single entry rendered as a JSON object
  Entry { key: String, value: String },
  /// Store error, reported to the client
  Error(StoreError),
}

impl Reply {
  /// Create a plain text reply
  pub fn text(msg: impl Into<String>) -> Self {
    Reply::Text(msg.into())
  }

  /// HTTP status for this reply
  pub fn status(&self) -> StatusCode {
    match self {
      Reply::Text(_) | Reply::Entry { .. } => StatusCode::OK,
      Reply::Error(StoreError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
      Reply::Error(StoreError::NotFound) => StatusCode::NOT_FOUND,
    }
  }

  /// Response body text
  pub fn body(&self) -> String {
    match self {
      Reply::Text(msg) => msg.clone(),
      Reply::Entry { key, value } => {
        let mut object = Map::new();
        object.insert(key.clone(), Value::String(value.clone()));
        Value::Object(object).to_string()
      }
      Reply::Error(e) => e.to_string(),
    }
  }
}

impl From<StoreError> for Reply {
  fn from(e: StoreError) -> Self {
    Reply::Error(e)
  }
}

impl IntoResponse for Reply {
  fn into_response(self) -> Response {
    let status = self.status();
    let body = self.body();
    match self {
      Reply::Entry { .. } => (status, [(header::CONTENT_TYPE, "application/json")], body).into_response(),
      _ => (status, body).into_response(),
    }
  }
}
