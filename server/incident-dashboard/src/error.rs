//! Structured error types for the incident dashboard.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
  /// A value was rejected by a field-level rule (blank text, unknown severity).
  #[error("validation: {field}: {reason}")]
  Validation { field: String, reason: String },

  /// A selector or field name did not match any known option.
  #[error("parse: {0}")]
  Parse(String),

  #[error("env: {var}: {reason}")]
  Env { var: String, reason: String },

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),

  #[error("io: {0}")]
  Io(#[from] std::io::Error),
}

impl DashboardError {
  pub fn validation(field: &str, reason: &str) -> Self {
    Self::Validation {
      field: field.to_string(),
      reason: reason.to_string(),
    }
  }

  pub fn parse(msg: impl Into<String>) -> Self {
    Self::Parse(msg.into())
  }

  pub fn env(var: &str, reason: impl Into<String>) -> Self {
    Self::Env {
      var: var.to_string(),
      reason: reason.into(),
    }
  }

  /// Name of the offending field or variable, when the error has one.
  pub fn field(&self) -> Option<&str> {
    match self {
      Self::Validation { field, .. } => Some(field),
      Self::Env { var, .. } => Some(var),
      Self::Parse(_) | Self::Json(_) | Self::Io(_) => None,
    }
  }
}
