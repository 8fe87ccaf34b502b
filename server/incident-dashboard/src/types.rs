//! Core types for the incident dashboard (JSON contracts + internal models).

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::DashboardError;

// ---------------------------------------------------------------------------
// Inbound types (JSON contract: what the rendering layer sends)
// ---------------------------------------------------------------------------

/// One inbound UI event line from stdin. Unknown fields are silently ignored.
///
/// Selector values stay as raw text here; `normalize` turns them into typed
/// [`UiEvent`]s.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InboundEvent {
  FilterChange { value: String },
  SortChange { value: String },
  ToggleExpand { id: u64 },
  DraftFieldChange { field: String, value: String },
  Submit,
}

// ---------------------------------------------------------------------------
// Severity enum (normalized)
// ---------------------------------------------------------------------------

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum Severity {
  #[default]
  Low,
  Medium,
  High,
}

impl Severity {
  pub const ALL: [Severity; 3] = [Self::Low, Self::Medium, Self::High];

  pub fn from_str_loose(s: &str) -> Option<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "low" => Some(Self::Low),
      "medium" => Some(Self::Medium),
      "high" => Some(Self::High),
      _ => None,
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Low => "Low",
      Self::Medium => "Medium",
      Self::High => "High",
    }
  }
}

impl fmt::Display for Severity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ---------------------------------------------------------------------------
// Selectors
// ---------------------------------------------------------------------------

/// Severity filter selector: everything, or one severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SeverityFilter {
  #[default]
  All,
  Only(Severity),
}

impl SeverityFilter {
  pub fn from_str_loose(s: &str) -> Option<Self> {
    if s.trim().eq_ignore_ascii_case("all") {
      return Some(Self::All);
    }
    Severity::from_str_loose(s).map(Self::Only)
  }

  pub fn matches(self, severity: Severity) -> bool {
    match self {
      Self::All => true,
      Self::Only(wanted) => wanted == severity,
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::All => "All",
      Self::Only(s) => s.as_str(),
    }
  }
}

impl Serialize for SeverityFilter {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(self.as_str())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum SortOrder {
  #[default]
  Newest,
  Oldest,
}

impl SortOrder {
  /// Accepts the bare names and the widget labels ("Newest First").
  pub fn from_str_loose(s: &str) -> Option<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "newest" | "newest first" => Some(Self::Newest),
      "oldest" | "oldest first" => Some(Self::Oldest),
      _ => None,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
  Title,
  Description,
  Severity,
}

impl DraftField {
  pub fn from_str_loose(s: &str) -> Option<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "title" => Some(Self::Title),
      "description" => Some(Self::Description),
      "severity" => Some(Self::Severity),
      _ => None,
    }
  }
}

// ---------------------------------------------------------------------------
// Internal normalized types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IncidentId(pub u64);

impl fmt::Display for IncidentId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// A reported safety incident. Never edited after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
  pub id: IncidentId,
  pub title: String,
  pub description: String,
  pub severity: Severity,
  pub reported_at: DateTime<Utc>,
}

/// Canonical UI event after normalization + validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
  FilterChanged(SeverityFilter),
  SortChanged(SortOrder),
  ToggleExpand(IncidentId),
  DraftFieldChanged { field: DraftField, value: String },
  Submit,
}

// ---------------------------------------------------------------------------
// Output types (JSON contract: what we emit)
// ---------------------------------------------------------------------------

/// One row of the derived view, ready to render.
#[derive(Debug, Clone, Serialize)]
pub struct IncidentRow {
  pub id: IncidentId,
  pub title: String,
  pub severity: Severity,
  pub reported_at: String,
  pub reported_at_display: String,
  pub expanded: bool,
  pub toggle_label: &'static str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftView {
  pub title: String,
  pub description: String,
  pub severity: String,
}

/// Everything the rendering layer needs after one event.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
  pub filter: SeverityFilter,
  pub sort_order: SortOrder,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub expanded: Option<IncidentId>,
  pub total: usize,
  pub shown: usize,
  pub incidents: Vec<IncidentRow>,
  pub draft: DraftView,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for invalid input lines.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}

impl From<&DashboardError> for ErrorOutput {
  fn from(e: &DashboardError) -> Self {
    match e {
      DashboardError::Validation { field, reason } => {
        Self::new(reason.clone()).with_field(field.clone())
      }
      _ => Self::new(e.to_string()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn severity_parses_loosely() {
    assert_eq!(Severity::from_str_loose("HIGH"), Some(Severity::High));
    assert_eq!(Severity::from_str_loose(" medium "), Some(Severity::Medium));
    assert_eq!(Severity::from_str_loose("Critical"), None);
    assert_eq!(Severity::from_str_loose("med"), None);
  }

  #[test]
  fn filter_all_matches_every_severity() {
    for s in Severity::ALL {
      assert!(SeverityFilter::All.matches(s));
    }
    assert!(!SeverityFilter::Only(Severity::Low).matches(Severity::High));
  }

  #[test]
  fn sort_order_accepts_widget_labels() {
    assert_eq!(SortOrder::from_str_loose("Newest First"), Some(SortOrder::Newest));
    assert_eq!(SortOrder::from_str_loose("oldest"), Some(SortOrder::Oldest));
    assert_eq!(SortOrder::from_str_loose("random"), None);
    assert_eq!(SortOrder::from_str_loose("asc"), None);
    assert_eq!(SortOrder::from_str_loose("desc"), None);
  }

  #[test]
  fn filter_serializes_as_display_name() {
    let json = serde_json::to_string(&SeverityFilter::Only(Severity::Medium)).unwrap();
    assert_eq!(json, "\"Medium\"");
    let json = serde_json::to_string(&SeverityFilter::All).unwrap();
    assert_eq!(json, "\"All\"");
  }

  #[test]
  fn inbound_events_parse_by_type_tag() {
    let ev: InboundEvent =
      serde_json::from_str(r#"{"type":"draft_field_change","field":"title","value":"x"}"#).unwrap();
    assert!(matches!(ev, InboundEvent::DraftFieldChange { .. }));
    let ev: InboundEvent = serde_json::from_str(r#"{"type":"submit"}"#).unwrap();
    assert!(matches!(ev, InboundEvent::Submit));
  }
}
