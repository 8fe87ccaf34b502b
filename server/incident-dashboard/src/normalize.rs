//! Normalize inbound UI events into typed `UiEvent`s.

use crate::error::DashboardError;
use crate::types::*;

/// Parse selector and field names of an InboundEvent.
///
/// Draft values are passed through untouched; only the names that pick a
/// selector option or a field are checked here.
pub fn normalize(raw: &InboundEvent) -> Result<UiEvent, DashboardError> {
  match raw {
    InboundEvent::FilterChange { value } => SeverityFilter::from_str_loose(value)
      .map(UiEvent::FilterChanged)
      .ok_or_else(|| DashboardError::validation("value", "expected All|Low|Medium|High")),
    InboundEvent::SortChange { value } => SortOrder::from_str_loose(value)
      .map(UiEvent::SortChanged)
      .ok_or_else(|| DashboardError::validation("value", "expected Newest|Oldest")),
    InboundEvent::ToggleExpand { id } => Ok(UiEvent::ToggleExpand(IncidentId(*id))),
    InboundEvent::DraftFieldChange { field, value } => {
      let field = DraftField::from_str_loose(field)
        .ok_or_else(|| DashboardError::validation("field", "expected title|description|severity"))?;
      Ok(UiEvent::DraftFieldChanged {
        field,
        value: value.clone(),
      })
    }
    InboundEvent::Submit => Ok(UiEvent::Submit),
  }
}

/// Parse one JSON line into a typed event.
pub fn parse_line(line: &str) -> Result<UiEvent, DashboardError> {
  let raw: InboundEvent = serde_json::from_str(line)?;
  normalize(&raw)
}
