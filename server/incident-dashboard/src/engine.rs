//! Dashboard driver: owns the current state, applies events, renders snapshots.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::Config;
use crate::error::DashboardError;
use crate::normalize;
use crate::render;
use crate::store::IncidentStore;
use crate::transition::{transition, DashboardState, Outcome};
use crate::types::*;

/// The incident dashboard view-model. Holds in-memory state across events.
pub struct Dashboard {
  config: Config,
  state: DashboardState,
}

impl Dashboard {
  pub fn new(config: Config) -> Result<Self, DashboardError> {
    let store = if config.seed {
      IncidentStore::seeded()?
    } else {
      IncidentStore::new()
    };
    Ok(Self::with_store(config, store))
  }

  pub fn with_defaults() -> Result<Self, DashboardError> {
    Self::new(Config::default())
  }

  pub fn with_store(config: Config, store: IncidentStore) -> Self {
    let state = DashboardState::new(store, &config);
    Self { config, state }
  }

  pub fn state(&self) -> &DashboardState {
    &self.state
  }

  /// Apply one typed event at time `now`.
  pub fn apply(&mut self, event: UiEvent, now: DateTime<Utc>) -> Outcome {
    let current = std::mem::take(&mut self.state);
    let next = transition(current, event, now, &self.config);
    self.state = next.state;
    debug!(outcome = ?next.outcome, "event applied");
    next.outcome
  }

  /// Normalize and apply one inbound event, then render.
  ///
  /// A malformed event is an error and leaves state untouched. A rejected
  /// submit is not an error: the snapshot simply shows the unchanged state.
  pub fn process(&mut self, raw: &InboundEvent, now: DateTime<Utc>) -> Result<Snapshot, DashboardError> {
    let event = normalize::normalize(raw)?;
    self.apply(event, now);
    Ok(self.snapshot())
  }

  /// Parse one JSON line and apply it, then render.
  pub fn process_line(&mut self, line: &str, now: DateTime<Utc>) -> Result<Snapshot, DashboardError> {
    let event = normalize::parse_line(line)?;
    self.apply(event, now);
    Ok(self.snapshot())
  }

  pub fn snapshot(&self) -> Snapshot {
    render::snapshot(&self.state, &self.config)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;

  fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, hour, 0, 0).unwrap()
  }

  fn draft(field: &str, value: &str) -> InboundEvent {
    InboundEvent::DraftFieldChange {
      field: field.into(),
      value: value.into(),
    }
  }

  fn shown_ids(snap: &Snapshot) -> Vec<u64> {
    snap.incidents.iter().map(|r| r.id.0).collect()
  }

  #[test]
  fn initial_snapshot_is_seeded_newest_first() {
    let dashboard = Dashboard::with_defaults().unwrap();
    let snap = dashboard.snapshot();
    assert_eq!(shown_ids(&snap), vec![2, 3, 1]);
  }

  #[test]
  fn unseeded_dashboard_starts_empty() {
    let dashboard = Dashboard::new(Config {
      seed: false,
      ..Config::default()
    })
    .unwrap();
    assert_eq!(dashboard.snapshot().total, 0);
  }

  #[test]
  fn end_to_end_filter_then_sort() {
    let mut dashboard = Dashboard::with_defaults().unwrap();
    let snap = dashboard
      .process(&InboundEvent::FilterChange { value: "High".into() }, at(0))
      .unwrap();
    assert_eq!(shown_ids(&snap), vec![2]);

    dashboard
      .process(&InboundEvent::FilterChange { value: "All".into() }, at(0))
      .unwrap();
    let snap = dashboard
      .process(&InboundEvent::SortChange { value: "Oldest".into() }, at(0))
      .unwrap();
    assert_eq!(shown_ids(&snap), vec![1, 3, 2]);
  }

  #[test]
  fn submitted_incident_appears_at_its_time() {
    let mut dashboard = Dashboard::with_defaults().unwrap();
    dashboard.process(&draft("title", "Prompt injection"), at(9)).unwrap();
    dashboard.process(&draft("description", "Agent followed hidden text"), at(9)).unwrap();
    dashboard.process(&draft("severity", "High"), at(9)).unwrap();
    let snap = dashboard.process(&InboundEvent::Submit, at(10)).unwrap();

    assert_eq!(snap.total, 4);
    assert_eq!(snap.incidents[0].id.0, 4);
    assert_eq!(snap.incidents[0].reported_at, "2025-06-01T10:00:00+00:00");
    assert_eq!(snap.draft.title, "");
    assert_eq!(snap.draft.severity, "Low");
  }

  #[test]
  fn rejected_submit_is_silent() {
    let mut dashboard = Dashboard::with_defaults().unwrap();
    dashboard.process(&draft("title", "only a title"), at(9)).unwrap();
    let snap = dashboard.process(&InboundEvent::Submit, at(9)).unwrap();
    assert_eq!(snap.total, 3);
    assert_eq!(snap.draft.title, "only a title");
  }

  #[test]
  fn invalid_selector_is_an_error_and_changes_nothing() {
    let mut dashboard = Dashboard::with_defaults().unwrap();
    let before = dashboard.state().clone();
    let err = dashboard
      .process(&InboundEvent::SortChange { value: "sideways".into() }, at(0))
      .unwrap_err();
    assert!(err.to_string().contains("Newest|Oldest"));
    assert_eq!(dashboard.state(), &before);
  }

  #[test]
  fn process_line_applies_json_event() {
    let mut dashboard = Dashboard::with_defaults().unwrap();
    let snap = dashboard
      .process_line(r#"{"type":"filter_change","value":"Low"}"#, at(0))
      .unwrap();
    assert_eq!(shown_ids(&snap), vec![3]);
  }

  #[test]
  fn process_line_rejects_bad_json_without_change() {
    let mut dashboard = Dashboard::with_defaults().unwrap();
    let before = dashboard.state().clone();
    let err = dashboard.process_line("{\"type\":", at(0)).unwrap_err();
    assert!(matches!(err, DashboardError::Json(_)));
    assert_eq!(dashboard.state(), &before);
  }

  #[test]
  fn apply_reports_outcome() {
    let mut dashboard = Dashboard::with_defaults().unwrap();
    let outcome = dashboard.apply(UiEvent::ToggleExpand(IncidentId(1)), at(0));
    assert_eq!(outcome, Outcome::Toggled { expanded: Some(IncidentId(1)) });
  }
}
