//! Pure state transition function.
//!
//! Takes the current dashboard state and one UI event and returns the next
//! state plus what happened. Wall-clock time comes in as an argument, so the
//! same inputs always give the same result.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::Config;
use crate::draft::Draft;
use crate::error::DashboardError;
use crate::expansion::Expansion;
use crate::store::IncidentStore;
use crate::types::{DraftField, IncidentId, SeverityFilter, SortOrder, UiEvent};

/// The whole view-model: store, selectors, expansion and draft.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardState {
  pub store: IncidentStore,
  pub filter: SeverityFilter,
  pub sort_order: SortOrder,
  pub expansion: Expansion,
  pub draft: Draft,
}

impl DashboardState {
  pub fn new(store: IncidentStore, config: &Config) -> Self {
    Self {
      store,
      draft: Draft::with_severity(config.default_severity),
      ..Self::default()
    }
  }
}

/// What an event did. Only for logging and tests; the snapshot carries no errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
  FilterChanged(SeverityFilter),
  SortChanged(SortOrder),
  Toggled { expanded: Option<IncidentId> },
  DraftUpdated(DraftField),
  Added(IncidentId),
  /// Submit refused; store and draft left as they were.
  Rejected { field: String, reason: String },
}

/// Result of a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
  pub state: DashboardState,
  pub outcome: Outcome,
}

impl Transition {
  fn new(state: DashboardState, outcome: Outcome) -> Self {
    Self { state, outcome }
  }
}

pub fn transition(
  mut state: DashboardState,
  event: UiEvent,
  now: DateTime<Utc>,
  config: &Config,
) -> Transition {
  match event {
    UiEvent::FilterChanged(filter) => {
      state.filter = filter;
      Transition::new(state, Outcome::FilterChanged(filter))
    }
    UiEvent::SortChanged(order) => {
      state.sort_order = order;
      Transition::new(state, Outcome::SortChanged(order))
    }
    UiEvent::ToggleExpand(id) => {
      state.expansion.toggle(id);
      let expanded = state.expansion.current();
      Transition::new(state, Outcome::Toggled { expanded })
    }
    UiEvent::DraftFieldChanged { field, value } => {
      state.draft.update(field, value);
      Transition::new(state, Outcome::DraftUpdated(field))
    }
    UiEvent::Submit => {
      let draft = &state.draft;
      match state
        .store
        .add(&draft.title, &draft.description, &draft.severity, now)
      {
        Ok(id) => {
          state.draft.reset(config.default_severity);
          Transition::new(state, Outcome::Added(id))
        }
        Err(e) => {
          debug!(error = %e, "submit rejected");
          let field = e.field().unwrap_or_default().to_string();
          let reason = match e {
            DashboardError::Validation { reason, .. } => reason,
            other => other.to_string(),
          };
          Transition::new(state, Outcome::Rejected { field, reason })
        }
      }
    }
  }
}
