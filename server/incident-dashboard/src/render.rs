//! Build the snapshot handed to the rendering layer after every event.

use crate::config::Config;
use crate::transition::DashboardState;
use crate::types::{Incident, IncidentRow, Snapshot};
use crate::view::derive_view;

const SHOW_LABEL: &str = "View Details";
const HIDE_LABEL: &str = "Hide Details";

pub fn snapshot(state: &DashboardState, config: &Config) -> Snapshot {
  let view = derive_view(state.store.as_slice(), state.filter, state.sort_order);
  let incidents: Vec<IncidentRow> = view
    .into_iter()
    .map(|incident| row(incident, state.expansion.is_expanded(incident.id), config))
    .collect();

  Snapshot {
    filter: state.filter,
    sort_order: state.sort_order,
    expanded: state.expansion.current(),
    total: state.store.len(),
    shown: incidents.len(),
    incidents,
    draft: state.draft.view(),
  }
}

fn row(incident: &Incident, expanded: bool, config: &Config) -> IncidentRow {
  IncidentRow {
    id: incident.id,
    title: incident.title.clone(),
    severity: incident.severity,
    reported_at: incident.reported_at.to_rfc3339(),
    reported_at_display: incident
      .reported_at
      .format(&config.display_time_format)
      .to_string(),
    expanded,
    toggle_label: if expanded { HIDE_LABEL } else { SHOW_LABEL },
    description: expanded.then(|| incident.description.clone()),
  }
}
