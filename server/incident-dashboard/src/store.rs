//! In-memory incident store: ordered records, newest submission first.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::DashboardError;
use crate::types::{Incident, IncidentId, Severity};

/// Built-in incidents loaded at startup: (title, description, severity, reported_at).
const SEED: [(&str, &str, Severity, &str); 3] = [
  (
    "Biased Recommendation Algorithm",
    "Algorithm consistently favored certain demographics...",
    Severity::Medium,
    "2025-03-15T10:00:00Z",
  ),
  (
    "LLM Hallucination in Critical Info",
    "LLM provided incorrect safety procedure information...",
    Severity::High,
    "2025-04-01T14:30:00Z",
  ),
  (
    "Minor Data Leak via Chatbot",
    "Chatbot inadvertently exposed non-sensitive user metadata...",
    Severity::Low,
    "2025-03-20T09:15:00Z",
  ),
];

/// Ordered incident records plus the id counter.
///
/// Ids come from `next_id`, never from the current length, so they stay
/// unique even if removal is ever added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidentStore {
  incidents: Vec<Incident>,
  next_id: u64,
}

impl Default for IncidentStore {
  fn default() -> Self {
    Self {
      incidents: Vec::new(),
      next_id: 1,
    }
  }
}

impl IncidentStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Store holding the three built-in incidents, ids 1..=3 in seed order.
  pub fn seeded() -> Result<Self, DashboardError> {
    let incidents = SEED
      .iter()
      .enumerate()
      .map(|(i, (title, description, severity, reported_at))| {
        let reported_at = DateTime::parse_from_rfc3339(reported_at)
          .map_err(|e| DashboardError::validation("reported_at", &format!("invalid RFC3339: {}", e)))?
          .with_timezone(&Utc);
        Ok(Incident {
          id: IncidentId(i as u64 + 1),
          title: title.to_string(),
          description: description.to_string(),
          severity: *severity,
          reported_at,
        })
      })
      .collect::<Result<Vec<_>, DashboardError>>()?;
    Self::from_incidents(incidents)
  }

  /// Build a store from existing records, keeping their order.
  ///
  /// The counter continues after the largest id present.
  pub fn from_incidents(incidents: Vec<Incident>) -> Result<Self, DashboardError> {
    let mut seen = HashSet::with_capacity(incidents.len());
    for incident in &incidents {
      if !seen.insert(incident.id) {
        return Err(DashboardError::validation(
          "id",
          &format!("duplicate incident id {}", incident.id),
        ));
      }
    }
    let next_id = incidents
      .iter()
      .map(|i| i.id.0)
      .max()
      .unwrap_or(0)
      .checked_add(1)
      .ok_or_else(id_space_exhausted)?;
    Ok(Self { incidents, next_id })
  }

  pub fn len(&self) -> usize {
    self.incidents.len()
  }

  pub fn is_empty(&self) -> bool {
    self.incidents.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &Incident> {
    self.incidents.iter()
  }

  pub fn as_slice(&self) -> &[Incident] {
    &self.incidents
  }

  pub fn get(&self, id: IncidentId) -> Option<&Incident> {
    self.incidents.iter().find(|i| i.id == id)
  }

  pub fn contains(&self, id: IncidentId) -> bool {
    self.get(id).is_some()
  }

  /// Validate and prepend a new incident reported at `now`.
  ///
  /// Title and description must be non-blank after trimming but are stored
  /// as given. Severity must name one of Low, Medium, High. On error the
  /// store is untouched.
  pub fn add(
    &mut self,
    title: &str,
    description: &str,
    severity: &str,
    now: DateTime<Utc>,
  ) -> Result<IncidentId, DashboardError> {
    if title.trim().is_empty() {
      return Err(DashboardError::validation("title", "must not be blank"));
    }
    if description.trim().is_empty() {
      return Err(DashboardError::validation("description", "must not be blank"));
    }
    let severity = Severity::from_str_loose(severity)
      .ok_or_else(|| DashboardError::validation("severity", "expected Low|Medium|High"))?;

    let id = IncidentId(self.next_id);
    self.next_id = self.next_id.checked_add(1).ok_or_else(id_space_exhausted)?;

    self.incidents.insert(
      0,
      Incident {
        id,
        title: title.to_string(),
        description: description.to_string(),
        severity,
        reported_at: now,
      },
    );
    info!(id = id.0, %severity, total = self.incidents.len(), "incident added");
    Ok(id)
  }
}

fn id_space_exhausted() -> DashboardError {
  DashboardError::validation("id", "id space exhausted")
}
