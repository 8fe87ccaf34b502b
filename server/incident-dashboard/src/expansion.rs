//! Which single incident, if any, shows its full description.

use crate::types::IncidentId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Expansion(Option<IncidentId>);

impl Expansion {
  pub fn current(self) -> Option<IncidentId> {
    self.0
  }

  pub fn is_expanded(self, id: IncidentId) -> bool {
    self.0 == Some(id)
  }

  /// Collapse `id` if it is open, otherwise open it and close anything else.
  pub fn toggle(&mut self, id: IncidentId) {
    self.0 = if self.is_expanded(id) { None } else { Some(id) };
  }
}
