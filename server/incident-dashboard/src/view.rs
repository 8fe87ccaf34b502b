//! Derived view: filter by severity, then stable sort by report time.

use std::cmp::Ordering;

use crate::types::{Incident, SeverityFilter, SortOrder};

/// Compute the displayed sequence from the store contents and selectors.
///
/// Pure: borrows the incidents, never reorders the source. The sort is stable,
/// so incidents with equal `reported_at` keep their store order.
pub fn derive_view(incidents: &[Incident], filter: SeverityFilter, order: SortOrder) -> Vec<&Incident> {
  let mut view: Vec<&Incident> = incidents
    .iter()
    .filter(|i| filter.matches(i.severity))
    .collect();
  view.sort_by(|a, b| compare(a, b, order));
  view
}

fn compare(a: &Incident, b: &Incident, order: SortOrder) -> Ordering {
  match order {
    SortOrder::Newest => b.reported_at.cmp(&a.reported_at),
    SortOrder::Oldest => a.reported_at.cmp(&b.reported_at),
  }
}
