//! Form draft for a not-yet-submitted incident.

use crate::types::{DraftField, DraftView, Severity};

/// Uncommitted form values. Nothing is validated until submit.
///
/// Severity is kept as the text the widget sent; the store decides whether it
/// names a real severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
  pub title: String,
  pub description: String,
  pub severity: String,
}

impl Default for Draft {
  fn default() -> Self {
    Self::with_severity(Severity::default())
  }
}

impl Draft {
  pub fn with_severity(severity: Severity) -> Self {
    Self {
      title: String::new(),
      description: String::new(),
      severity: severity.as_str().to_string(),
    }
  }

  /// Overwrite one field unconditionally.
  pub fn update(&mut self, field: DraftField, value: String) {
    match field {
      DraftField::Title => self.title = value,
      DraftField::Description => self.description = value,
      DraftField::Severity => self.severity = value,
    }
  }

  /// Clear text fields and put severity back to `severity`.
  pub fn reset(&mut self, severity: Severity) {
    *self = Self::with_severity(severity);
  }

  pub fn view(&self) -> DraftView {
    DraftView {
      title: self.title.clone(),
      description: self.description.clone(),
      severity: self.severity.clone(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_is_blank_low() {
    let draft = Draft::default();
    assert_eq!(draft.title, "");
    assert_eq!(draft.description, "");
    assert_eq!(draft.severity, "Low");
  }

  #[test]
  fn update_overwrites_without_validation() {
    let mut draft = Draft::default();
    draft.update(DraftField::Title, "   ".into());
    draft.update(DraftField::Severity, "Severe".into());
    assert_eq!(draft.title, "   ");
    assert_eq!(draft.severity, "Severe");
    draft.update(DraftField::Title, "second".into());
    assert_eq!(draft.title, "second");
  }

  #[test]
  fn reset_restores_defaults() {
    let mut draft = Draft::default();
    draft.update(DraftField::Title, "T".into());
    draft.update(DraftField::Description, "D".into());
    draft.update(DraftField::Severity, "High".into());
    draft.reset(Severity::Low);
    assert_eq!(draft, Draft::default());
  }
}
