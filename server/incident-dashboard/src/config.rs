//! Dashboard configuration with sane defaults.

use std::env;

use crate::error::DashboardError;
use crate::types::Severity;

pub const SEED_ENV: &str = "INCIDENT_DASHBOARD_SEED";
pub const TIME_FORMAT_ENV: &str = "INCIDENT_DASHBOARD_TIME_FORMAT";

/// Startup and presentation settings.
#[derive(Debug, Clone)]
pub struct Config {
  /// Load the built-in seed incidents at startup.
  pub seed: bool,
  /// Severity the draft resets to after a successful submit.
  pub default_severity: Severity,
  /// chrono format string for `reported_at_display`.
  pub display_time_format: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      seed: true,
      default_severity: Severity::Low,
      display_time_format: "%Y-%m-%d %H:%M:%S UTC".to_string(),
    }
  }
}

impl Config {
  /// Defaults overlaid with `INCIDENT_DASHBOARD_*` environment variables.
  pub fn from_env() -> Result<Self, DashboardError> {
    Self::from_lookup(|key| env::var(key).ok())
  }

  /// Same as [`Config::from_env`] with an injectable variable source.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, DashboardError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let mut config = Self::default();

    if let Some(raw) = lookup(SEED_ENV) {
      config.seed = raw
        .trim()
        .parse::<bool>()
        .map_err(|_| DashboardError::env(SEED_ENV, format!("expected true|false, got {:?}", raw)))?;
    }

    if let Some(fmt) = lookup(TIME_FORMAT_ENV) {
      if fmt.trim().is_empty() {
        return Err(DashboardError::env(TIME_FORMAT_ENV, "must not be empty"));
      }
      config.display_time_format = fmt;
    }

    Ok(config)
  }
}
