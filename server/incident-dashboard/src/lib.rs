//! Incident dashboard view-model.
//!
//! Holds AI safety incident records in memory, derives the displayed list
//! (severity filter, then stable sort by report time), tracks the single
//! expanded incident and the form draft, and appends new incidents on submit.
//!
//! State changes go through a pure transition function; the binary feeds it UI
//! events as JSON lines and writes a snapshot after each one.

pub mod config;
pub mod draft;
pub mod engine;
pub mod error;
pub mod expansion;
pub mod normalize;
pub mod render;
pub mod store;
pub mod transition;
pub mod types;
pub mod view;

pub use config::Config;
pub use engine::Dashboard;
pub use error::DashboardError;
pub use store::IncidentStore;
pub use transition::{transition, DashboardState, Outcome, Transition};
pub use types::{InboundEvent, Incident, IncidentId, Severity, Snapshot, UiEvent};
pub use view::derive_view;
