//! Core logic for the Creative Vitae experience tracker.
//! This crate owns the record invariants and the timeline layout.

pub mod form;
pub mod format;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod timeline;

pub use form::{DraftField, DraftValidationError, ExperienceDraft, FieldIssue, FieldProblem};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::experience::{Experience, ExperienceId, ExperienceKind, ExperienceValidationError};
pub use model::palette::{parse_swatch, Swatch, SwatchParseError, PALETTE};
pub use repo::experience_repo::{
    ExperienceRepository, InMemoryExperienceRepository, RepoError, RepoResult,
};
pub use service::tracker_service::{ExperienceTracker, TrackerConfig, TrackerError};
pub use timeline::{
    compute_timeline, LayoutConfig, TimelineBlock, TimelineLayout, TimelineSpan, YearMarker,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
