//! Experience domain model.
//!
//! # Responsibility
//! - Define the canonical record behind the form and the timeline.
//! - Define the fixed color palette a record can be drawn with.
//!
//! # Invariants
//! - Every record is identified by a stable, non-nil `ExperienceId`.
//! - Records are immutable after creation; deletion removes them outright.

pub mod experience;
pub mod palette;
