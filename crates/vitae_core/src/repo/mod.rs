//! Repository layer for the experience collection.
//!
//! # Invariants
//! - Repository writes enforce `Experience::validate()` before mutating.
//! - Repository APIs return semantic errors (`NotFound`, `DuplicateId`).

pub mod experience_repo;
