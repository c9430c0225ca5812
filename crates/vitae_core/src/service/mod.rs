//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate form, repository and layout calls into session-level APIs.
//! - Keep presentation layers decoupled from storage details.

pub mod tracker_service;
