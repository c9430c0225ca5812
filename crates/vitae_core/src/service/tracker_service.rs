//! Experience tracker session service.
//!
//! # Responsibility
//! - Own the record collection and the entry form for one UI session.
//! - Route form submission and deletion through repository contracts.
//! - Produce the timeline layout for the current collection.
//!
//! # Invariants
//! - A rejected submission leaves records, draft and form visibility as-is.
//! - An accepted submission appends exactly one record, resets the draft and
//!   closes the form.
//! - Layout time is always supplied by the caller.

use crate::form::{DraftValidationError, ExperienceDraft};
use crate::model::experience::{Experience, ExperienceId};
use crate::repo::experience_repo::{ExperienceRepository, InMemoryExperienceRepository, RepoError};
use crate::timeline::{compute_timeline, LayoutConfig, TimelineLayout};
use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Session-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub layout: LayoutConfig,
    /// Rejects submissions whose end date precedes the start date.
    pub reject_reversed_ranges: bool,
}

/// Service error for tracker use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    /// Submitted draft failed field validation.
    InvalidDraft(DraftValidationError),
    /// Repository rejected the operation.
    Repo(RepoError),
}

impl Display for TrackerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDraft(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TrackerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDraft(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<DraftValidationError> for TrackerError {
    fn from(value: DraftValidationError) -> Self {
        Self::InvalidDraft(value)
    }
}

impl From<RepoError> for TrackerError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// One user's experience list plus its entry form.
pub struct ExperienceTracker<R: ExperienceRepository = InMemoryExperienceRepository> {
    repo: R,
    draft: ExperienceDraft,
    form_open: bool,
    config: TrackerConfig,
}

impl ExperienceTracker<InMemoryExperienceRepository> {
    /// Creates an empty session with default configuration.
    pub fn in_memory() -> Self {
        Self::new(InMemoryExperienceRepository::new(), TrackerConfig::default())
    }
}

impl<R: ExperienceRepository> ExperienceTracker<R> {
    /// Creates a session over the provided repository.
    pub fn new(repo: R, config: TrackerConfig) -> Self {
        Self {
            repo,
            draft: ExperienceDraft::default(),
            form_open: false,
            config,
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Records in insertion order.
    pub fn experiences(&self) -> &[Experience] {
        self.repo.list()
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    pub fn open_form(&mut self) {
        self.form_open = true;
    }

    /// Hides the form; the draft is kept for the next opening.
    pub fn close_form(&mut self) {
        self.form_open = false;
    }

    pub fn toggle_form(&mut self) {
        self.form_open = !self.form_open;
    }

    pub fn draft(&self) -> &ExperienceDraft {
        &self.draft
    }

    /// Mutable access for field edits.
    pub fn draft_mut(&mut self) -> &mut ExperienceDraft {
        &mut self.draft
    }

    /// Toggles the "currently ongoing" checkbox.
    pub fn set_current(&mut self, current: bool) {
        self.draft.set_current(current);
    }

    /// Submits the current draft as a new record.
    ///
    /// # Contract
    /// - On success the record is appended with a fresh id, the draft resets
    ///   and the form closes.
    /// - On failure nothing changes; callers that ignore the error observe a
    ///   silent no-op.
    pub fn submit(&mut self) -> Result<ExperienceId, TrackerError> {
        let validated = match self.draft.validate(self.config.reject_reversed_ranges) {
            Ok(validated) => validated,
            Err(err) => {
                warn!(
                    "event=experience_submit module=tracker status=rejected issues={}",
                    err.issues.len()
                );
                return Err(err.into());
            }
        };

        let experience = validated.into_experience(Uuid::new_v4());
        let id = self.repo.insert(experience)?;
        self.draft.reset();
        self.form_open = false;

        info!(
            "event=experience_submit module=tracker status=ok id={} total={}",
            id,
            self.repo.list().len()
        );
        Ok(id)
    }

    /// Deletes one record by id.
    pub fn delete(&mut self, id: ExperienceId) -> Result<Experience, TrackerError> {
        let removed = self.repo.remove(id)?;
        info!(
            "event=experience_delete module=tracker status=ok id={} total={}",
            id,
            self.repo.list().len()
        );
        Ok(removed)
    }

    /// Lays out the current records as of `now`.
    pub fn timeline(&self, now: DateTime<Utc>) -> TimelineLayout {
        compute_timeline(self.repo.list(), now, &self.config.layout)
    }
}
