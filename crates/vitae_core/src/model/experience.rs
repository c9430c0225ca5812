//! Experience record model.
//!
//! # Responsibility
//! - Define the canonical work/education record shown on the timeline.
//! - Validate record-level invariants before a record is stored.
//!
//! # Invariants
//! - `id` is stable, non-nil and never reused for another record.
//! - `title` is non-empty after trimming.
//! - `end_date == None` means the experience is ongoing.
//! - `end_date < start_date` is tolerated unless a caller opts into
//!   [`Experience::validate_date_order`].

use crate::model::palette::Swatch;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one experience record.
pub type ExperienceId = Uuid;

/// Category of an experience record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceKind {
    /// Employment, freelance or similar.
    #[default]
    Work,
    /// Schooling, degrees, courses.
    Education,
}

impl ExperienceKind {
    /// Stable lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Education => "education",
        }
    }

    /// Parses the stable label back into a kind.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "work" => Some(Self::Work),
            "education" => Some(Self::Education),
            _ => None,
        }
    }
}

/// One work or education entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawExperience")]
pub struct Experience {
    pub id: ExperienceId,
    pub title: String,
    pub description: Option<String>,
    /// Serialized as `type` to match the form field naming.
    #[serde(rename = "type")]
    pub kind: ExperienceKind,
    pub start_date: NaiveDate,
    /// `None` while the experience is still running.
    pub end_date: Option<NaiveDate>,
    pub color: Swatch,
}

/// Record-level validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExperienceValidationError {
    NilId,
    EmptyTitle,
    ReversedRange { start: NaiveDate, end: NaiveDate },
}

impl Display for ExperienceValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "experience id must not be nil"),
            Self::EmptyTitle => write!(f, "experience title must not be empty"),
            Self::ReversedRange { start, end } => {
                write!(f, "end_date ({end}) must be >= start_date ({start})")
            }
        }
    }
}

impl Error for ExperienceValidationError {}

impl Experience {
    /// Creates a record with a freshly generated id.
    ///
    /// The record starts as ongoing, without description, in the default
    /// color.
    pub fn new(
        kind: ExperienceKind,
        title: impl Into<String>,
        start_date: NaiveDate,
    ) -> Result<Self, ExperienceValidationError> {
        Self::with_id(Uuid::new_v4(), kind, title, start_date)
    }

    /// Creates a record with a caller-provided id.
    pub fn with_id(
        id: ExperienceId,
        kind: ExperienceKind,
        title: impl Into<String>,
        start_date: NaiveDate,
    ) -> Result<Self, ExperienceValidationError> {
        let experience = Self {
            id,
            title: title.into(),
            description: None,
            kind,
            start_date,
            end_date: None,
            color: Swatch::default(),
        };
        experience.validate()?;
        Ok(experience)
    }

    /// Sets the end date; `None` marks the record as ongoing.
    pub fn ending(mut self, end_date: Option<NaiveDate>) -> Self {
        self.end_date = end_date;
        self
    }

    /// Sets the description, dropping blank text.
    pub fn described(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = if description.trim().is_empty() {
            None
        } else {
            Some(description)
        };
        self
    }

    pub fn colored(mut self, color: Swatch) -> Self {
        self.color = color;
        self
    }

    /// Checks the invariants every stored record must hold.
    ///
    /// Date order is deliberately not part of this check; see
    /// [`Experience::validate_date_order`].
    pub fn validate(&self) -> Result<(), ExperienceValidationError> {
        if self.id.is_nil() {
            return Err(ExperienceValidationError::NilId);
        }
        if self.title.trim().is_empty() {
            return Err(ExperienceValidationError::EmptyTitle);
        }
        Ok(())
    }

    /// Rejects records whose end date precedes their start date.
    pub fn validate_date_order(&self) -> Result<(), ExperienceValidationError> {
        match self.end_date {
            Some(end) if end < self.start_date => Err(ExperienceValidationError::ReversedRange {
                start: self.start_date,
                end,
            }),
            _ => Ok(()),
        }
    }

    pub fn is_ongoing(&self) -> bool {
        self.end_date.is_none()
    }
}

#[derive(Deserialize)]
struct RawExperience {
    id: ExperienceId,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(rename = "type")]
    kind: ExperienceKind,
    start_date: NaiveDate,
    #[serde(default)]
    end_date: Option<NaiveDate>,
    #[serde(default)]
    color: Swatch,
}

impl TryFrom<RawExperience> for Experience {
    type Error = ExperienceValidationError;

    fn try_from(raw: RawExperience) -> Result<Self, Self::Error> {
        let experience = Self {
            id: raw.id,
            title: raw.title,
            description: raw.description.filter(|text| !text.trim().is_empty()),
            kind: raw.kind,
            start_date: raw.start_date,
            end_date: raw.end_date,
            color: raw.color,
        };
        experience.validate()?;
        Ok(experience)
    }
}
