//! Experience entry form state and submission validation.
//!
//! # Responsibility
//! - Hold raw, user-typed form values between edits.
//! - Turn a draft into a validated record payload with field-level errors.
//!
//! # Invariants
//! - Date fields hold `YYYY-MM-DD` text as produced by date inputs.
//! - A draft marked `current` never carries an end date.
//! - Validation never mutates the draft.

use crate::model::experience::{Experience, ExperienceId, ExperienceKind};
use crate::model::palette::Swatch;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid iso date regex"));

/// Raw form values for a new experience.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceDraft {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ExperienceKind,
    pub start_date: String,
    pub end_date: String,
    /// "I currently work/study here".
    pub current: bool,
    pub color: Swatch,
}

/// Form field a validation issue refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    Title,
    StartDate,
    EndDate,
}

impl DraftField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::StartDate => "start_date",
            Self::EndDate => "end_date",
        }
    }
}

/// What is wrong with one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldProblem {
    Required,
    /// Carries the rejected input.
    InvalidDate(String),
    EndBeforeStart,
}

/// One field-level validation issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub field: DraftField,
    pub problem: FieldProblem,
}

impl Display for FieldIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let field = self.field.as_str();
        match &self.problem {
            FieldProblem::Required => write!(f, "{field} is required"),
            FieldProblem::InvalidDate(value) => {
                write!(f, "{field} `{value}` is not a valid YYYY-MM-DD date")
            }
            FieldProblem::EndBeforeStart => write!(f, "{field} must not precede start_date"),
        }
    }
}

/// Draft rejected at submission; lists every failing field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftValidationError {
    pub issues: Vec<FieldIssue>,
}

impl DraftValidationError {
    /// Whether `field` has at least one issue.
    pub fn has_issue(&self, field: DraftField) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }
}

impl Display for DraftValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid experience draft: ")?;
        for (index, issue) in self.issues.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl Error for DraftValidationError {}

/// Draft values that passed validation, ready to become a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDraft {
    pub title: String,
    pub description: String,
    pub kind: ExperienceKind,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub color: Swatch,
}

impl ValidatedDraft {
    /// Builds the stored record under `id`.
    pub fn into_experience(self, id: ExperienceId) -> Experience {
        Experience {
            id,
            title: self.title,
            description: None,
            kind: self.kind,
            start_date: self.start_date,
            end_date: self.end_date,
            color: self.color,
        }
        .described(self.description)
    }
}

impl ExperienceDraft {
    /// Toggles the ongoing flag; turning it on discards any typed end date.
    pub fn set_current(&mut self, current: bool) {
        self.current = current;
        if current {
            self.end_date.clear();
        }
    }

    /// Restores the blank form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Validates the draft for submission.
    ///
    /// Title and start date are required. A blank end date, or a draft marked
    /// `current`, yields an ongoing record. Reversed ranges are reported only
    /// when `reject_reversed_ranges` is set.
    pub fn validate(
        &self,
        reject_reversed_ranges: bool,
    ) -> Result<ValidatedDraft, DraftValidationError> {
        let mut issues = Vec::new();

        let title = self.title.trim();
        if title.is_empty() {
            issues.push(FieldIssue {
                field: DraftField::Title,
                problem: FieldProblem::Required,
            });
        }

        let start_date = match parse_form_date(&self.start_date) {
            Ok(Some(date)) => Some(date),
            Ok(None) => {
                issues.push(FieldIssue {
                    field: DraftField::StartDate,
                    problem: FieldProblem::Required,
                });
                None
            }
            Err(problem) => {
                issues.push(FieldIssue {
                    field: DraftField::StartDate,
                    problem,
                });
                None
            }
        };

        let end_date = if self.current {
            None
        } else {
            match parse_form_date(&self.end_date) {
                Ok(date) => date,
                Err(problem) => {
                    issues.push(FieldIssue {
                        field: DraftField::EndDate,
                        problem,
                    });
                    None
                }
            }
        };

        if let (Some(start), Some(end)) = (start_date, end_date) {
            if reject_reversed_ranges && end < start {
                issues.push(FieldIssue {
                    field: DraftField::EndDate,
                    problem: FieldProblem::EndBeforeStart,
                });
            }
        }

        match start_date {
            Some(start_date) if issues.is_empty() => Ok(ValidatedDraft {
                title: title.to_string(),
                description: self.description.clone(),
                kind: self.kind,
                start_date,
                end_date,
                color: self.color,
            }),
            _ => Err(DraftValidationError { issues }),
        }
    }
}

/// Parses an optional `YYYY-MM-DD` form value.
///
/// Blank input is `Ok(None)`.
pub fn parse_form_date(value: &str) -> Result<Option<NaiveDate>, FieldProblem> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if !ISO_DATE_RE.is_match(trimmed) {
        return Err(FieldProblem::InvalidDate(trimmed.to_string()));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| FieldProblem::InvalidDate(trimmed.to_string()))
}
