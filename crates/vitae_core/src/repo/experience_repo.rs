//! Experience repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide append/remove/read access over the session's record list.
//!
//! # Invariants
//! - Write paths call `Experience::validate()` before mutating.
//! - Listing preserves insertion order.
//! - Ids are unique within one repository.

use crate::model::experience::{Experience, ExperienceId, ExperienceValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for experience collection operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(ExperienceValidationError),
    NotFound(ExperienceId),
    DuplicateId(ExperienceId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "experience not found: {id}"),
            Self::DuplicateId(id) => write!(f, "experience already exists: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::DuplicateId(_) => None,
        }
    }
}

impl From<ExperienceValidationError> for RepoError {
    fn from(value: ExperienceValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Storage contract for the ordered experience collection.
pub trait ExperienceRepository {
    /// Appends one record at the end of the collection.
    fn insert(&mut self, experience: Experience) -> RepoResult<ExperienceId>;
    /// Removes one record and returns it.
    fn remove(&mut self, id: ExperienceId) -> RepoResult<Experience>;
    fn get(&self, id: ExperienceId) -> Option<&Experience>;
    /// All records in insertion order.
    fn list(&self) -> &[Experience];
}

/// Session-lifetime repository backed by a `Vec`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryExperienceRepository {
    items: Vec<Experience>,
}

impl InMemoryExperienceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a repository, validating every record in order.
    pub fn try_from_records(records: impl IntoIterator<Item = Experience>) -> RepoResult<Self> {
        let mut repo = Self::new();
        for record in records {
            repo.insert(record)?;
        }
        Ok(repo)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ExperienceRepository for InMemoryExperienceRepository {
    fn insert(&mut self, experience: Experience) -> RepoResult<ExperienceId> {
        experience.validate()?;
        if self.get(experience.id).is_some() {
            return Err(RepoError::DuplicateId(experience.id));
        }

        let id = experience.id;
        self.items.push(experience);
        Ok(id)
    }

    fn remove(&mut self, id: ExperienceId) -> RepoResult<Experience> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(RepoError::NotFound(id))?;
        Ok(self.items.remove(index))
    }

    fn get(&self, id: ExperienceId) -> Option<&Experience> {
        self.items.iter().find(|item| item.id == id)
    }

    fn list(&self) -> &[Experience] {
        &self.items
    }
}
