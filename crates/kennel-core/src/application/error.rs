//! Application layer errors.
//!
//! These errors represent failures in orchestration, not value validation.
//! Validation errors are `DomainError` from `crate::domain`.

use std::fmt;

use thiserror::Error;

use crate::domain::{DogId, Dni};
use crate::error::ErrorCategory;

/// The kinds of record the registry keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Breed,
    Dog,
    Adopter,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Breed => "breed",
            Self::Dog => "dog",
            Self::Adopter => "adopter",
        })
    }
}

/// A dual-gated lifecycle operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Reserve,
    Adopt,
    Return,
}

impl Operation {
    /// Human reason for a rejection, depending on who said no.
    pub(crate) const fn rejection_reason(self, side: Side) -> &'static str {
        match (self, side) {
            (Self::Reserve, Side::Dog) => "the dog is already reserved or adopted",
            (Self::Reserve, Side::Adopter) => {
                "the adopter already adopted this dog or holds a prior reservation"
            }
            (Self::Reserve, Side::Both) => {
                "the dog is not available and the adopter cannot take a new reservation"
            }
            (Self::Adopt, _) => "no prior reservation",
            (Self::Return, _) => "not your dog",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Reserve => "reserve",
            Self::Adopt => "adopt",
            Self::Return => "return",
        })
    }
}

/// Which participant rejected a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Dog,
    Adopter,
    Both,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dog => "dog",
            Self::Adopter => "adopter",
            Self::Both => "dog and adopter",
        })
    }
}

/// Errors that occur during registry orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// A lookup by key found nothing.
    #[error("{entity} '{key}' not found")]
    NotFound { entity: EntityKind, key: String },

    /// A registration would break a uniqueness rule.
    #[error("{entity} '{key}' is already registered")]
    Duplicate { entity: EntityKind, key: String },

    /// The dual gate refused a lifecycle change. Nothing was mutated.
    #[error("cannot {operation} dog {dog} for adopter {adopter}: {reason} (rejected by {rejected_by})")]
    InvalidTransition {
        operation: Operation,
        dog: DogId,
        adopter: Dni,
        rejected_by: Side,
        reason: &'static str,
    },

    /// Shared registry access failed (lock poisoned by a panicking holder).
    #[error("Registry lock poisoned")]
    RegistryLock,
}

impl ApplicationError {
    pub(crate) fn not_found(entity: EntityKind, key: impl fmt::Display) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub(crate) fn duplicate(entity: EntityKind, key: impl fmt::Display) -> Self {
        Self::Duplicate {
            entity,
            key: key.to_string(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotFound { entity, .. } => vec![
                format!("List registered records: {entity} list"),
                "Keys are case-insensitive; check for typos".into(),
            ],
            Self::Duplicate { entity, key } => vec![
                format!("A {entity} with key '{key}' already exists"),
                format!("Use '{entity} show {key}' to inspect it"),
            ],
            Self::InvalidTransition { operation, .. } => match operation {
                Operation::Reserve => vec![
                    "Only available dogs can be reserved: dog list --state available".into(),
                    "An adopter holds at most one reservation at a time".into(),
                ],
                Operation::Adopt => vec![
                    "Reserve the dog first, with the same adopter".into(),
                ],
                Operation::Return => vec![
                    "Only the adopter holding the dog can return it".into(),
                    "Check who holds it: dog show <id>".into(),
                ],
            },
            Self::RegistryLock => vec![
                "A previous operation panicked while holding the registry".into(),
                "Restart the session".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::Duplicate { .. } | Self::InvalidTransition { .. } => ErrorCategory::Conflict,
            Self::RegistryLock => ErrorCategory::Internal,
        }
    }
}
