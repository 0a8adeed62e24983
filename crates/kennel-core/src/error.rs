//! Unified error handling for Kennel Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Kennel Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KennelError {
    /// Malformed field values.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Lookup, uniqueness and lifecycle failures.
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// The registry's two views of a relationship disagree (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl KennelError {
    pub(crate) fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "The registry state is inconsistent".into(),
                "Run 'check' to list the disagreements".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// The application error inside, if any.
    pub fn as_application(&self) -> Option<&ApplicationError> {
        match self {
            Self::Application(e) => Some(e),
            _ => None,
        }
    }
}

pub use crate::domain::ErrorCategory;

/// Convenient result type alias.
pub type KennelResult<T> = Result<T, KennelError>;
