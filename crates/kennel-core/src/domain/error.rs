// ============================================================================
// domain/error.rs - VALUE VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Raised when a field value cannot be normalised into a domain value
/// object. Lifecycle and lookup failures belong to the application layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("invalid {field} '{value}': {reason}")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: String,
    },
}

impl DomainError {
    /// Shorthand used by every `FromStr` impl in `value_objects`.
    pub(crate) fn invalid(
        field: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidValue { field, .. } => match *field {
                "size" => vec![
                    "Sizes: S (Small), M (Medium), L (Large), X (Extra Large)".into(),
                    "Leave the size empty to keep it unspecified".into(),
                ],
                "sex" => vec!["Use M (Male) or F (Female)".into()],
                "dni" => vec!["A DNI has exactly 8 characters, e.g. 11111111".into()],
                "email" => vec!["An email needs exactly one '@' and a '.'".into()],
                "age class" => vec![
                    "Age classes: puppy, young, adult, senior".into(),
                    "Or give an age in years, e.g. 4".into(),
                ],
                "state" => vec!["States: available, reserved, adopted".into()],
                "dog id" => vec!["Dog ids are positive whole numbers".into()],
                _ => vec![format!("Check the value given for {field}")],
            },
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Conflict,
    Internal,
}
