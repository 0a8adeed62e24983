//! Application layer for Kennel.
//!
//! This layer contains:
//! - **Services**: The adoption registry, which keeps dogs and adopters in step
//! - **Errors**: Lookup, uniqueness and lifecycle failures
//!
//! The domain entities each judge a transition from their own side; the
//! registry is what asks both of them and applies the change to both.

pub mod error;
pub mod services;

pub use services::AdoptionRegistry;

pub use error::{ApplicationError, EntityKind, Operation, Side};
