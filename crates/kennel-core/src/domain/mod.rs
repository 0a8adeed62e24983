// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Kennel.
//!
//! This module contains the entities and their local lifecycle rules.
//! Nothing here knows about the other side of a relationship: a [`Dog`]
//! only judges a transition from its own state, an [`Adopter`] only from
//! its own reservation slot and history. Keeping both views in agreement is
//! the job of [`crate::application::AdoptionRegistry`].
//!
//! ## Rules
//!
//! - **No I/O**: No filesystem, network, or terminal access
//! - **No async**: Domain logic is synchronous
//! - **Normalise at the edge**: every typed value parses through `FromStr`
//! - **Crate-private transitions**: only the registry can move a dog
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    Adopter, Breed, Dog, NewAdopter, NewBreed, NewDog, Person, PersonData, Preferences,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{
    AgeClass, BreedName, DogId, DogState, Dni, Email, Sex, SizeClass, Weight,
};
