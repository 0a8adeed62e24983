//! Application services - orchestrate use cases.
//!
//! The registry is the single entry point for registering records, moving
//! dogs through their lifecycle and answering queries across collections.

pub mod adoption_registry;

pub use adoption_registry::AdoptionRegistry;
