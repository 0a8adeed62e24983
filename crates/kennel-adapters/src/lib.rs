//! Infrastructure adapters for Kennel.
//!
//! This crate wraps `kennel-core`'s registry for use from the outside world:
//! a thread-safe handle and the built-in demo shelter.

pub mod seed;
pub mod shared;

// Re-export commonly used adapters
pub use seed::demo_shelter;
pub use shared::SharedRegistry;
