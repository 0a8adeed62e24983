//! Kennel Core - domain and application layers of a dog shelter registry.
//!
//! This crate keeps a breed catalog, the shelter's dogs and the people who
//! adopt them, and moves dogs through their lifecycle:
//!
//! ```text
//!              reserve               adopt
//! Available ───────────▶ Reserved ───────────▶ Adopted
//!     ▲                     │                     │
//!     └──────── return ─────┴────── return ───────┘
//! ```
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           kennel-cli (CLI)              │
//! │       (shell, demo, config, init)       │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      kennel-adapters (Infrastructure)   │
//! │     (SharedRegistry, demo seed data)    │
//! └──────────────────┬──────────────────────┘
//!                    │ wraps
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (AdoptionRegistry)            │
//! │  Dual-gated transitions, cascades       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │   (Breed, Dog, Adopter, Preferences)    │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use kennel_core::prelude::*;
//!
//! let mut registry = AdoptionRegistry::new();
//! registry
//!     .register_breed(NewBreed::new("Pug".parse()?).size(SizeClass::Small))?;
//! let id = registry
//!     .register_dog(NewDog {
//!         id: None,
//!         name: "Panceta".into(),
//!         age: 3,
//!         weight: "8.5".parse()?,
//!         sex: Sex::Female,
//!         breed: "pug".parse()?,
//!         vaccinated: true,
//!         has_disability: false,
//!     })?
//!     .id();
//! registry.register_adopter(NewAdopter {
//!     name: "ana".into(),
//!     dni: "33333333".parse()?,
//!     email: "ana@na.com".parse()?,
//! })?;
//!
//! let ana: Dni = "33333333".parse()?;
//! registry.reserve(id, &ana)?;
//! registry.adopt(id, &ana)?;
//! assert_eq!(registry.get_dog(id)?.state(), DogState::Adopted);
//! # Ok::<(), KennelError>(())
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{AdoptionRegistry, ApplicationError, EntityKind, Operation, Side};
    pub use crate::domain::{
        Adopter, AgeClass, Breed, BreedName, Dni, Dog, DogId, DogState, DomainError, Email,
        NewAdopter, NewBreed, NewDog, Person, Preferences, Sex, SizeClass, Weight,
    };
    pub use crate::error::{ErrorCategory, KennelError, KennelResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
