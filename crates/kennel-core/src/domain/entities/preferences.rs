//! Adopter preference filter.
//!
//! Every preference is optional. An unset preference is a wildcard; a set
//! one must match the dog (age class) or its breed (name, size) exactly.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::{
    entities::{Breed, Dog},
    error::DomainError,
    value_objects::{AgeClass, BreedName, SizeClass},
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Preferences {
    pub breed: Option<BreedName>,
    pub age_class: Option<AgeClass>,
    pub size: Option<SizeClass>,
}

impl Preferences {
    pub fn breed(mut self, breed: BreedName) -> Self {
        self.breed = Some(breed);
        self
    }

    pub fn age_class(mut self, age_class: AgeClass) -> Self {
        self.age_class = Some(age_class);
        self
    }

    /// `SizeClass::Unspecified` clears the preference.
    pub fn size(mut self, size: SizeClass) -> Self {
        self.size = size.is_specified().then_some(size);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.breed.is_none() && self.age_class.is_none() && self.size.is_none()
    }

    /// Parse a preference value typed by a person: blank or `any` means
    /// "no preference".
    pub fn parse_optional<T>(raw: &str) -> Result<Option<T>, DomainError>
    where
        T: FromStr<Err = DomainError>,
    {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("any") {
            return Ok(None);
        }
        trimmed.parse().map(Some)
    }

    /// Whether `dog` (of breed `breed`) satisfies every set preference.
    ///
    /// Lifecycle state and adoption history are not considered here.
    pub fn matches(&self, dog: &Dog, breed: &Breed) -> bool {
        let breed_ok = self.breed.as_ref().is_none_or(|b| b == breed.name());
        let age_ok = self
            .age_class
            .is_none_or(|class| class == AgeClass::from_age(dog.age()));
        let size_ok = self.size.is_none_or(|size| size == breed.size());
        breed_ok && age_ok && size_ok
    }
}

impl fmt::Display for Preferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let age = self.age_class.map_or("Any", |a| a.label());
        let size = self.size.map_or("Any", |s| s.label());
        let breed = self.breed.as_ref().map_or("Any", BreedName::as_str);
        write!(
            f,
            "Preferences:\n- Age: {age}\n- Size: {size}\n- Breed: {breed}"
        )
    }
}
