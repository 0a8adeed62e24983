use std::fmt;

use serde::Serialize;

use crate::domain::value_objects::{BreedName, SizeClass, normalize_temperament};

/// Registration payload for a breed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBreed {
    pub name: BreedName,
    pub size: SizeClass,
    pub temperament: String,
}

impl NewBreed {
    pub fn new(name: BreedName) -> Self {
        Self {
            name,
            size: SizeClass::Unspecified,
            temperament: String::new(),
        }
    }

    pub fn size(mut self, size: SizeClass) -> Self {
        self.size = size;
        self
    }

    pub fn temperament(mut self, temperament: impl Into<String>) -> Self {
        self.temperament = temperament.into();
        self
    }
}

/// A catalogued breed. The name is fixed; size and temperament can be edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breed {
    name: BreedName,
    size: SizeClass,
    temperament: String,
}

impl Breed {
    pub(crate) fn new(new: NewBreed) -> Self {
        Self {
            name: new.name,
            size: new.size,
            temperament: normalize_temperament(&new.temperament),
        }
    }

    pub fn name(&self) -> &BreedName {
        &self.name
    }

    pub fn size(&self) -> SizeClass {
        self.size
    }

    /// Normalised temperament; empty when none was given.
    pub fn temperament(&self) -> &str {
        &self.temperament
    }

    pub fn set_size(&mut self, size: SizeClass) {
        self.size = size;
    }

    pub fn set_temperament(&mut self, raw: &str) {
        self.temperament = normalize_temperament(raw);
    }
}

impl fmt::Display for Breed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = if self.size.is_specified() {
            self.size.label()
        } else {
            "Surprise!"
        };
        let temperament = if self.temperament.is_empty() {
            "Surprise!"
        } else {
            &self.temperament
        };
        write!(
            f,
            "Breed: {}\nSize: {}\nTemperament: {}",
            self.name, size, temperament
        )
    }
}
