//! Dog entity and its lifecycle state machine.
//!
//! ```text
//!             reserve              adopt
//! Available ──────────► Reserved ──────────► Adopted
//!     ▲                     │                    │
//!     └──────── return ─────┴────── return ──────┘
//! ```
//!
//! The guards only look at the dog's own state and the acting adopter's
//! DNI. Cross-checking with the adopter's side is the registry's job.

use std::fmt;

use serde::Serialize;

use crate::domain::value_objects::{
    BreedName, DogId, DogState, Dni, Sex, Weight, normalize_dog_name,
};

/// Registration payload for a dog. `id` is assigned by the registry when
/// left empty.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDog {
    pub id: Option<DogId>,
    pub name: String,
    pub age: u32,
    pub weight: Weight,
    pub sex: Sex,
    pub breed: BreedName,
    pub vaccinated: bool,
    pub has_disability: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dog {
    id: DogId,
    name: String,
    age: u32,
    weight: Weight,
    sex: Sex,
    breed: BreedName,
    vaccinated: bool,
    has_disability: bool,
    state: DogState,
    held_by: Option<Dni>,
}

impl Dog {
    pub(crate) fn new(id: DogId, new: NewDog) -> Self {
        Self {
            id,
            name: normalize_dog_name(&new.name),
            age: new.age,
            weight: new.weight,
            sex: new.sex,
            breed: new.breed,
            vaccinated: new.vaccinated,
            has_disability: new.has_disability,
            state: DogState::Available,
            held_by: None,
        }
    }

    pub fn id(&self) -> DogId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn breed(&self) -> &BreedName {
        &self.breed
    }

    pub fn is_vaccinated(&self) -> bool {
        self.vaccinated
    }

    pub fn has_disability(&self) -> bool {
        self.has_disability
    }

    pub fn state(&self) -> DogState {
        self.state
    }

    /// The adopter who reserved or adopted this dog.
    pub fn held_by(&self) -> Option<&Dni> {
        self.held_by.as_ref()
    }

    // ── Editable fields ──────────────────────────────────────────────────

    pub fn rename(&mut self, raw: &str) {
        self.name = normalize_dog_name(raw);
    }

    pub fn set_age(&mut self, age: u32) {
        self.age = age;
    }

    pub fn set_weight(&mut self, weight: Weight) {
        self.weight = weight;
    }

    pub fn set_sex(&mut self, sex: Sex) {
        self.sex = sex;
    }

    pub fn set_vaccinated(&mut self, vaccinated: bool) {
        self.vaccinated = vaccinated;
    }

    pub fn set_disability(&mut self, has_disability: bool) {
        self.has_disability = has_disability;
    }

    /// Breed changes go through the registry, which checks the breed exists.
    pub(crate) fn set_breed(&mut self, breed: BreedName) {
        self.breed = breed;
    }

    // ── Guards ───────────────────────────────────────────────────────────

    /// Only the state is consulted; adoption history lives on the adopter.
    pub fn can_reserve(&self, _adopter: &Dni) -> bool {
        self.state == DogState::Available
    }

    pub fn can_adopt(&self, adopter: &Dni) -> bool {
        self.state == DogState::Reserved && self.held_by.as_ref() == Some(adopter)
    }

    pub fn can_return(&self, adopter: &Dni) -> bool {
        self.state != DogState::Available && self.held_by.as_ref() == Some(adopter)
    }

    // ── Transitions ──────────────────────────────────────────────────────
    //
    // Each returns `false` and leaves the dog untouched when its guard fails.

    pub(crate) fn reserve(&mut self, adopter: &Dni) -> bool {
        if !self.can_reserve(adopter) {
            return false;
        }
        self.state = DogState::Reserved;
        self.held_by = Some(adopter.clone());
        true
    }

    pub(crate) fn adopt(&mut self, adopter: &Dni) -> bool {
        if !self.can_adopt(adopter) {
            return false;
        }
        self.state = DogState::Adopted;
        self.held_by = Some(adopter.clone());
        true
    }

    pub(crate) fn release(&mut self, adopter: &Dni) -> bool {
        if !self.can_return(adopter) {
            return false;
        }
        self.state = DogState::Available;
        self.held_by = None;
        true
    }
}

impl fmt::Display for Dog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Age: {}", self.age)?;
        writeln!(f, "Weight: {}", self.weight)?;
        writeln!(f, "Sex: {}", self.sex)?;
        writeln!(f, "Breed: {}", self.breed)?;
        writeln!(f, "Vaccinated: {}", yes_no(self.vaccinated))?;
        writeln!(f, "Disability: {}", yes_no(self.has_disability))?;
        writeln!(f, "State: {}", self.state)?;
        match &self.held_by {
            Some(dni) => write!(f, "Held by: {dni}"),
            None => write!(f, "Held by: -"),
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
