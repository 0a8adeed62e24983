//! Adopter entity: personal data, preferences, and the adopter's own view
//! of the reservation/adoption relationship.

use std::fmt;

use serde::Serialize;

use crate::domain::{
    entities::Preferences,
    error::DomainError,
    value_objects::{DogId, Dni, Email, normalize_person_name},
};

/// Contact data shared by anyone the shelter deals with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonData {
    name: String,
    dni: Dni,
    email: Email,
}

impl PersonData {
    pub fn new(name: &str, dni: Dni, email: Email) -> Result<Self, DomainError> {
        Ok(Self {
            name: normalize_person_name(name)?,
            dni,
            email,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dni(&self) -> &Dni {
        &self.dni
    }

    pub fn email(&self) -> &Email {
        &self.email
    }
}

/// Capability set for anything that embeds [`PersonData`].
pub trait Person {
    fn person(&self) -> &PersonData;

    fn person_mut(&mut self) -> &mut PersonData;

    fn personal_info(&self) -> String {
        let p = self.person();
        format!("Name: {}\nDNI: {}\nEmail: {}", p.name, p.dni, p.email)
    }

    fn change_name(&mut self, raw: &str) -> Result<(), DomainError> {
        self.person_mut().name = normalize_person_name(raw)?;
        Ok(())
    }

    fn change_email(&mut self, email: Email) {
        self.person_mut().email = email;
    }
}

/// Registration payload for an adopter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAdopter {
    pub name: String,
    pub dni: Dni,
    pub email: Email,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Adopter {
    #[serde(flatten)]
    person: PersonData,
    preferences: Preferences,
    reserved: Option<DogId>,
    history: Vec<DogId>,
}

impl Adopter {
    pub(crate) fn new(new: NewAdopter) -> Result<Self, DomainError> {
        Ok(Self {
            person: PersonData::new(&new.name, new.dni, new.email)?,
            preferences: Preferences::default(),
            reserved: None,
            history: Vec::new(),
        })
    }

    pub fn dni(&self) -> &Dni {
        &self.person.dni
    }

    pub fn name(&self) -> &str {
        &self.person.name
    }

    pub fn email(&self) -> &Email {
        &self.person.email
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub(crate) fn set_preferences(&mut self, preferences: Preferences) {
        self.preferences = preferences;
    }

    /// The dog currently reserved, if any.
    pub fn reserved(&self) -> Option<DogId> {
        self.reserved
    }

    /// Adopted dogs in adoption order.
    pub fn history(&self) -> &[DogId] {
        &self.history
    }

    pub fn has_adopted(&self, dog: DogId) -> bool {
        self.history.contains(&dog)
    }

    // ── Guards ───────────────────────────────────────────────────────────

    /// An adopter may reserve a dog they have not adopted, provided their
    /// single reservation slot is free.
    pub fn can_reserve(&self, dog: DogId) -> bool {
        !self.has_adopted(dog) && self.reserved.is_none()
    }

    pub fn can_adopt(&self, dog: DogId) -> bool {
        self.reserved == Some(dog) && !self.has_adopted(dog)
    }

    pub fn can_return(&self, dog: DogId) -> bool {
        self.has_adopted(dog) || self.reserved == Some(dog)
    }

    // ── Transitions ──────────────────────────────────────────────────────

    pub(crate) fn reserve(&mut self, dog: DogId) -> bool {
        if !self.can_reserve(dog) {
            return false;
        }
        self.reserved = Some(dog);
        true
    }

    pub(crate) fn adopt(&mut self, dog: DogId) -> bool {
        if !self.can_adopt(dog) {
            return false;
        }
        self.history.push(dog);
        self.reserved = None;
        true
    }

    pub(crate) fn release(&mut self, dog: DogId) -> bool {
        if !self.can_return(dog) {
            return false;
        }
        if self.reserved == Some(dog) {
            self.reserved = None;
        } else {
            self.history.retain(|id| *id != dog);
        }
        true
    }
}

impl Person for Adopter {
    fn person(&self) -> &PersonData {
        &self.person
    }

    fn person_mut(&mut self) -> &mut PersonData {
        &mut self.person
    }
}

impl fmt::Display for Adopter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.personal_info())?;
        match self.reserved {
            Some(id) => writeln!(f, "Reserved dog: {id}")?,
            None => writeln!(f, "Reserved dog: -")?,
        }
        let history: Vec<String> = self.history.iter().map(ToString::to_string).collect();
        writeln!(f, "Adopted dogs: [{}]", history.join(", "))?;
        write!(f, "{}", self.preferences)
    }
}
