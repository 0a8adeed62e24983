//! Domain value objects: identifiers, size/sex/age classes, lifecycle state.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. Every
//! type that can be typed by a person has a `FromStr` impl that normalises
//! the raw text (trimming, case folding) before validating it, so the
//! presentation layer never has to know the normalisation rules.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `code`/`label` arms and the `FromStr` arm here
//! 3. Done: matching in the registry is by equality only

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Text normalisation ───────────────────────────────────────────────────────

/// Title-case a string the way names are stored: the first letter of every
/// word upper-cased, the rest lower-cased. A "word" starts after any
/// non-alphabetic character.
pub fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_alpha = false;
    for ch in raw.trim().chars() {
        if prev_alpha {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
        prev_alpha = ch.is_alphabetic();
    }
    out
}

/// Key used to compare enum labels: lower-case with whitespace, `-` and `_`
/// removed, so `"Extra Large"`, `"extra-large"` and `" ExtraLarge "` agree.
fn label_key(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Dog names are title-cased; an empty name becomes `"Unnamed"`.
pub fn normalize_dog_name(raw: &str) -> String {
    let name = title_case(raw);
    if name.is_empty() {
        "Unnamed".to_owned()
    } else {
        name
    }
}

/// Person names are title-cased and must not be empty.
pub fn normalize_person_name(raw: &str) -> Result<String, DomainError> {
    let name = title_case(raw);
    if name.is_empty() {
        return Err(DomainError::invalid("name", raw, "must not be empty"));
    }
    Ok(name)
}

/// Temperaments are trimmed with the first letter capitalised. Empty is
/// allowed and rendered as `"Surprise!"` by [`crate::domain::Breed`].
pub fn normalize_temperament(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

// ── DogId ────────────────────────────────────────────────────────────────────

/// Registry-assigned dog identifier. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DogId(u32);

impl DogId {
    pub fn new(value: u32) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::invalid("dog id", "0", "must be at least 1"));
        }
        Ok(Self(value))
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// The id after this one, or `None` once the id space is used up.
    pub(crate) const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    pub(crate) const fn first() -> Self {
        Self(1)
    }
}

impl fmt::Display for DogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DogId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: u32 = trimmed
            .parse()
            .map_err(|_| DomainError::invalid("dog id", trimmed, "must be a whole number"))?;
        Self::new(value)
    }
}

// ── Dni ──────────────────────────────────────────────────────────────────────

/// Adopter identity document number: 8 characters, lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dni(String);

impl Dni {
    pub const LEN: usize = 8;

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Dni {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Dni {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if normalized.chars().count() != Self::LEN {
            return Err(DomainError::invalid(
                "dni",
                s.trim(),
                format!("must contain {} characters", Self::LEN),
            ));
        }
        Ok(Self(normalized))
    }
}

// ── BreedName ────────────────────────────────────────────────────────────────

/// Normalised breed name; the identity key of the breed catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BreedName(String);

impl BreedName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BreedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for BreedName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = title_case(s);
        if name.is_empty() {
            return Err(DomainError::invalid("breed name", s, "must not be empty"));
        }
        Ok(Self(name))
    }
}

// ── Email ────────────────────────────────────────────────────────────────────

/// Contact email. Only the shape is checked: one `@` and at least one `.`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Email {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid("email", s, "must not be empty"));
        }
        if trimmed.matches('@').count() != 1 || !trimmed.contains('.') {
            return Err(DomainError::invalid(
                "email",
                trimmed,
                "must contain one '@' and a '.'",
            ));
        }
        Ok(Self(trimmed.to_owned()))
    }
}

// ── SizeClass ────────────────────────────────────────────────────────────────

/// Breed size class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizeClass {
    Small,
    Medium,
    Large,
    ExtraLarge,
    #[default]
    Unspecified,
}

impl SizeClass {
    /// Single-letter code; empty for `Unspecified`.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Small => "S",
            Self::Medium => "M",
            Self::Large => "L",
            Self::ExtraLarge => "X",
            Self::Unspecified => "",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
            Self::ExtraLarge => "Extra Large",
            Self::Unspecified => "Unspecified",
        }
    }

    pub const fn is_specified(&self) -> bool {
        !matches!(self, Self::Unspecified)
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SizeClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match label_key(s).as_str() {
            "" => Ok(Self::Unspecified),
            "s" | "small" => Ok(Self::Small),
            "m" | "medium" => Ok(Self::Medium),
            "l" | "large" => Ok(Self::Large),
            "x" | "extralarge" => Ok(Self::ExtraLarge),
            _ => Err(DomainError::invalid(
                "size",
                s.trim(),
                "expected one of S, M, L, X (Small, Medium, Large, Extra Large)",
            )),
        }
    }
}

// ── Sex ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Sex {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match label_key(s).as_str() {
            "m" | "male" => Ok(Self::Male),
            "f" | "female" => Ok(Self::Female),
            _ => Err(DomainError::invalid(
                "sex",
                s.trim(),
                "expected M (Male) or F (Female)",
            )),
        }
    }
}

// ── AgeClass ─────────────────────────────────────────────────────────────────

/// Age bucket used by adopter preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeClass {
    Puppy,
    Young,
    Adult,
    Senior,
}

impl AgeClass {
    /// Bucket an age in whole years: `<1` puppy, `<3` young, `<7` adult.
    pub const fn from_age(years: u32) -> Self {
        match years {
            0 => Self::Puppy,
            1..=2 => Self::Young,
            3..=6 => Self::Adult,
            _ => Self::Senior,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Puppy => "Puppy",
            Self::Young => "Young",
            Self::Adult => "Adult",
            Self::Senior => "Senior",
        }
    }
}

impl fmt::Display for AgeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AgeClass {
    type Err = DomainError;

    /// Accepts a class label or an age in years.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = label_key(s);
        if let Ok(years) = key.parse::<u32>() {
            return Ok(Self::from_age(years));
        }
        match key.as_str() {
            "puppy" => Ok(Self::Puppy),
            "young" => Ok(Self::Young),
            "adult" => Ok(Self::Adult),
            "senior" => Ok(Self::Senior),
            _ => Err(DomainError::invalid(
                "age class",
                s.trim(),
                "expected puppy, young, adult, senior or an age in years",
            )),
        }
    }
}

// ── Weight ───────────────────────────────────────────────────────────────────

/// Weight in kilograms. Finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    pub fn new(kg: f64) -> Result<Self, DomainError> {
        if !kg.is_finite() || kg <= 0.0 {
            return Err(DomainError::invalid(
                "weight",
                kg.to_string(),
                "must be a number greater than zero",
            ));
        }
        Ok(Self(kg))
    }

    pub const fn kg(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}kg", self.0)
    }
}

impl FromStr for Weight {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let kg: f64 = trimmed.parse().map_err(|_| {
            DomainError::invalid("weight", trimmed, "must be a number greater than zero")
        })?;
        Self::new(kg)
    }
}

// ── DogState ─────────────────────────────────────────────────────────────────

/// Adoption lifecycle state of a dog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DogState {
    #[default]
    Available,
    Reserved,
    Adopted,
}

impl DogState {
    pub const ALL: [Self; 3] = [Self::Available, Self::Reserved, Self::Adopted];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Reserved => "reserved",
            Self::Adopted => "adopted",
        }
    }
}

impl fmt::Display for DogState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DogState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match label_key(s).as_str() {
            "available" => Ok(Self::Available),
            "reserved" => Ok(Self::Reserved),
            "adopted" => Ok(Self::Adopted),
            _ => Err(DomainError::invalid(
                "state",
                s.trim(),
                "expected available, reserved or adopted",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_matches_stored_names() {
        assert_eq!(title_case("  gran danés "), "Gran Danés");
        assert_eq!(title_case("SAN BERNARDO"), "San Bernardo");
        assert_eq!(title_case("o'neil-smith"), "O'Neil-Smith");
        assert_eq!(title_case("   "), "");
    }

    #[test]
    fn size_parses_code_and_label() {
        assert_eq!("s".parse::<SizeClass>().unwrap(), SizeClass::Small);
        assert_eq!(" Medium ".parse::<SizeClass>().unwrap(), SizeClass::Medium);
        assert_eq!("extra large".parse::<SizeClass>().unwrap(), SizeClass::ExtraLarge);
        assert_eq!("X".parse::<SizeClass>().unwrap(), SizeClass::ExtraLarge);
        assert_eq!("".parse::<SizeClass>().unwrap(), SizeClass::Unspecified);
        assert!("huge".parse::<SizeClass>().is_err());
    }

    #[test]
    fn age_class_breakpoints() {
        assert_eq!(AgeClass::from_age(0), AgeClass::Puppy);
        assert_eq!(AgeClass::from_age(1), AgeClass::Young);
        assert_eq!(AgeClass::from_age(2), AgeClass::Young);
        assert_eq!(AgeClass::from_age(3), AgeClass::Adult);
        assert_eq!(AgeClass::from_age(6), AgeClass::Adult);
        assert_eq!(AgeClass::from_age(7), AgeClass::Senior);
        assert_eq!(AgeClass::from_age(13), AgeClass::Senior);
    }

    #[test]
    fn age_class_parses_label_or_years() {
        assert_eq!("Senior".parse::<AgeClass>().unwrap(), AgeClass::Senior);
        assert_eq!("4".parse::<AgeClass>().unwrap(), AgeClass::Adult);
        assert!("ancient".parse::<AgeClass>().is_err());
    }

    #[test]
    fn dni_is_normalised_and_length_checked() {
        let dni: Dni = " M5555555 ".parse().unwrap();
        assert_eq!(dni.as_str(), "m5555555");
        assert!("1234567".parse::<Dni>().is_err());
        assert!("123456789".parse::<Dni>().is_err());
    }

    #[test]
    fn email_shape() {
        assert!("ana@na.com".parse::<Email>().is_ok());
        assert!("ana.na.com".parse::<Email>().is_err());
        assert!("a@b@c.com".parse::<Email>().is_err());
        assert!("a@bc".parse::<Email>().is_err());
        assert!("   ".parse::<Email>().is_err());
    }

    #[test]
    fn dog_id_rejects_zero_and_garbage() {
        assert_eq!("7".parse::<DogId>().unwrap().get(), 7);
        assert!("0".parse::<DogId>().is_err());
        assert!("-3".parse::<DogId>().is_err());
        assert!("rex".parse::<DogId>().is_err());
    }

    #[test]
    fn dog_id_next_stops_at_max() {
        assert_eq!(DogId::first().next().map(DogId::get), Some(2));
        assert!(DogId::new(u32::MAX).unwrap().next().is_none());
    }

    #[test]
    fn weight_must_be_positive() {
        assert!("5.0".parse::<Weight>().is_ok());
        assert!("0".parse::<Weight>().is_err());
        assert!("-1".parse::<Weight>().is_err());
        assert!("NaN".parse::<Weight>().is_err());
    }

    #[test]
    fn free_text_normalisers() {
        assert_eq!(normalize_dog_name("  "), "Unnamed");
        assert_eq!(normalize_dog_name("la tuerta"), "La Tuerta");
        assert_eq!(normalize_temperament("  ENÉRGICO"), "Enérgico");
        assert_eq!(normalize_temperament(""), "");
        assert!(normalize_person_name(" ").is_err());
    }
}
