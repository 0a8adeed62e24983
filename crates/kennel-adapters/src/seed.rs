//! Built-in demo shelter.
//!
//! The records every fresh `kennel shell --seed` session and `kennel demo`
//! start from: seven breeds, six adopters and six available dogs.

use tracing::{debug, instrument};

use kennel_core::{
    application::AdoptionRegistry,
    domain::{NewAdopter, NewBreed, NewDog, Sex, SizeClass},
    error::KennelResult,
};

// (name, size, temperament)
const BREEDS: &[(&str, SizeClass, &str)] = &[
    ("Mestizo", SizeClass::Unspecified, ""),
    ("Chihuahua", SizeClass::Small, "Nervioso"),
    ("Dalmata", SizeClass::Large, "Enérgico"),
    ("Gran Danés", SizeClass::ExtraLarge, "Gentil"),
    ("Poodle", SizeClass::Medium, "Activo"),
    ("San Bernardo", SizeClass::ExtraLarge, "Tranquilo"),
    ("Pug", SizeClass::Small, "Divertido"),
];

// (name, dni, email)
const ADOPTERS: &[(&str, &str, &str)] = &[
    ("Tito", "11111111", "tatetito@bgmail.com"),
    ("Pepe", "22222222", "pepocho@pp.8"),
    ("Ana", "33333333", "ana@na.com"),
    ("Armando Esteban Quito", "44444444", "a@a.a"),
    ("Alan Brito", "M5555555", "dea@luminio.com"),
    ("Aquiles Bailo", "F6666666", "b@b.com"),
];

// (name, age, weight in kg, sex, breed, has_disability)
const DOGS: &[(&str, u32, &str, Sex, &str, bool)] = &[
    ("Pichichus", 1, "8.5", Sex::Male, "Chihuahua", false),
    ("Catrina", 2, "7", Sex::Female, "Chihuahua", false),
    ("La Tuerta", 13, "22.4", Sex::Female, "Mestizo", true),
    ("Tato", 2, "42", Sex::Male, "Dalmata", false),
    ("Milanga", 6, "12.5", Sex::Male, "Chihuahua", true),
    ("Panceta", 8, "99.9", Sex::Female, "Gran Danés", false),
];

/// Build a fresh registry holding the demo shelter.
#[instrument]
pub fn demo_shelter() -> KennelResult<AdoptionRegistry> {
    let mut registry = AdoptionRegistry::new();
    seed(&mut registry)?;
    debug!(
        breeds = BREEDS.len(),
        adopters = ADOPTERS.len(),
        dogs = DOGS.len(),
        "Demo shelter seeded"
    );
    Ok(registry)
}

/// Add the demo records to an existing registry.
///
/// Fails on the first record that clashes with one already registered.
pub fn seed(registry: &mut AdoptionRegistry) -> KennelResult<()> {
    for (name, size, temperament) in BREEDS {
        registry.register_breed(
            NewBreed::new(name.parse()?)
                .size(*size)
                .temperament(*temperament),
        )?;
    }

    for (name, dni, email) in ADOPTERS {
        registry.register_adopter(NewAdopter {
            name: (*name).to_owned(),
            dni: dni.parse()?,
            email: email.parse()?,
        })?;
    }

    for (name, age, weight, sex, breed, has_disability) in DOGS {
        registry.register_dog(NewDog {
            id: None,
            name: (*name).to_owned(),
            age: *age,
            weight: weight.parse()?,
            sex: *sex,
            breed: breed.parse()?,
            vaccinated: true,
            has_disability: *has_disability,
        })?;
    }

    Ok(())
}
