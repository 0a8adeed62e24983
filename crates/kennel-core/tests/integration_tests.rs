//! Integration tests for kennel-core.
//!
//! Every scenario re-checks the registry-wide consistency after each step.

use kennel_core::prelude::*;

fn dni(raw: &str) -> Dni {
    raw.parse().unwrap()
}

fn id(n: u32) -> DogId {
    DogId::new(n).unwrap()
}

fn dog(name: &str, age: u32, breed: &str) -> NewDog {
    NewDog {
        id: None,
        name: name.into(),
        age,
        weight: "5.0".parse().unwrap(),
        sex: Sex::Male,
        breed: breed.parse().unwrap(),
        vaccinated: true,
        has_disability: false,
    }
}

fn adopter(name: &str, dni: &str) -> NewAdopter {
    NewAdopter {
        name: name.into(),
        dni: dni.parse().unwrap(),
        email: format!("{}@mail.com", name.to_lowercase()).parse().unwrap(),
    }
}

fn shelter() -> AdoptionRegistry {
    let mut registry = AdoptionRegistry::new();
    registry
        .register_breed(NewBreed::new("Chihuahua".parse().unwrap()).size(SizeClass::Small))
        .unwrap();
    registry
        .register_breed(
            NewBreed::new("Gran Danés".parse().unwrap())
                .size(SizeClass::ExtraLarge)
                .temperament("gentil"),
        )
        .unwrap();
    registry.register_adopter(adopter("Tito", "11111111")).unwrap();
    registry.register_adopter(adopter("Pepe", "22222222")).unwrap();
    registry
}

fn assert_consistent(registry: &AdoptionRegistry) {
    registry
        .verify_consistency()
        .unwrap_or_else(|e| panic!("registry inconsistent: {e}"));
    for dog in registry.dogs() {
        assert_eq!(
            dog.state() == DogState::Available,
            dog.held_by().is_none(),
            "dog {}",
            dog.id()
        );
    }
    for adopter in registry.adopters() {
        if let Some(reserved) = adopter.reserved() {
            assert!(!adopter.history().contains(&reserved));
        }
    }
}

fn rejected_by(err: KennelError) -> Side {
    match err {
        KennelError::Application(ApplicationError::InvalidTransition { rejected_by, .. }) => {
            rejected_by
        }
        other => panic!("expected an invalid transition, got {other:?}"),
    }
}

#[test]
fn test_full_adoption_walkthrough() {
    let mut registry = AdoptionRegistry::new();
    registry
        .register_breed(NewBreed::new("Chihuahua".parse().unwrap()).size(SizeClass::Small))
        .unwrap();

    let rex = registry.register_dog(dog("Rex", 2, "Chihuahua")).unwrap();
    assert_eq!(rex.id(), id(1));
    assert_eq!(rex.state(), DogState::Available);

    registry.register_adopter(adopter("Tito", "11111111")).unwrap();
    let tito = dni("11111111");
    assert_consistent(&registry);

    registry.reserve(id(1), &tito).unwrap();
    assert_eq!(registry.get_dog(id(1)).unwrap().state(), DogState::Reserved);
    assert_eq!(registry.get_adopter(&tito).unwrap().reserved(), Some(id(1)));
    assert_consistent(&registry);

    registry.adopt(id(1), &tito).unwrap();
    let adopter = registry.get_adopter(&tito).unwrap();
    assert_eq!(registry.get_dog(id(1)).unwrap().state(), DogState::Adopted);
    assert_eq!(adopter.history(), [id(1)]);
    assert_eq!(adopter.reserved(), None);
    assert_consistent(&registry);

    assert!(registry.suggest(&tito).unwrap().is_empty());
}

#[test]
fn test_round_trip_restores_both_sides() {
    let mut registry = shelter();
    registry.register_dog(dog("Rex", 2, "Chihuahua")).unwrap();
    let tito = dni("11111111");
    let before = registry.get_adopter(&tito).unwrap().clone();

    registry.reserve(id(1), &tito).unwrap();
    registry.adopt(id(1), &tito).unwrap();
    registry.return_dog(id(1), &tito).unwrap();

    let dog = registry.get_dog(id(1)).unwrap();
    assert_eq!(dog.state(), DogState::Available);
    assert!(dog.held_by().is_none());
    assert_eq!(registry.get_adopter(&tito).unwrap(), &before);
    assert_consistent(&registry);

    // A returned dog can be reserved again, even by its previous owner.
    registry.reserve(id(1), &tito).unwrap();
    assert_consistent(&registry);
}

#[test]
fn test_cancel_reservation() {
    let mut registry = shelter();
    registry.register_dog(dog("Rex", 2, "Chihuahua")).unwrap();
    let tito = dni("11111111");

    registry.reserve(id(1), &tito).unwrap();
    registry.return_dog(id(1), &tito).unwrap();

    assert_eq!(registry.get_dog(id(1)).unwrap().state(), DogState::Available);
    assert_eq!(registry.get_adopter(&tito).unwrap().reserved(), None);
    assert!(registry.get_adopter(&tito).unwrap().history().is_empty());
    assert_consistent(&registry);
}

#[test]
fn test_double_reservation_by_two_adopters() {
    let mut registry = shelter();
    registry.register_dog(dog("Rex", 2, "Chihuahua")).unwrap();

    registry.reserve(id(1), &dni("11111111")).unwrap();
    let err = registry.reserve(id(1), &dni("22222222")).unwrap_err();

    assert_eq!(rejected_by(err), Side::Dog);
    assert_eq!(
        registry.get_dog(id(1)).unwrap().held_by(),
        Some(&dni("11111111"))
    );
    assert_eq!(registry.get_adopter(&dni("22222222")).unwrap().reserved(), None);
    assert_consistent(&registry);
}

#[test]
fn test_adopt_without_reservation_fails() {
    let mut registry = shelter();
    registry.register_dog(dog("Rex", 2, "Chihuahua")).unwrap();

    let err = registry.adopt(id(1), &dni("11111111")).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Conflict);
    assert!(err.to_string().contains("no prior reservation"));
    assert_consistent(&registry);
}

#[test]
fn test_adopt_someone_elses_reservation_fails() {
    let mut registry = shelter();
    registry.register_dog(dog("Rex", 2, "Chihuahua")).unwrap();
    registry.reserve(id(1), &dni("11111111")).unwrap();

    let err = registry.adopt(id(1), &dni("22222222")).unwrap_err();
    assert_eq!(rejected_by(err), Side::Both);
    assert_eq!(registry.get_dog(id(1)).unwrap().state(), DogState::Reserved);
    assert_consistent(&registry);
}

#[test]
fn test_return_by_non_holder_fails() {
    let mut registry = shelter();
    registry.register_dog(dog("Rex", 2, "Chihuahua")).unwrap();
    registry.reserve(id(1), &dni("11111111")).unwrap();
    registry.adopt(id(1), &dni("11111111")).unwrap();

    let err = registry.return_dog(id(1), &dni("22222222")).unwrap_err();
    assert!(err.to_string().contains("not your dog"));
    assert_eq!(registry.get_dog(id(1)).unwrap().state(), DogState::Adopted);

    registry.return_dog(id(1), &dni("11111111")).unwrap();
    assert_eq!(registry.get_dog(id(1)).unwrap().state(), DogState::Available);
    assert_consistent(&registry);
}

#[test]
fn test_returning_an_available_dog_fails() {
    let mut registry = shelter();
    registry.register_dog(dog("Rex", 2, "Chihuahua")).unwrap();

    let err = registry.return_dog(id(1), &dni("11111111")).unwrap_err();
    assert_eq!(rejected_by(err), Side::Both);
    assert_consistent(&registry);
}

#[test]
fn test_removed_adopter_keeps_single_adoption() {
    let mut registry = shelter();
    registry.register_dog(dog("Rex", 2, "Chihuahua")).unwrap();
    let tito = dni("11111111");
    registry.reserve(id(1), &tito).unwrap();
    registry.adopt(id(1), &tito).unwrap();

    let (removed, dogs) = registry.remove_adopter(&tito).unwrap();
    assert_eq!(removed.history(), [id(1)]);
    assert_eq!(dogs.len(), 1);
    assert_eq!(dogs[0].id(), id(1));
    assert!(registry.dogs().next().is_none());
    assert_consistent(&registry);
}

#[test]
fn test_remove_adopter_cascades() {
    let mut registry = shelter();
    for name in ["Rex", "Tato", "Milanga"] {
        registry.register_dog(dog(name, 3, "Chihuahua")).unwrap();
    }
    let tito = dni("11111111");
    registry.reserve(id(1), &tito).unwrap();
    registry.adopt(id(1), &tito).unwrap();
    registry.reserve(id(2), &tito).unwrap();
    registry.adopt(id(2), &tito).unwrap();
    registry.reserve(id(3), &tito).unwrap();
    assert_consistent(&registry);

    let (removed, dogs) = registry.remove_adopter(&tito).unwrap();
    assert_eq!(removed.history(), [id(1), id(2)]);
    assert_eq!(removed.reserved(), Some(id(3)));
    let names: Vec<&str> = dogs.iter().map(|d| d.name()).collect();
    assert_eq!(names, ["Rex", "Tato"]);

    assert!(registry.find_adopter(&tito).is_none());
    assert!(registry.find_dog(id(1)).is_none());
    assert!(registry.find_dog(id(2)).is_none());
    assert_eq!(
        registry.get_dog(id(1)).unwrap_err().category(),
        ErrorCategory::NotFound
    );
    // The reserved dog goes back to the shelter instead of being removed.
    assert_eq!(registry.get_dog(id(3)).unwrap().state(), DogState::Available);
    assert_consistent(&registry);
}

#[test]
fn test_remove_adopted_dog_shrinks_history() {
    let mut registry = shelter();
    registry.register_dog(dog("Rex", 2, "Chihuahua")).unwrap();
    registry.register_dog(dog("Tato", 2, "Chihuahua")).unwrap();
    let pepe = dni("22222222");
    for n in [1, 2] {
        registry.reserve(id(n), &pepe).unwrap();
        registry.adopt(id(n), &pepe).unwrap();
    }

    registry.remove_dog(id(1)).unwrap();
    assert_eq!(registry.get_adopter(&pepe).unwrap().history(), [id(2)]);
    assert_consistent(&registry);

    assert_eq!(
        registry.remove_dog(id(1)).unwrap_err().category(),
        ErrorCategory::NotFound
    );
}

#[test]
fn test_suggest_applies_state_history_and_preferences() {
    let mut registry = shelter();
    registry.register_dog(dog("Pichichus", 0, "Chihuahua")).unwrap(); // 1 puppy
    registry.register_dog(dog("Catrina", 2, "Chihuahua")).unwrap(); // 2 young
    registry.register_dog(dog("Panceta", 2, "gran danés")).unwrap(); // 3 young, X
    registry.register_dog(dog("Milanga", 6, "Chihuahua")).unwrap(); // 4 adult

    let tito = dni("11111111");
    let pepe = dni("22222222");
    registry.reserve(id(2), &pepe).unwrap();

    let all: Vec<DogId> = registry.suggest(&tito).unwrap().iter().map(|d| d.id()).collect();
    assert_eq!(all, [id(1), id(3), id(4)]);

    registry
        .update_preferences(
            &tito,
            Preferences::default().age_class(AgeClass::Young),
        )
        .unwrap();
    let young: Vec<&str> = registry.suggest(&tito).unwrap().iter().map(|d| d.name()).collect();
    assert_eq!(young, ["Panceta"]);

    registry
        .update_preferences(
            &tito,
            Preferences::default()
                .breed("chihuahua".parse().unwrap())
                .size(SizeClass::Small),
        )
        .unwrap();
    let chis: Vec<&str> = registry.suggest(&tito).unwrap().iter().map(|d| d.name()).collect();
    assert_eq!(chis, ["Pichichus", "Milanga"]);
}

#[test]
fn test_list_by_state() {
    let mut registry = shelter();
    for name in ["A", "B", "C", "D"] {
        registry.register_dog(dog(name, 1, "Chihuahua")).unwrap();
    }
    registry.reserve(id(2), &dni("11111111")).unwrap();
    registry.reserve(id(4), &dni("22222222")).unwrap();
    registry.adopt(id(4), &dni("22222222")).unwrap();

    let names = |state| -> Vec<String> {
        registry
            .list_by_state(state)
            .iter()
            .map(|d| d.name().to_string())
            .collect()
    };
    assert_eq!(names(DogState::Available), ["A", "C"]);
    assert_eq!(names(DogState::Reserved), ["B"]);
    assert_eq!(names(DogState::Adopted), ["D"]);
}

#[test]
fn test_lookups_strict_and_lenient() {
    let registry = shelter();
    let poodle: BreedName = "Poodle".parse().unwrap();

    assert!(registry.find_breed(&poodle).is_none());
    let err = registry.get_breed(&poodle).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::NotFound);
    assert!(!err.suggestions().is_empty());

    let danes: BreedName = "  GRAN danés".parse().unwrap();
    assert_eq!(registry.get_breed(&danes).unwrap().temperament(), "Gentil");
}

#[test]
fn test_adoption_history_lists_dogs_in_order() {
    let mut registry = shelter();
    registry.register_dog(dog("Rex", 2, "Chihuahua")).unwrap();
    registry.register_dog(dog("Tato", 2, "Chihuahua")).unwrap();
    let tito = dni("11111111");
    for n in [2, 1] {
        registry.reserve(id(n), &tito).unwrap();
        registry.adopt(id(n), &tito).unwrap();
    }

    let names: Vec<&str> = registry
        .adoption_history(&tito)
        .unwrap()
        .iter()
        .map(|d| d.name())
        .collect();
    assert_eq!(names, ["Tato", "Rex"]);
}

#[test]
fn test_editing_descriptive_fields() {
    let mut registry = shelter();
    registry.register_dog(dog("Rex", 2, "Chihuahua")).unwrap();
    let tito = dni("11111111");

    registry.dog_mut(id(1)).unwrap().rename("  firulais ");
    registry.dog_mut(id(1)).unwrap().set_age(4);
    registry
        .adopter_mut(&tito)
        .unwrap()
        .change_email("tito@new.org".parse().unwrap());
    registry
        .breed_mut(&"Chihuahua".parse().unwrap())
        .unwrap()
        .set_temperament("nervioso");

    let rex = registry.get_dog(id(1)).unwrap();
    assert_eq!(rex.name(), "Firulais");
    assert_eq!(rex.age(), 4);
    assert_eq!(registry.get_adopter(&tito).unwrap().email().as_str(), "tito@new.org");
    assert_consistent(&registry);
}

#[test]
fn test_invalid_values_propagate() {
    let mut registry = shelter();
    let err = registry
        .register_adopter(NewAdopter {
            name: "   ".into(),
            dni: dni("33333333"),
            email: "ana@na.com".parse().unwrap(),
        })
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Validation);
    assert!(registry.find_adopter(&dni("33333333")).is_none());

    assert!("1234".parse::<Dni>().is_err());
    assert!("0".parse::<DogId>().is_err());
    assert!("-3.5".parse::<Weight>().is_err());
}

#[test]
fn test_entities_serialize_for_json_output() {
    let mut registry = shelter();
    registry.register_dog(dog("Rex", 2, "Chihuahua")).unwrap();
    registry.reserve(id(1), &dni("11111111")).unwrap();

    let json = serde_json::to_value(registry.get_dog(id(1)).unwrap()).unwrap();
    assert_eq!(json["id"], 1);
    assert_eq!(json["state"], "reserved");
    assert_eq!(json["held_by"], "11111111");
}
