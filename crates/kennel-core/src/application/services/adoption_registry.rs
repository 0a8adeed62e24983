//! Adoption Registry - the only place a dog and an adopter change together.
//!
//! Every lifecycle operation follows the same dual-gated sequence:
//! 1. Resolve the dog and the adopter (`NotFound` if either is missing)
//! 2. Ask both sides whether they allow the operation
//! 3. Refuse with `InvalidTransition` if either says no; nothing mutates
//! 4. Apply the adopter side, then the dog side
//!
//! Registration, editing, cascading removal and the suggestion filter live
//! here too, since they all touch more than one collection.

use std::collections::BTreeMap;

use tracing::{debug, info, instrument};

use crate::{
    application::error::{ApplicationError, EntityKind, Operation, Side},
    domain::{
        Adopter, Breed, BreedName, Dni, Dog, DogId, DogState, NewAdopter, NewBreed, NewDog,
        Preferences,
    },
    error::{KennelError, KennelResult},
};

/// In-memory adoption registry.
///
/// Constructed explicitly and owned by the caller; tests build as many
/// isolated instances as they need.
#[derive(Debug, Clone)]
pub struct AdoptionRegistry {
    breeds: BTreeMap<BreedName, Breed>,
    dogs: BTreeMap<DogId, Dog>,
    adopters: BTreeMap<Dni, Adopter>,
    next_dog_id: DogId,
}

impl Default for AdoptionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AdoptionRegistry {
    pub fn new() -> Self {
        Self {
            breeds: BTreeMap::new(),
            dogs: BTreeMap::new(),
            adopters: BTreeMap::new(),
            next_dog_id: DogId::first(),
        }
    }

    // -------------------------------------------------------------------------
    // Registration
    // -------------------------------------------------------------------------

    #[instrument(skip_all, fields(breed = %new.name))]
    pub fn register_breed(&mut self, new: NewBreed) -> KennelResult<&Breed> {
        if self.breeds.contains_key(&new.name) {
            return Err(ApplicationError::duplicate(EntityKind::Breed, &new.name).into());
        }
        let key = new.name.clone();
        let breed = self.breeds.entry(key).or_insert(Breed::new(new));
        info!(size = %breed.size(), "Breed registered");
        Ok(breed)
    }

    /// Register a dog. The breed must already be catalogued. When `new.id`
    /// is empty the next free id from the counter is used.
    #[instrument(skip_all, fields(dog = %new.name, breed = %new.breed))]
    pub fn register_dog(&mut self, new: NewDog) -> KennelResult<&Dog> {
        if !self.breeds.contains_key(&new.breed) {
            return Err(ApplicationError::not_found(EntityKind::Breed, &new.breed).into());
        }

        let id = match new.id {
            Some(id) if self.dogs.contains_key(&id) => {
                return Err(ApplicationError::duplicate(EntityKind::Dog, id).into());
            }
            Some(id) => id,
            None => self.allocate_dog_id()?,
        };

        let dog = self.dogs.entry(id).or_insert(Dog::new(id, new));
        info!(id = %dog.id(), "Dog registered");
        Ok(dog)
    }

    #[instrument(skip_all, fields(dni = %new.dni))]
    pub fn register_adopter(&mut self, new: NewAdopter) -> KennelResult<&Adopter> {
        if self.adopters.contains_key(&new.dni) {
            return Err(ApplicationError::duplicate(EntityKind::Adopter, &new.dni).into());
        }
        let adopter = Adopter::new(new)?;
        let adopter = self
            .adopters
            .entry(adopter.dni().clone())
            .or_insert(adopter);
        info!(name = adopter.name(), "Adopter registered");
        Ok(adopter)
    }

    /// Next counter value not already taken by a caller-supplied id.
    fn allocate_dog_id(&mut self) -> KennelResult<DogId> {
        let exhausted = || KennelError::internal("no dog ids left to assign");
        let mut id = self.next_dog_id;
        while self.dogs.contains_key(&id) {
            id = id.next().ok_or_else(exhausted)?;
        }
        // The last id stays in the counter; the loop above refuses it once taken.
        self.next_dog_id = id.next().unwrap_or(id);
        Ok(id)
    }

    // -------------------------------------------------------------------------
    // Lookup
    // -------------------------------------------------------------------------
    //
    // `find_*` is the lenient lookup (absent → `None`), `get_*` the strict
    // one (absent → `NotFound`).

    pub fn find_breed(&self, name: &BreedName) -> Option<&Breed> {
        self.breeds.get(name)
    }

    pub fn get_breed(&self, name: &BreedName) -> KennelResult<&Breed> {
        self.find_breed(name)
            .ok_or_else(|| ApplicationError::not_found(EntityKind::Breed, name).into())
    }

    pub fn find_dog(&self, id: DogId) -> Option<&Dog> {
        self.dogs.get(&id)
    }

    pub fn get_dog(&self, id: DogId) -> KennelResult<&Dog> {
        self.find_dog(id)
            .ok_or_else(|| ApplicationError::not_found(EntityKind::Dog, id).into())
    }

    pub fn find_adopter(&self, dni: &Dni) -> Option<&Adopter> {
        self.adopters.get(dni)
    }

    pub fn get_adopter(&self, dni: &Dni) -> KennelResult<&Adopter> {
        self.find_adopter(dni)
            .ok_or_else(|| ApplicationError::not_found(EntityKind::Adopter, dni).into())
    }

    /// Breeds ordered by name.
    pub fn breeds(&self) -> impl Iterator<Item = &Breed> {
        self.breeds.values()
    }

    /// Dogs ordered by id.
    pub fn dogs(&self) -> impl Iterator<Item = &Dog> {
        self.dogs.values()
    }

    /// Adopters ordered by DNI.
    pub fn adopters(&self) -> impl Iterator<Item = &Adopter> {
        self.adopters.values()
    }

    /// The adopter currently reserving or owning `id`, if any.
    pub fn holder_of(&self, id: DogId) -> KennelResult<Option<&Adopter>> {
        let dog = self.get_dog(id)?;
        match dog.held_by() {
            Some(dni) => self.get_adopter(dni).map(Some).map_err(|_| {
                KennelError::internal(format!("dog {id} is held by unknown adopter {dni}"))
            }),
            None => Ok(None),
        }
    }

    // -------------------------------------------------------------------------
    // Editing
    // -------------------------------------------------------------------------

    /// Mutable access to a breed's size and temperament.
    pub fn breed_mut(&mut self, name: &BreedName) -> KennelResult<&mut Breed> {
        self.breeds
            .get_mut(name)
            .ok_or_else(|| ApplicationError::not_found(EntityKind::Breed, name).into())
    }

    /// Mutable access to a dog's descriptive fields. Lifecycle fields stay
    /// out of reach.
    pub fn dog_mut(&mut self, id: DogId) -> KennelResult<&mut Dog> {
        self.dogs
            .get_mut(&id)
            .ok_or_else(|| ApplicationError::not_found(EntityKind::Dog, id).into())
    }

    /// Mutable access to an adopter's personal data.
    pub fn adopter_mut(&mut self, dni: &Dni) -> KennelResult<&mut Adopter> {
        self.adopters
            .get_mut(dni)
            .ok_or_else(|| ApplicationError::not_found(EntityKind::Adopter, dni).into())
    }

    #[instrument(skip(self))]
    pub fn change_dog_breed(&mut self, id: DogId, breed: &BreedName) -> KennelResult<()> {
        self.get_breed(breed)?;
        self.dog_mut(id)?.set_breed(breed.clone());
        debug!("Dog breed changed");
        Ok(())
    }

    /// Replace an adopter's preferences. A breed preference must name a
    /// catalogued breed.
    #[instrument(skip(self, preferences))]
    pub fn update_preferences(&mut self, dni: &Dni, preferences: Preferences) -> KennelResult<()> {
        if let Some(breed) = &preferences.breed {
            self.get_breed(breed)?;
        }
        let preferences = Preferences {
            size: preferences.size.filter(|s| s.is_specified()),
            ..preferences
        };
        self.adopter_mut(dni)?.set_preferences(preferences);
        debug!("Preferences updated");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Lifecycle (dual-gated)
    // -------------------------------------------------------------------------

    pub fn reserve(&mut self, dog: DogId, adopter: &Dni) -> KennelResult<()> {
        self.transition(Operation::Reserve, dog, adopter)
    }

    pub fn adopt(&mut self, dog: DogId, adopter: &Dni) -> KennelResult<()> {
        self.transition(Operation::Adopt, dog, adopter)
    }

    /// Return a reserved or adopted dog to the shelter.
    pub fn return_dog(&mut self, dog: DogId, adopter: &Dni) -> KennelResult<()> {
        self.transition(Operation::Return, dog, adopter)
    }

    #[instrument(skip(self), fields(operation = %operation, dog = %dog_id, adopter = %dni))]
    fn transition(&mut self, operation: Operation, dog_id: DogId, dni: &Dni) -> KennelResult<()> {
        let dog = self
            .dogs
            .get_mut(&dog_id)
            .ok_or_else(|| ApplicationError::not_found(EntityKind::Dog, dog_id))?;
        let adopter = self
            .adopters
            .get_mut(dni)
            .ok_or_else(|| ApplicationError::not_found(EntityKind::Adopter, dni))?;

        let (dog_allows, adopter_allows) = match operation {
            Operation::Reserve => (dog.can_reserve(dni), adopter.can_reserve(dog_id)),
            Operation::Adopt => (dog.can_adopt(dni), adopter.can_adopt(dog_id)),
            Operation::Return => (dog.can_return(dni), adopter.can_return(dog_id)),
        };

        let rejected_by = match (dog_allows, adopter_allows) {
            (true, true) => None,
            (false, true) => Some(Side::Dog),
            (true, false) => Some(Side::Adopter),
            (false, false) => Some(Side::Both),
        };

        if let Some(side) = rejected_by {
            let reason = operation.rejection_reason(side);
            info!(rejected_by = %side, reason, "Transition rejected");
            return Err(ApplicationError::InvalidTransition {
                operation,
                dog: dog_id,
                adopter: dni.clone(),
                rejected_by: side,
                reason,
            }
            .into());
        }

        let applied = match operation {
            Operation::Reserve => adopter.reserve(dog_id) && dog.reserve(dni),
            Operation::Adopt => adopter.adopt(dog_id) && dog.adopt(dni),
            Operation::Return => adopter.release(dog_id) && dog.release(dni),
        };
        if !applied {
            return Err(KennelError::internal(format!(
                "{operation} of dog {dog_id} passed both guards but did not apply"
            )));
        }

        info!(state = %dog.state(), "Transition applied");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Removal (cascading)
    // -------------------------------------------------------------------------

    /// Remove a dog, first returning it from whoever holds it.
    #[instrument(skip(self))]
    pub fn remove_dog(&mut self, id: DogId) -> KennelResult<Dog> {
        let holder = self.get_dog(id)?.held_by().cloned();
        if let Some(holder) = holder {
            self.force_return(id, &holder)?;
        }
        let dog = self
            .dogs
            .remove(&id)
            .ok_or_else(|| KennelError::internal(format!("dog {id} vanished during removal")))?;
        info!(name = dog.name(), "Dog removed");
        Ok(dog)
    }

    /// Remove an adopter: their reservation goes back to the shelter and
    /// every dog they adopted is removed from the registry.
    ///
    /// Returns the adopter as it was registered, history included, together
    /// with the removed dogs in adoption order.
    #[instrument(skip(self))]
    pub fn remove_adopter(&mut self, dni: &Dni) -> KennelResult<(Adopter, Vec<Dog>)> {
        let snapshot = self.get_adopter(dni)?.clone();
        let reserved = snapshot.reserved();

        if let Some(id) = reserved {
            self.force_return(id, dni)?;
        }
        let removed = snapshot
            .history()
            .iter()
            .map(|id| self.remove_dog(*id))
            .collect::<KennelResult<Vec<_>>>()?;

        self.adopters.remove(dni).ok_or_else(|| {
            KennelError::internal(format!("adopter {dni} vanished during removal"))
        })?;
        info!(
            released = reserved.is_some(),
            removed_dogs = removed.len(),
            "Adopter removed"
        );
        Ok((snapshot, removed))
    }

    /// A return the registry performs on its own behalf. If it is refused,
    /// the two views already disagreed.
    fn force_return(&mut self, id: DogId, holder: &Dni) -> KennelResult<()> {
        self.return_dog(id, holder).map_err(|e| {
            KennelError::internal(format!("forced return of dog {id} from {holder} failed: {e}"))
        })
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn list_by_state(&self, state: DogState) -> Vec<&Dog> {
        self.dogs.values().filter(|d| d.state() == state).collect()
    }

    /// Available dogs the adopter has not adopted and whose traits satisfy
    /// every preference the adopter has set.
    #[instrument(skip(self))]
    pub fn suggest(&self, dni: &Dni) -> KennelResult<Vec<&Dog>> {
        let adopter = self.get_adopter(dni)?;
        let preferences = adopter.preferences();

        let matches: Vec<&Dog> = self
            .dogs
            .values()
            .filter(|dog| dog.state() == DogState::Available)
            .filter(|dog| !adopter.has_adopted(dog.id()))
            .filter(|dog| {
                self.breeds
                    .get(dog.breed())
                    .is_some_and(|breed| preferences.matches(dog, breed))
            })
            .collect();

        debug!(count = matches.len(), "Suggestions computed");
        Ok(matches)
    }

    /// Dogs in the adopter's adoption history, in adoption order.
    pub fn adoption_history(&self, dni: &Dni) -> KennelResult<Vec<&Dog>> {
        let adopter = self.get_adopter(dni)?;
        adopter
            .history()
            .iter()
            .map(|id| {
                self.find_dog(*id).ok_or_else(|| {
                    KennelError::internal(format!("adopter {dni} owns unknown dog {id}"))
                })
            })
            .collect()
    }

    /// Check that the dog-side and adopter-side views agree everywhere.
    ///
    /// Returns the first disagreement as an `Internal` error.
    pub fn verify_consistency(&self) -> KennelResult<()> {
        for dog in self.dogs.values() {
            let id = dog.id();
            if !self.breeds.contains_key(dog.breed()) {
                return Err(KennelError::internal(format!(
                    "dog {id} refers to unknown breed {}",
                    dog.breed()
                )));
            }
            match (dog.state(), dog.held_by()) {
                (DogState::Available, None) => {}
                (DogState::Available, Some(dni)) => {
                    return Err(KennelError::internal(format!(
                        "available dog {id} is held by {dni}"
                    )));
                }
                (state, None) => {
                    return Err(KennelError::internal(format!(
                        "{state} dog {id} has no holder"
                    )));
                }
                (state, Some(dni)) => {
                    let adopter = self.find_adopter(dni).ok_or_else(|| {
                        KennelError::internal(format!("dog {id} held by unknown adopter {dni}"))
                    })?;
                    let mirrored = match state {
                        DogState::Reserved => adopter.reserved() == Some(id),
                        _ => adopter.has_adopted(id),
                    };
                    if !mirrored {
                        return Err(KennelError::internal(format!(
                            "{state} dog {id} is not mirrored on adopter {dni}"
                        )));
                    }
                }
            }
        }

        for adopter in self.adopters.values() {
            let dni = adopter.dni();
            let expectations = adopter
                .reserved()
                .map(|id| (id, DogState::Reserved))
                .into_iter()
                .chain(adopter.history().iter().map(|id| (*id, DogState::Adopted)));

            for (id, expected) in expectations {
                let dog = self.find_dog(id).ok_or_else(|| {
                    KennelError::internal(format!("adopter {dni} refers to unknown dog {id}"))
                })?;
                if dog.state() != expected || dog.held_by() != Some(dni) {
                    return Err(KennelError::internal(format!(
                        "adopter {dni} expects dog {id} {expected}, found {} held by {:?}",
                        dog.state(),
                        dog.held_by().map(Dni::as_str)
                    )));
                }
            }

            if let Some(id) = adopter.reserved() {
                if adopter.has_adopted(id) {
                    return Err(KennelError::internal(format!(
                        "adopter {dni} both reserved and adopted dog {id}"
                    )));
                }
            }
            let mut seen = adopter.history().to_vec();
            seen.sort_unstable();
            seen.dedup();
            if seen.len() != adopter.history().len() {
                return Err(KennelError::internal(format!(
                    "adopter {dni} has duplicate entries in adoption history"
                )));
            }
        }

        Ok(())
    }
}
