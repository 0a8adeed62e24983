pub mod adopter;
pub mod breed;
pub mod dog;
pub mod preferences;

pub use adopter::{Adopter, NewAdopter, Person, PersonData};
pub use breed::{Breed, NewBreed};
pub use dog::{Dog, NewDog};
pub use preferences::Preferences;
