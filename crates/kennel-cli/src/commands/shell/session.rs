//! Execution of parsed shell commands against one shared registry.

use clap::Parser;
use clap::error::ErrorKind;
use tracing::{debug, instrument};

use kennel_adapters::SharedRegistry;
use kennel_core::prelude::*;

use crate::{
    cli::{AdopterCommand, BreedCommand, DogCommand, ShellCommand, ShellLine},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Whether the session keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session<'a> {
    registry: SharedRegistry,
    output: &'a OutputManager,
}

impl<'a> Session<'a> {
    pub fn new(registry: SharedRegistry, output: &'a OutputManager) -> Self {
        Self { registry, output }
    }

    /// Parse and run one line already split into words.
    pub fn run(&self, words: &[String]) -> CliResult<Flow> {
        match ShellLine::try_parse_from(words) {
            Ok(line) => self.dispatch(line.command),
            Err(e)
                if matches!(
                    e.kind(),
                    ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) =>
            {
                self.output.print(e.render().to_string().trim_end())?;
                Ok(Flow::Continue)
            }
            Err(e) => Err(CliError::InvalidCommand {
                message: e
                    .render()
                    .to_string()
                    .trim()
                    .trim_start_matches("error: ")
                    .to_owned(),
            }),
        }
    }

    #[instrument(skip_all)]
    fn dispatch(&self, command: ShellCommand) -> CliResult<Flow> {
        debug!(?command, "Running shell command");
        match command {
            ShellCommand::Breed(cmd) => self.breed(cmd)?,
            ShellCommand::Dog(cmd) => self.dog(cmd)?,
            ShellCommand::Adopter(cmd) => self.adopter(cmd)?,
            ShellCommand::Reserve { dog, dni } => {
                let (dog, adopter) = self.transition(dog, &dni, AdoptionRegistry::reserve)?;
                self.output.success(&format!("{dog} reserved by {adopter}"))?;
            }
            ShellCommand::Adopt { dog, dni } => {
                let (dog, adopter) = self.transition(dog, &dni, AdoptionRegistry::adopt)?;
                self.output.success(&format!("{dog} adopted by {adopter}"))?;
            }
            ShellCommand::Return { dog, dni } => {
                let (dog, adopter) = self.transition(dog, &dni, AdoptionRegistry::return_dog)?;
                self.output
                    .success(&format!("{dog} returned to the shelter by {adopter}"))?;
            }
            ShellCommand::Suggest { dni } => self.registry.read(|r| -> CliResult<()> {
                let adopter = r.get_adopter(&dni)?;
                let dogs = r.suggest(&dni)?;
                self.output.records(
                    &format!("Suggestions for {}", adopter.name()),
                    &dogs,
                    "No dogs match these preferences",
                    |d| dog_line(d),
                )?;
                Ok(())
            })??,
            ShellCommand::Check => {
                self.registry.read(AdoptionRegistry::verify_consistency)??;
                self.output.success("Dogs and adopters agree")?;
            }
            ShellCommand::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    /// Apply a dual-gated transition and name both parties for the message.
    fn transition(
        &self,
        dog: DogId,
        dni: &Dni,
        apply: fn(&mut AdoptionRegistry, DogId, &Dni) -> KennelResult<()>,
    ) -> CliResult<(String, String)> {
        let names = self.registry.write(|r| {
            apply(r, dog, dni)?;
            let dog = r.get_dog(dog)?;
            let adopter = r.get_adopter(dni)?;
            Ok((
                format!("{} (#{})", dog.name(), dog.id()),
                adopter.name().to_owned(),
            ))
        })?;
        Ok(names)
    }

    // ── breed ──────────────────────────────────────────────────────────────

    fn breed(&self, cmd: BreedCommand) -> CliResult<()> {
        match cmd {
            BreedCommand::Add {
                name,
                size,
                temperament,
            } => {
                let new = NewBreed::new(name)
                    .size(size.unwrap_or_default())
                    .temperament(temperament.unwrap_or_default());
                let breed = self.registry.write(|r| r.register_breed(new).cloned())?;
                self.output.record("New breed", &breed)?;
            }
            BreedCommand::Show { name } => self.registry.read(|r| -> CliResult<()> {
                self.output.record("Breed", r.get_breed(&name)?)?;
                Ok(())
            })??,
            BreedCommand::Edit {
                name,
                size,
                temperament,
            } => {
                let breed = self.registry.write(|r| {
                    let breed = r.breed_mut(&name)?;
                    if let Some(size) = size {
                        breed.set_size(size);
                    }
                    if let Some(temperament) = temperament {
                        breed.set_temperament(&temperament);
                    }
                    Ok(breed.clone())
                })?;
                self.output.record("Breed updated", &breed)?;
            }
            BreedCommand::List => self.registry.read(|r| -> CliResult<()> {
                let breeds: Vec<&Breed> = r.breeds().collect();
                self.output
                    .records("Breeds", &breeds, "No breeds registered", |b| breed_line(b))?;
                Ok(())
            })??,
        }
        Ok(())
    }

    // ── dog ────────────────────────────────────────────────────────────────

    fn dog(&self, cmd: DogCommand) -> CliResult<()> {
        match cmd {
            DogCommand::Add {
                name,
                age,
                weight,
                sex,
                breed,
                vaccinated,
                disability,
                id,
            } => {
                let new = NewDog {
                    id,
                    name,
                    age,
                    weight,
                    sex,
                    breed,
                    vaccinated,
                    has_disability: disability,
                };
                let dog = self.registry.write(|r| r.register_dog(new).cloned())?;
                self.output.record("New dog", &dog)?;
            }
            DogCommand::Show { id } => self.registry.read(|r| -> CliResult<()> {
                self.output.record("Dog", r.get_dog(id)?)?;
                Ok(())
            })??,
            DogCommand::Edit {
                id,
                name,
                age,
                weight,
                sex,
                breed,
                vaccinated,
                disability,
            } => {
                let dog = self.registry.write(|r| {
                    r.get_dog(id)?;
                    if let Some(breed) = &breed {
                        r.change_dog_breed(id, breed)?;
                    }
                    let dog = r.dog_mut(id)?;
                    if let Some(name) = &name {
                        dog.rename(name);
                    }
                    if let Some(age) = age {
                        dog.set_age(age);
                    }
                    if let Some(weight) = weight {
                        dog.set_weight(weight);
                    }
                    if let Some(sex) = sex {
                        dog.set_sex(sex);
                    }
                    if let Some(vaccinated) = vaccinated {
                        dog.set_vaccinated(vaccinated);
                    }
                    if let Some(disability) = disability {
                        dog.set_disability(disability);
                    }
                    Ok(dog.clone())
                })?;
                self.output.record("Dog updated", &dog)?;
            }
            DogCommand::Remove { id } => {
                let dog = self.registry.write(|r| r.remove_dog(id))?;
                self.output
                    .success(&format!("Removed {} (#{})", dog.name(), dog.id()))?;
            }
            DogCommand::List { state } => self.registry.read(|r| -> CliResult<()> {
                let dogs: Vec<&Dog> = match state {
                    Some(state) => r.list_by_state(state),
                    None => r.dogs().collect(),
                };
                let title = match state {
                    Some(state) => format!("Dogs ({state})"),
                    None => "Dogs".to_owned(),
                };
                self.output
                    .records(&title, &dogs, "No dogs found", |d| dog_line(d))?;
                Ok(())
            })??,
        }
        Ok(())
    }

    // ── adopter ────────────────────────────────────────────────────────────

    fn adopter(&self, cmd: AdopterCommand) -> CliResult<()> {
        match cmd {
            AdopterCommand::Add { dni, name, email } => {
                let adopter = self
                    .registry
                    .write(|r| r.register_adopter(NewAdopter { name, dni, email }).cloned())?;
                self.output.record("New adopter", &adopter)?;
            }
            AdopterCommand::Show { dni } => self.registry.read(|r| -> CliResult<()> {
                self.output.record("Adopter", r.get_adopter(&dni)?)?;
                Ok(())
            })??,
            AdopterCommand::Edit { dni, name, email } => {
                let adopter = self.registry.write(|r| {
                    let adopter = r.adopter_mut(&dni)?;
                    if let Some(name) = &name {
                        adopter.change_name(name)?;
                    }
                    if let Some(email) = email {
                        adopter.change_email(email);
                    }
                    Ok(adopter.clone())
                })?;
                self.output.record("Adopter updated", &adopter)?;
            }
            AdopterCommand::Prefs {
                dni,
                breed,
                age,
                size,
            } => {
                let preferences = self.registry.write(|r| {
                    let current = r.get_adopter(&dni)?.preferences().clone();
                    let preferences = Preferences {
                        breed: keep_or_parse(current.breed, breed.as_deref())?,
                        age_class: keep_or_parse(current.age_class, age.as_deref())?,
                        size: keep_or_parse(current.size, size.as_deref())?,
                    };
                    r.update_preferences(&dni, preferences)?;
                    Ok(r.get_adopter(&dni)?.preferences().clone())
                })?;
                self.output.record("Preferences updated", &preferences)?;
            }
            AdopterCommand::Remove { dni } => {
                let (adopter, dogs) = self.registry.write(|r| r.remove_adopter(&dni))?;
                self.output.success(&removal_line(&adopter, &dogs))?;
            }
            AdopterCommand::List => self.registry.read(|r| -> CliResult<()> {
                let adopters: Vec<&Adopter> = r.adopters().collect();
                self.output.records(
                    "Adopters",
                    &adopters,
                    "No adopters registered",
                    |a| adopter_line(a),
                )?;
                Ok(())
            })??,
            AdopterCommand::History { dni } => self.registry.read(|r| -> CliResult<()> {
                let adopter = r.get_adopter(&dni)?;
                let dogs = r.adoption_history(&dni)?;
                self.output.records(
                    &format!("Adopted by {}", adopter.name()),
                    &dogs,
                    "No adoptions yet",
                    |d| dog_line(d),
                )?;
                Ok(())
            })??,
        }
        Ok(())
    }
}

/// `None` keeps the current preference; otherwise parse, where blank or
/// `any` clears it.
fn keep_or_parse<T>(current: Option<T>, raw: Option<&str>) -> KennelResult<Option<T>>
where
    T: std::str::FromStr<Err = DomainError>,
{
    match raw {
        None => Ok(current),
        Some(raw) => Ok(Preferences::parse_optional(raw)?),
    }
}

pub(crate) fn breed_line(breed: &Breed) -> String {
    let size = if breed.size().is_specified() {
        breed.size().code()
    } else {
        "-"
    };
    format!(
        "{:<14} {:<2} {}",
        breed.name().as_str(),
        size,
        breed.temperament()
    )
}

pub(crate) fn dog_line(dog: &Dog) -> String {
    let holder = dog.held_by().map(Dni::as_str).unwrap_or("");
    format!(
        "#{:<3} {:<12} {:<12} {:>3}y {:<9} {}",
        dog.id().get(),
        dog.name(),
        dog.breed().as_str(),
        dog.age(),
        dog.state().as_str(),
        holder
    )
    .trim_end()
    .to_owned()
}

fn removal_line(adopter: &Adopter, dogs: &[Dog]) -> String {
    let mut line = format!("Removed {} ({})", adopter.name(), adopter.dni());
    if !dogs.is_empty() {
        let names: Vec<&str> = dogs.iter().map(Dog::name).collect();
        line.push_str(&format!(
            " and {} adopted dog(s): {}",
            dogs.len(),
            names.join(", ")
        ));
    }
    line
}

pub(crate) fn adopter_line(adopter: &Adopter) -> String {
    format!("{}  {}", adopter.dni().as_str(), adopter.name())
}
