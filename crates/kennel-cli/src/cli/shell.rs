//! Grammar of one `kennel shell` line.
//!
//! Lines are split into words by [`crate::commands::shell::split_words`] and
//! parsed with clap, so every shell command gets typed arguments, `--help`
//! and error messages for free.

use clap::{Parser, Subcommand};

use kennel_core::domain::{BreedName, Dni, DogId, DogState, Email, Sex, SizeClass, Weight};

/// One parsed shell line.
#[derive(Debug, Parser)]
#[command(
    name = "kennel",
    no_binary_name = true,
    disable_version_flag = true,
    subcommand_required = true,
    help_template = "Commands:\n{subcommands}\n\nType '<command> --help' for details."
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Debug, Subcommand)]
pub enum ShellCommand {
    /// Manage the breed catalog.
    #[command(subcommand)]
    Breed(BreedCommand),

    /// Manage the shelter's dogs.
    #[command(subcommand)]
    Dog(DogCommand),

    /// Manage adopters.
    #[command(subcommand)]
    Adopter(AdopterCommand),

    /// Reserve an available dog for an adopter.
    Reserve {
        dog: DogId,
        dni: Dni,
    },

    /// Adopt a dog the same adopter has reserved.
    Adopt {
        dog: DogId,
        dni: Dni,
    },

    /// Return a reserved or adopted dog to the shelter.
    Return {
        dog: DogId,
        dni: Dni,
    },

    /// List available dogs matching an adopter's preferences.
    Suggest {
        dni: Dni,
    },

    /// Verify that dogs and adopters agree on every relationship.
    Check,

    /// End the session.
    #[command(visible_alias = "quit")]
    Exit,
}

#[derive(Debug, Subcommand)]
pub enum BreedCommand {
    /// Register a breed.
    Add {
        name: BreedName,
        /// S, M, L, X or the full label.
        #[arg(short, long)]
        size: Option<SizeClass>,
        #[arg(short, long)]
        temperament: Option<String>,
    },

    /// Show one breed.
    Show { name: BreedName },

    /// Change a breed's size or temperament.
    Edit {
        name: BreedName,
        #[arg(short, long)]
        size: Option<SizeClass>,
        #[arg(short, long)]
        temperament: Option<String>,
    },

    /// List all breeds.
    #[command(visible_alias = "ls")]
    List,
}

#[derive(Debug, Subcommand)]
pub enum DogCommand {
    /// Register a dog. Its breed must already exist.
    Add {
        name: String,
        #[arg(short, long)]
        age: u32,
        /// Kilograms.
        #[arg(short, long)]
        weight: Weight,
        /// M or F.
        #[arg(short, long)]
        sex: Sex,
        #[arg(short, long)]
        breed: BreedName,
        #[arg(long)]
        vaccinated: bool,
        #[arg(long)]
        disability: bool,
        /// Use this id instead of the next free one.
        #[arg(long)]
        id: Option<DogId>,
    },

    /// Show one dog.
    Show { id: DogId },

    /// Change a dog's descriptive fields.
    Edit {
        id: DogId,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        age: Option<u32>,
        #[arg(short, long)]
        weight: Option<Weight>,
        #[arg(short, long)]
        sex: Option<Sex>,
        #[arg(short, long)]
        breed: Option<BreedName>,
        #[arg(long, value_name = "YES|NO", value_parser = clap::builder::BoolishValueParser::new())]
        vaccinated: Option<bool>,
        #[arg(long, value_name = "YES|NO", value_parser = clap::builder::BoolishValueParser::new())]
        disability: Option<bool>,
    },

    /// Remove a dog, returning it first if someone holds it.
    #[command(visible_alias = "rm")]
    Remove { id: DogId },

    /// List dogs, optionally only those in one state.
    #[command(visible_alias = "ls")]
    List {
        #[arg(long)]
        state: Option<DogState>,
    },
}

#[derive(Debug, Subcommand)]
pub enum AdopterCommand {
    /// Register an adopter.
    Add {
        dni: Dni,
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        email: Email,
    },

    /// Show one adopter.
    Show { dni: Dni },

    /// Change an adopter's name or email.
    Edit {
        dni: Dni,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        email: Option<Email>,
    },

    /// Set preferences. Omitted ones are kept; `any` clears one.
    Prefs {
        dni: Dni,
        #[arg(short, long)]
        breed: Option<String>,
        /// Puppy, Young, Adult, Senior or an age in years.
        #[arg(short, long)]
        age: Option<String>,
        #[arg(short, long)]
        size: Option<String>,
    },

    /// Remove an adopter together with every dog they adopted.
    #[command(visible_alias = "rm")]
    Remove { dni: Dni },

    /// List all adopters.
    #[command(visible_alias = "ls")]
    List,

    /// List the dogs an adopter has adopted.
    History { dni: Dni },
}
