//! `kennel demo`: print the demo shelter used by `kennel shell --seed`.

use std::fmt;

use serde::Serialize;

use kennel_adapters::demo_shelter;
use kennel_core::domain::{Adopter, Breed, Dog};

use crate::{
    cli::{DemoArgs, DemoSection, OutputFormat},
    commands::shell::{adopter_line, breed_line, dog_line},
    error::CliResult,
    output::OutputManager,
};

#[derive(Serialize)]
struct Shelter<'a> {
    breeds: Vec<&'a Breed>,
    dogs: Vec<&'a Dog>,
    adopters: Vec<&'a Adopter>,
}

impl fmt::Display for Shelter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} breeds, {} dogs, {} adopters",
            self.breeds.len(),
            self.dogs.len(),
            self.adopters.len()
        )
    }
}

pub fn execute(args: DemoArgs, output: OutputManager) -> CliResult<()> {
    let registry = demo_shelter()?;
    let shelter = Shelter {
        breeds: registry.breeds().collect(),
        dogs: registry.dogs().collect(),
        adopters: registry.adopters().collect(),
    };

    let show = |section: DemoSection| args.section.is_none_or(|s| s == section);

    if args.section.is_none() && output.format() == OutputFormat::Json {
        output.record("Shelter", &shelter)?;
        return Ok(());
    }

    if show(DemoSection::Breeds) {
        output.records("Breeds", &shelter.breeds, "No breeds", |b| breed_line(b))?;
    }
    if show(DemoSection::Dogs) {
        output.records("Dogs", &shelter.dogs, "No dogs", |d| dog_line(d))?;
    }
    if show(DemoSection::Adopters) {
        output.records("Adopters", &shelter.adopters, "No adopters", |a| adopter_line(a))?;
    }
    Ok(())
}
