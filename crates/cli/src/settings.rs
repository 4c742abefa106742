//! Effective generator configuration: defaults, then the `--config` TOML
//! file, then individual command-line flags.

use std::path::Path;

use petseed_core::config::parse_shelter_id;
use petseed_core::{GeneratorConfig, PetStatus, SeedError};

use crate::GenerateArgs;

/// Read and parse a generator config TOML file from `path`.
///
/// Returns a human-readable error string on failure.
pub(crate) fn read_config(path: &Path) -> Result<GeneratorConfig, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("could not read '{}': {}", path.display(), e))?;

    toml::from_str(&content).map_err(|e| format!("could not parse '{}': {}", path.display(), e))
}

/// Build the configuration for one `generate` run.
pub(crate) fn resolve(args: &GenerateArgs) -> Result<GeneratorConfig, String> {
    let mut config = match &args.config {
        Some(path) => read_config(path)?,
        None => GeneratorConfig::default(),
    };
    apply_overrides(&mut config, args).map_err(|e| e.to_string())?;
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

fn apply_overrides(config: &mut GeneratorConfig, args: &GenerateArgs) -> Result<(), SeedError> {
    if let Some(count) = args.count {
        config.count = count;
    }
    if let Some(table) = &args.table {
        config.table_name = table.clone();
    }
    if let Some(out) = &args.out {
        config.output = out.clone();
    }

    let pet = &mut config.pet;
    if let Some(prefix) = &args.name_prefix {
        pet.name_prefix = prefix.clone();
    }
    if let Some(age) = args.age {
        pet.age = age;
    }
    if let Some(breed) = &args.breed {
        pet.breed = breed.clone();
    }
    if let Some(description) = &args.description {
        pet.description = description.clone();
    }
    if let Some(gender) = &args.gender {
        pet.gender = gender.clone();
    }
    if let Some(shelter_id) = &args.shelter_id {
        pet.shelter_id = parse_shelter_id(shelter_id)?;
    }
    if let Some(species) = &args.species {
        pet.species = species.clone();
    }
    if let Some(status) = &args.status {
        pet.status = status.parse::<PetStatus>()?;
    }
    Ok(())
}
