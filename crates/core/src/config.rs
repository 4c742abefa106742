//! Generator configuration.
//!
//! Every field has a default reproducing the stock seeding run, so an empty
//! TOML document is a valid configuration.
//!
//! # Example
//!
//! ```toml
//! count = 24
//! table_name = "pawfectmatch-development-shelter-hub-pets"
//! output = "pets.json"
//!
//! [pet]
//! name_prefix = "Doggo"
//! age = 30
//! status = "Available"
//! ```

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SeedError;

pub const DEFAULT_COUNT: usize = 24;
pub const DEFAULT_TABLE_NAME: &str = "pawfectmatch-development-shelter-hub-pets";
pub const DEFAULT_OUTPUT: &str = "pets.json";
pub const DEFAULT_SHELTER_ID: Uuid = uuid::uuid!("522e6b8b-64ed-4bf0-88c2-a44081535338");

// ── Types ─────────────────────────────────────────────────────────────────────

/// Adoption status of a pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PetStatus {
    #[default]
    Available,
    Pending,
    Adopted,
    MedicalHold,
}

impl PetStatus {
    pub const ALL: [PetStatus; 4] = [
        PetStatus::Available,
        PetStatus::Pending,
        PetStatus::Adopted,
        PetStatus::MedicalHold,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PetStatus::Available => "Available",
            PetStatus::Pending => "Pending",
            PetStatus::Adopted => "Adopted",
            PetStatus::MedicalHold => "MedicalHold",
        }
    }
}

impl fmt::Display for PetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive, for command-line use. TOML goes through serde and
/// requires the exact variant name.
impl FromStr for PetStatus {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PetStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let valid: Vec<&str> = PetStatus::ALL.iter().map(PetStatus::as_str).collect();
                SeedError::Config(format!(
                    "unknown pet status '{}' (expected one of: {})",
                    s,
                    valid.join(", ")
                ))
            })
    }
}

/// Field values shared by every generated record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PetTemplate {
    /// Display names are this prefix followed by the record index.
    pub name_prefix: String,
    /// Age in years.
    pub age: u32,
    pub breed: String,
    /// Free-form HTML description.
    pub description: String,
    pub gender: String,
    /// Shelter that owns every generated pet.
    pub shelter_id: Uuid,
    pub species: String,
    pub status: PetStatus,
}

impl Default for PetTemplate {
    fn default() -> Self {
        PetTemplate {
            name_prefix: "Doggo".to_string(),
            age: 30,
            breed: "jack russell terrier".to_string(),
            description: "<p>afwefawef</p>".to_string(),
            gender: "Male".to_string(),
            shelter_id: DEFAULT_SHELTER_ID,
            species: "Dog".to_string(),
            status: PetStatus::Available,
        }
    }
}

/// Top-level generator configuration.
///
/// Loaded from a TOML file passed via `petseed generate --config seed.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Number of records to generate.
    pub count: usize,
    /// Key the record list is nested under in the payload.
    pub table_name: String,
    /// Destination file; `-` means standard output.
    pub output: PathBuf,
    pub pet: PetTemplate,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            count: DEFAULT_COUNT,
            table_name: DEFAULT_TABLE_NAME.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            pet: PetTemplate::default(),
        }
    }
}

// ── Functions ─────────────────────────────────────────────────────────────────

/// Parse a shelter identifier given on the command line.
pub fn parse_shelter_id(s: &str) -> Result<Uuid, SeedError> {
    Uuid::parse_str(s.trim())
        .map_err(|e| SeedError::Config(format!("invalid shelter id '{}': {}", s, e)))
}

impl GeneratorConfig {
    /// Reject values that would produce a payload the store cannot import.
    pub fn validate(&self) -> Result<(), SeedError> {
        if self.table_name.trim().is_empty() {
            return Err(SeedError::Config("table name must not be empty".to_string()));
        }
        if self.output.as_os_str().is_empty() {
            return Err(SeedError::Config("output path must not be empty".to_string()));
        }
        Ok(())
    }
}
