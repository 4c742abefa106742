//! petseed-core: pet record generation for key-value store batch imports.
//!
//! Generation is split in two:
//!
//! - [`generate()`] builds a [`BatchWritePayload`] in memory from a
//!   [`GeneratorConfig`], a base timestamp and an [`IdSource`]. No IO.
//! - [`write_payload()`] serializes the payload to a file (atomically) or
//!   to standard output.

pub mod builder;
pub mod config;
pub mod error;
pub mod ids;
pub mod record;
pub mod timestamp;
pub mod writer;

// ── Convenience re-exports ───────────────────────────────────────────

pub use builder::{generate, RecordBuilder};
pub use config::{GeneratorConfig, PetStatus, PetTemplate};
pub use error::SeedError;
pub use ids::{IdSource, RandomIds, SeededIds};
pub use record::{AttributeValue, BatchWritePayload, PetItem, PutRequest, WriteRequest};
pub use writer::{to_pretty_string, write_payload, OutputTarget};
