//! Record identifier sources.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

/// Supplies one fresh identifier per generated record.
///
/// Uniqueness is the source's responsibility; the builder never checks for
/// collisions.
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

/// UUID v4 identifiers drawn from the operating system's randomness.
///
/// Panics if the platform randomness source is unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// UUID v4 identifiers from a seeded generator. The same seed always yields
/// the same sequence.
#[derive(Debug, Clone)]
pub struct SeededIds {
    rng: StdRng,
}

impl SeededIds {
    pub fn new(seed: u64) -> Self {
        SeededIds {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl IdSource for SeededIds {
    fn next_id(&mut self) -> String {
        let bytes: [u8; 16] = self.rng.gen();
        uuid::Builder::from_random_bytes(bytes)
            .into_uuid()
            .to_string()
    }
}

impl<S: IdSource + ?Sized> IdSource for Box<S> {
    fn next_id(&mut self) -> String {
        (**self).next_id()
    }
}
