//! Record kinds and per-task random number generators.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Error returned when a record kind name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown record kind: '{0}'. Expected one of: users, movies")]
pub struct UnknownRecordKind(pub String);

/// The kinds of documents the seeder knows how to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Users,
    Movies,
}

impl RecordKind {
    /// All kinds, in the order they are launched.
    pub const ALL: [RecordKind; 2] = [RecordKind::Users, RecordKind::Movies];

    /// Name of the Solr collection this kind is written to.
    pub fn collection(&self) -> &'static str {
        match self {
            RecordKind::Users => "users",
            RecordKind::Movies => "movies",
        }
    }

    /// Stream number used to derive this kind's RNG from a shared seed.
    pub fn stream(&self) -> u64 {
        match self {
            RecordKind::Users => 0,
            RecordKind::Movies => 1,
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.collection())
    }
}

impl std::str::FromStr for RecordKind {
    type Err = UnknownRecordKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "users" | "user" => Ok(RecordKind::Users),
            "movies" | "movie" => Ok(RecordKind::Movies),
            _ => Err(UnknownRecordKind(s.to_string())),
        }
    }
}

/// A document type that can be generated at random and uploaded.
pub trait Record: Serialize + Send + Sync + 'static {
    /// Kind (and therefore collection) this record belongs to.
    const KIND: RecordKind;

    /// Generate one fully-populated record.
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

/// Build the RNG for one seeding task.
///
/// With a seed, every `stream` gets its own deterministic sequence so that
/// concurrent tasks never share generator state but a run is still
/// reproducible. Without a seed the RNG is seeded from OS entropy.
pub fn seeded_rng(seed: Option<u64>, stream: u64) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(stream.wrapping_mul(0x9E3779B97F4A7C15))),
        None => StdRng::from_entropy(),
    }
}
