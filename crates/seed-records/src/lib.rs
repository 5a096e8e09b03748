//! Record generators for the solr-seed tool.
//!
//! This crate produces synthetic `User` and `Movie` documents. Every generator
//! takes the random number generator explicitly, so each seeding task owns its
//! own RNG and a fixed seed reproduces the same documents.
//!
//! # Architecture
//!
//! ```text
//! seeded_rng(seed, stream)
//!        │
//!        ▼
//! ┌─────────────────┐
//! │     StdRng      │──► random_user(rng)  ──► User  { id, username_s, ... }
//! │  (one per task) │──► random_movie(rng) ──► Movie { id, title_s, ... }
//! └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use seed_records::{random_user, seeded_rng};
//!
//! let mut rng = seeded_rng(Some(42), 0);
//! let user = random_user(&mut rng);
//! assert!(user.email.starts_with(&user.username));
//! ```
//!
//! # Field naming
//!
//! Documents serialize with Solr dynamic-field suffixes: `_s` for strings,
//! `_i` for integers, `_f` for floats and `_b` for booleans. `id` is left
//! unsuffixed because it is the collection's unique key.

pub mod generator;
pub mod movie;
pub mod pools;
pub mod user;

// Re-exports for convenience
pub use generator::{seeded_rng, Record, RecordKind, UnknownRecordKind};
pub use movie::{random_movie, Movie};
pub use user::{random_user, User};
