//! Fixed value pools and ranges used by the record generators.

use rand::Rng;

/// Upper bound (exclusive) for generated document ids.
pub const MAX_ID: u32 = 1_000_000;

pub const USERNAMES: &[&str] = &[
    "alice", "bob", "charlie", "dave", "eve", "frank", "grace", "heidi",
];

pub const EMAIL_DOMAINS: &[&str] = &["example.com", "mail.com", "test.org", "demo.net"];

pub const MOVIE_TITLES: &[&str] = &[
    "The Example",
    "Another Film",
    "Go Adventure",
    "Mystery Night",
    "Comedy Hour",
    "Sci-Fi Saga",
    "Drama Days",
    "Action Blast",
];

pub const DIRECTORS: &[&str] = &[
    "Jane Doe",
    "John Smith",
    "Alex Lee",
    "Sam Kim",
    "Morgan Yu",
    "Chris Ray",
];

pub const GENRES: &[&str] = &["Drama", "Comedy", "Action", "Sci-Fi", "Horror", "Romance"];

/// Pick one entry from a non-empty pool.
pub fn one_of<R: Rng + ?Sized>(rng: &mut R, pool: &[&'static str]) -> &'static str {
    pool[rng.gen_range(0..pool.len())]
}
