//! Movie documents.

use crate::generator::{Record, RecordKind};
use crate::pools::{one_of, DIRECTORS, GENRES, MAX_ID, MOVIE_TITLES};
use rand::Rng;
use serde::Serialize;

/// A synthetic movie listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    pub id: u32,
    #[serde(rename = "title_s")]
    pub title: String,
    #[serde(rename = "director_s")]
    pub director: String,
    /// 1985..=2025
    #[serde(rename = "release_year_i")]
    pub release_year: i32,
    #[serde(rename = "genre_s")]
    pub genre: String,
    /// 5.0..=9.0
    #[serde(rename = "rating_f")]
    pub rating: f32,
    #[serde(rename = "is_available_b")]
    pub is_available: bool,
    /// Minutes, 60.0..=120.0
    #[serde(rename = "duration_f")]
    pub duration: f64,
}

/// Generate a random movie.
pub fn random_movie<R: Rng + ?Sized>(rng: &mut R) -> Movie {
    let title = one_of(rng, MOVIE_TITLES);
    let director = one_of(rng, DIRECTORS);
    let genre = one_of(rng, GENRES);

    Movie {
        title: title.to_string(),
        director: director.to_string(),
        release_year: rng.gen_range(1985..=2025),
        genre: genre.to_string(),
        rating: rng.gen_range(5.0..=9.0),
        is_available: rng.gen_bool(0.5),
        duration: rng.gen_range(60.0..=120.0),
        id: rng.gen_range(0..MAX_ID),
    }
}

impl Record for Movie {
    const KIND: RecordKind = RecordKind::Movies;

    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        random_movie(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::seeded_rng;

    #[test]
    fn test_movie_fields_within_bounds() {
        let mut rng = seeded_rng(Some(42), 1);

        for _ in 0..1000 {
            let movie = random_movie(&mut rng);

            assert!((1985..=2025).contains(&movie.release_year));
            assert!((5.0..=9.0).contains(&movie.rating), "rating {}", movie.rating);
            assert!((60.0..=120.0).contains(&movie.duration));
            assert!(movie.id < MAX_ID);
            assert!(MOVIE_TITLES.contains(&movie.title.as_str()));
            assert!(DIRECTORS.contains(&movie.director.as_str()));
            assert!(GENRES.contains(&movie.genre.as_str()));
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let mut rng1 = seeded_rng(Some(9), 1);
        let mut rng2 = seeded_rng(Some(9), 1);

        let a: Vec<Movie> = (0..10).map(|_| random_movie(&mut rng1)).collect();
        let b: Vec<Movie> = (0..10).map(|_| random_movie(&mut rng2)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_json_keys_carry_type_suffixes() {
        let mut rng = seeded_rng(Some(42), 1);
        let json = serde_json::to_value(random_movie(&mut rng)).unwrap();
        let obj = json.as_object().unwrap();

        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "director_s",
                "duration_f",
                "genre_s",
                "id",
                "is_available_b",
                "rating_f",
                "release_year_i",
                "title_s",
            ]
        );
        assert!(obj["release_year_i"].is_i64());
        assert!(obj["rating_f"].is_f64());
        assert!(obj["is_available_b"].is_boolean());
    }
}
