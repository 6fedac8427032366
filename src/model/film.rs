use serde::{Deserialize, Serialize};

/// A film as returned by the upstream `films` resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub title: String,
    pub episode_id: i64,
    pub director: String,
    pub release_date: String,
}

/// Film summary embedded in an enriched person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub episode: i64,
    pub director: String,
    pub release_date: String,
}

impl From<Film> for Movie {
    fn from(film: Film) -> Self {
        Self {
            title: film.title,
            episode: film.episode_id,
            director: film.director,
            release_date: film.release_date,
        }
    }
}
