use serde::{Deserialize, Serialize};

/// The highest score a movie can be given. Casts of movies at this score
/// are highlighted wherever actor cards are listed.
pub const MAX_SCORE: u8 = 10;

/// A movie record with its embedded cast.
///
/// `id` values are assigned at data-authoring time and are unique across
/// the catalog. The order of `actors` is significant: an actor's position
/// in this vector is its identity within the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u32,
    pub name: String,
    pub summary: String,
    pub poster_url: String,
    pub classification: String,
    pub score: u8,
    pub actors: Vec<Actor>,
}

impl Movie {
    /// True when the movie carries the maximum attainable score.
    #[must_use]
    pub fn is_top_rated(&self) -> bool {
        self.score == MAX_SCORE
    }
}

/// A cast member of a single movie.
///
/// Actors have no identifier of their own; they are addressed as
/// (owning movie id, position in the owning movie's cast). Reordering a
/// cast would invalidate every link to it, so casts are never reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub name: String,
    pub biography: String,
    pub photo_url: String,
}
