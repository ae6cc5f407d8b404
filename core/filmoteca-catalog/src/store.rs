use crate::movie::Movie;
use crate::seed;

/// The read-only movie collection backing every page of the application.
///
/// Built once at startup and shared by reference for the life of the
/// process. Movies keep their authored order, which is also their listing
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    /// Wraps an authored movie list. Mostly useful for tests; production
    /// code uses [`Catalog::seed`].
    #[must_use]
    pub fn new(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    /// The built-in dataset the application ships with.
    #[must_use]
    pub fn seed() -> Self {
        Self::new(seed::movies())
    }

    /// Movies in store order.
    pub fn movies(&self) -> impl Iterator<Item = &Movie> {
        self.movies.iter()
    }

    /// Number of movies in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// True when the catalog holds no movies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Looks up a movie by id. Linear scan: the dataset is small and
    /// static, so no index is kept.
    #[must_use]
    pub fn find(&self, id: u32) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }
}
