use filmoteca_catalog::{Actor, Catalog, Movie};

/// A successful lookup: either a movie on its own, or a movie together
/// with one member of its cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution<'a> {
    Movie(&'a Movie),
    Actor {
        movie: &'a Movie,
        actor: &'a Actor,
        /// Position of `actor` in `movie.actors`; kept so links back to
        /// the actor can be rebuilt.
        position: usize,
    },
}

/// The two data-level misses. A path that the router itself does not match
/// is a routing concern and never reaches [`resolve`].
///
/// The `Display` strings double as the user-facing error copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("The requested movie was not found.")]
    MovieNotFound,
    #[error("The requested cast member was not found.")]
    ActorNotFound,
}

/// Resolves raw path parameters against the catalog.
///
/// `movie_id` and `actor_index` arrive as the opaque strings the router
/// extracted; both must parse as base-10 integers before any comparison.
/// A movie miss always wins: when the movie itself cannot be resolved the
/// actor index is never examined, and the result is `MovieNotFound` alone.
/// Malformed numerals are misses, never errors of a different kind.
pub fn resolve<'a>(
    catalog: &'a Catalog,
    movie_id: &str,
    actor_index: Option<&str>,
) -> Result<Resolution<'a>, ResolveError> {
    let movie = movie_id
        .parse::<u32>()
        .ok()
        .and_then(|id| catalog.find(id))
        .ok_or(ResolveError::MovieNotFound)?;

    let Some(index_text) = actor_index else {
        return Ok(Resolution::Movie(movie));
    };

    // Negative and non-numeric strings fail the parse and land here too.
    let position = index_text
        .parse::<usize>()
        .map_err(|_| ResolveError::ActorNotFound)?;
    let actor = movie
        .actors
        .get(position)
        .ok_or(ResolveError::ActorNotFound)?;

    Ok(Resolution::Actor { movie, actor, position })
}
