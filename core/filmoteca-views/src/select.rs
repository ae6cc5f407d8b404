use filmoteca_catalog::{Actor, Movie};
use serde::Serialize;

use crate::card::CardView;
use crate::link::movie_detail_path;
use crate::listing::actor_card;
use crate::resolve::{Resolution, ResolveError};

/// The one view-model a detail request renders. Decided once at the
/// resolution boundary and consumed exhaustively downstream; the rendering
/// surface never re-checks whether an actor was present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ViewModel {
    MovieDetail(MovieDetailView),
    ActorDetail(ActorDetailView),
    Error(ErrorView),
}

/// A movie's detail page: display fields plus its cast as cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieDetailView {
    pub title: String,
    pub summary: String,
    pub poster_url: String,
    pub classification: String,
    pub score: u8,
    pub cast: Vec<CardView>,
}

/// An actor's detail page. No highlight flag here: highlighting is a
/// listing-level concept, not an attribute of the actor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorDetailView {
    pub name: String,
    pub biography: String,
    pub photo_url: String,
    /// The "go back" affordance: the owning movie's detail page.
    pub back_href: String,
}

/// A terminal, locally recoverable miss rendered in place of a detail view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorView {
    pub title: String,
    pub message: String,
}

impl ErrorView {
    /// The routing-level 404, for paths the router itself does not match.
    /// Distinct from the data-level misses, which come from [`select_view`].
    #[must_use]
    pub fn route_not_found() -> Self {
        Self {
            title: "Page not found".into(),
            message: "The path does not exist.".into(),
        }
    }
}

/// Maps a resolution outcome to its view-model. Total: every outcome,
/// including both misses, yields a renderable view.
#[must_use]
pub fn select_view(result: Result<Resolution<'_>, ResolveError>) -> ViewModel {
    match result {
        Ok(Resolution::Movie(movie)) => ViewModel::MovieDetail(movie_detail(movie)),
        Ok(Resolution::Actor { movie, actor, .. }) => {
            ViewModel::ActorDetail(actor_detail(movie, actor))
        }
        Err(miss) => ViewModel::Error(ErrorView {
            title: "Not found".into(),
            message: miss.to_string(),
        }),
    }
}

fn movie_detail(movie: &Movie) -> MovieDetailView {
    MovieDetailView {
        title: movie.name.clone(),
        summary: movie.summary.clone(),
        poster_url: movie.poster_url.clone(),
        classification: movie.classification.clone(),
        score: movie.score,
        cast: movie
            .actors
            .iter()
            .enumerate()
            .map(|(position, actor)| actor_card(movie, actor, position))
            .collect(),
    }
}

fn actor_detail(movie: &Movie, actor: &Actor) -> ActorDetailView {
    ActorDetailView {
        name: actor.name.clone(),
        biography: actor.biography.clone(),
        photo_url: actor.photo_url.clone(),
        back_href: movie_detail_path(movie.id),
    }
}
