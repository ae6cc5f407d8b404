use filmoteca_catalog::{Actor, Catalog, Movie};

use crate::card::CardView;
use crate::link::{actor_detail_path, movie_detail_path};

/// Projects the whole catalog into movie cards, in store order.
///
/// Movie cards are never highlighted; the highlight is an actor-listing
/// concept tied to the owning movie's score.
#[must_use]
pub fn movie_cards(catalog: &Catalog) -> Vec<CardView> {
    catalog
        .movies()
        .map(|movie| CardView {
            image_url: movie.poster_url.clone(),
            title: movie.name.clone(),
            is_highlighted: false,
            caption: movie.classification.clone(),
            href: movie_detail_path(movie.id),
        })
        .collect()
}

/// Flattens every movie's cast into one card sequence, in store order.
/// Recomputed on each call; the dataset is small and static.
#[must_use]
pub fn actor_cards(catalog: &Catalog) -> Vec<CardView> {
    catalog
        .movies()
        .flat_map(|movie| {
            movie
                .actors
                .iter()
                .enumerate()
                .map(|(position, actor)| actor_card(movie, actor, position))
        })
        .collect()
}

/// One actor card, highlighted iff the owning movie is top-rated.
pub(crate) fn actor_card(movie: &Movie, actor: &Actor, position: usize) -> CardView {
    CardView {
        image_url: actor.photo_url.clone(),
        title: actor.name.clone(),
        is_highlighted: movie.is_top_rated(),
        caption: actor.biography.clone(),
        href: actor_detail_path(movie.id, position),
    }
}
