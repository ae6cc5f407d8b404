//! Route-driven entity resolution and view-model selection.
//!
//! This crate is the pure middle layer between the navigation layer (which
//! hands over raw path parameters) and the rendering surface (which consumes
//! view-models):
//! - [`resolve`] — turns `(movie id text, optional actor index text)` into
//!   references into the catalog, or a typed miss
//! - [`select_view`] — maps a resolution to exactly one [`ViewModel`]
//! - [`movie_cards`] / [`actor_cards`] — the two listing projections
//!
//! Everything here is a total function of its inputs and the immutable
//! catalog: no state, no caching, no panics on malformed input.

mod card;
mod link;
mod listing;
mod resolve;
mod select;

pub use card::CardView;
pub use link::{actor_detail_path, movie_detail_path};
pub use listing::{actor_cards, movie_cards};
pub use resolve::{resolve, Resolution, ResolveError};
pub use select::{select_view, ActorDetailView, ErrorView, MovieDetailView, ViewModel};
