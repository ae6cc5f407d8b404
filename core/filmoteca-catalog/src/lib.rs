//! Immutable movie catalog for Filmoteca.
//!
//! Defines the entity types the rest of the workspace reads from:
//! - [`Movie`] and [`Actor`] — plain data records
//! - [`Catalog`] — the process-wide, read-only collection of movies,
//!   constructed once at startup and never mutated
//!
//! Actors carry no identifier of their own: an actor is addressed by the
//! pair (owning movie id, position in that movie's cast). Lookup is a
//! linear scan over a small fixed dataset; no index is maintained.

mod movie;
mod seed;
mod store;

pub use movie::{Actor, Movie, MAX_SCORE};
pub use store::Catalog;
