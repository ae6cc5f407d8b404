//! Link targets handed to the navigation layer. These are the only two
//! path shapes the detail routes understand.

/// Path of a movie's detail page.
#[must_use]
pub fn movie_detail_path(movie_id: u32) -> String {
    format!("/detail/movie/{movie_id}")
}

/// Path of an actor's detail page, keyed by owning movie and cast position.
#[must_use]
pub fn actor_detail_path(movie_id: u32, position: usize) -> String {
    format!("/detail/movie/{movie_id}/actor/{position}")
}
