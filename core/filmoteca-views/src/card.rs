use serde::Serialize;

/// Input contract of the rendering surface: one focusable, labeled card.
///
/// `is_highlighted` marks cards whose owning movie carries the maximum
/// score; the rendering surface folds it into the card's accessible name.
/// `caption` is the descriptive text below the title (a biography for actor
/// cards, a classification for movie cards).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub image_url: String,
    pub title: String,
    pub is_highlighted: bool,
    pub caption: String,
    /// Where the card links to, as an absolute path.
    pub href: String,
}
