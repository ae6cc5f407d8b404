//! The rendering surface: view-models in, accessible HTML out.
//!
//! Cards are focusable (`tabindex="0"`) and carry an `aria-label` that
//! incorporates the highlight state when set, so screen readers announce
//! top-rated casts the same way sighted users see them. Captions are
//! repeated as a visually hidden `figcaption` for the image.

use filmoteca_views::{ActorDetailView, CardView, ErrorView, MovieDetailView};

const HIGHLIGHT_NOTE: &str = "cast member in a top-rated film";

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Wraps page content in the shared layout: site header, main navigation,
/// and a focusable main landmark.
fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} — Filmoteca</title>
</head>
<body>
<header class="site-header">
<h1>Filmoteca</h1>
<nav aria-label="Main navigation">
<a href="/">Home</a>
<a href="/movies">Movies</a>
<a href="/actors">Cast</a>
<a href="/admin">Admin</a>
</nav>
</header>
<main id="main-content" role="main" tabindex="-1">
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}

fn card(card: &CardView) -> String {
    let title = escape(&card.title);
    let caption = escape(&card.caption);
    let (label, note) = if card.is_highlighted {
        (
            format!("{title}, {HIGHLIGHT_NOTE}"),
            format!(" <em>– {HIGHLIGHT_NOTE}</em>"),
        )
    } else {
        (title.clone(), String::new())
    };
    format!(
        r#"<a href="{href}" aria-label="View details for {title}">
<article class="card{highlight}" tabindex="0" aria-label="{label}">
<figure>
<img src="{image}" alt="Photo of {title}" loading="lazy">
<figcaption class="sr-only">{caption}</figcaption>
</figure>
<header><h2><strong>{title}</strong>{note}</h2></header>
<p>{caption}</p>
</article>
</a>"#,
        href = escape(&card.href),
        highlight = if card.is_highlighted { " card-highlighted" } else { "" },
        image = escape(&card.image_url),
    )
}

fn card_grid(cards: &[CardView]) -> String {
    let rendered: Vec<String> = cards.iter().map(card).collect();
    format!("<div class=\"card-grid\">\n{}\n</div>", rendered.join("\n"))
}

pub(crate) fn home() -> String {
    page(
        "Home",
        "<h2>Welcome</h2>\n<p>This is the main page of the application.</p>",
    )
}

pub(crate) fn admin() -> String {
    page(
        "Administration",
        "<h2>Administration panel</h2>\n<p>Administration tools will live here.</p>",
    )
}

pub(crate) fn movie_listing(cards: &[CardView]) -> String {
    let body = format!(
        "<h2>Movie listing</h2>\n<p>These are the movies available:</p>\n{}",
        card_grid(cards)
    );
    page("Movies", &body)
}

pub(crate) fn actor_listing(cards: &[CardView]) -> String {
    let body = format!(
        "<h2>Cast listing</h2>\n<p>These are the cast members of our movies:</p>\n{}",
        card_grid(cards)
    );
    page("Cast", &body)
}

pub(crate) fn movie_detail(view: &MovieDetailView) -> String {
    let body = format!(
        r#"<article class="movie-detail">
<header>
<h2>{title}</h2>
<a class="back" href="/movies">Back</a>
</header>
<figure>
<img src="{poster}" alt="{title}">
</figure>
<p class="classification">{classification} · scored {score}</p>
<p>{summary}</p>
<h3>Cast</h3>
{cast}
</article>"#,
        title = escape(&view.title),
        poster = escape(&view.poster_url),
        classification = escape(&view.classification),
        score = view.score,
        summary = escape(&view.summary),
        cast = card_grid(&view.cast),
    );
    page(&view.title, &body)
}

pub(crate) fn actor_detail(view: &ActorDetailView) -> String {
    let body = format!(
        r#"<article class="actor-detail">
<figure>
<img src="{photo}" alt="{name}">
</figure>
<section>
<header>
<h2>{name}</h2>
<a class="back" href="{back}">Back</a>
</header>
<p>{biography}</p>
</section>
</article>"#,
        photo = escape(&view.photo_url),
        name = escape(&view.name),
        back = escape(&view.back_href),
        biography = escape(&view.biography),
    );
    page(&view.name, &body)
}

pub(crate) fn error_page(view: &ErrorView) -> String {
    let body = format!(
        "<h2>{}</h2>\n<p class=\"error\" role=\"alert\">{}</p>",
        escape(&view.title),
        escape(&view.message)
    );
    page(&view.title, &body)
}
