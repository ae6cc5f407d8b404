//! HTTP routing for Filmoteca.
//!
//! One handler per page. The detail handlers run the same synchronous
//! pipeline per request: resolve the path parameters against the shared
//! catalog, select a view-model, render it. Data-level misses render the
//! error view with a 404 status; paths the router does not match at all
//! fall through to a routing-level 404 with its own copy.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Redirect},
    routing::get,
    Router,
};
use filmoteca_catalog::Catalog;
use filmoteca_views::{actor_cards, movie_cards, resolve, select_view, ErrorView, ViewModel};
use tracing::debug;

mod render;

/// Builds the application router over the shared catalog.
pub fn build_router(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/home", get(|| async { Redirect::permanent("/") }))
        .route("/movies", get(movies))
        .route("/actors", get(actors))
        .route("/admin", get(admin))
        .route("/detail/movie/{movie_id}", get(movie_detail))
        .route("/detail/movie/{movie_id}/actor/{actor_index}", get(actor_detail))
        .fallback(route_not_found)
        .with_state(catalog)
}

async fn home() -> Html<String> {
    Html(render::home())
}

async fn admin() -> Html<String> {
    Html(render::admin())
}

async fn movies(State(catalog): State<Arc<Catalog>>) -> Html<String> {
    Html(render::movie_listing(&movie_cards(&catalog)))
}

async fn actors(State(catalog): State<Arc<Catalog>>) -> Html<String> {
    Html(render::actor_listing(&actor_cards(&catalog)))
}

async fn movie_detail(
    State(catalog): State<Arc<Catalog>>,
    Path(movie_id): Path<String>,
) -> (StatusCode, Html<String>) {
    detail_page(select_view(resolve(&catalog, &movie_id, None)))
}

async fn actor_detail(
    State(catalog): State<Arc<Catalog>>,
    Path((movie_id, actor_index)): Path<(String, String)>,
) -> (StatusCode, Html<String>) {
    detail_page(select_view(resolve(&catalog, &movie_id, Some(&actor_index))))
}

fn detail_page(view: ViewModel) -> (StatusCode, Html<String>) {
    match view {
        ViewModel::MovieDetail(view) => (StatusCode::OK, Html(render::movie_detail(&view))),
        ViewModel::ActorDetail(view) => (StatusCode::OK, Html(render::actor_detail(&view))),
        ViewModel::Error(view) => {
            debug!("Detail miss: {}", view.message);
            (StatusCode::NOT_FOUND, Html(render::error_page(&view)))
        }
    }
}

async fn route_not_found() -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        Html(render::error_page(&ErrorView::route_not_found())),
    )
}
