use std::sync::Arc;

use filmoteca_catalog::Catalog;
use filmoteca_server::build_router;

/// Spin up the HTTP server on an OS-assigned port, returning the base URL.
async fn spawn_test_server() -> String {
    let app = build_router(Arc::new(Catalog::seed()));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://127.0.0.1:{}", port)
}

// ── Static pages ──────────────────────────────────────────────────

#[tokio::test]
async fn home_page_renders() {
    let base = spawn_test_server().await;
    let resp = reqwest::get(format!("{}/", base)).await.unwrap();

    assert_eq!(resp.status(), 200);
    let body = resp.text().await.unwrap();
    assert!(body.contains("Welcome"));
    assert!(body.contains("id=\"main-content\""));
}

#[tokio::test]
async fn admin_page_is_a_placeholder() {
    let base = spawn_test_server().await;
    let resp = reqwest::get(format!("{}/admin", base)).await.unwrap();

    assert_eq!(resp.status(), 200);
    assert!(resp.text().await.unwrap().contains("Administration panel"));
}

#[tokio::test]
async fn pages_are_served_as_html() {
    let base = spawn_test_server().await;
    let resp = reqwest::get(format!("{}/movies", base)).await.unwrap();

    let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.contains("text/html"));
}

#[tokio::test]
async fn home_alias_redirects_to_root() {
    let base = spawn_test_server().await;
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();
    let resp = client.get(format!("{}/home", base)).send().await.unwrap();

    assert_eq!(resp.status(), 308);
    assert_eq!(resp.headers().get("location").unwrap(), "/");
}

// ── Listings ──────────────────────────────────────────────────────

#[tokio::test]
async fn movie_listing_shows_every_movie_with_its_link() {
    let base = spawn_test_server().await;
    let body = reqwest::get(format!("{}/movies", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    let catalog = Catalog::seed();
    for movie in catalog.movies() {
        assert!(body.contains(&movie.name), "missing {}", movie.name);
        assert!(body.contains(&format!("href=\"/detail/movie/{}\"", movie.id)));
    }
}

#[tokio::test]
async fn actor_listing_flattens_all_casts_and_highlights_top_rated_ones() {
    let base = spawn_test_server().await;
    let body = reqwest::get(format!("{}/actors", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    let catalog = Catalog::seed();
    let total: usize = catalog.movies().map(|m| m.actors.len()).sum();
    let highlighted: usize = catalog
        .movies()
        .filter(|m| m.is_top_rated())
        .map(|m| m.actors.len())
        .sum();

    assert_eq!(body.matches("<article class=\"card").count(), total);
    assert_eq!(body.matches("card-highlighted").count(), highlighted);
    assert!(body.contains("cast member in a top-rated film"));
}

// ── Detail pages ──────────────────────────────────────────────────

#[tokio::test]
async fn movie_detail_renders_summary_and_cast_links() {
    let base = spawn_test_server().await;
    let resp = reqwest::get(format!("{}/detail/movie/1", base)).await.unwrap();

    assert_eq!(resp.status(), 200);
    let body = resp.text().await.unwrap();
    assert!(body.contains("El laberinto del fauno"));
    assert!(body.contains("href=\"/detail/movie/1/actor/0\""));
    assert!(body.contains("href=\"/detail/movie/1/actor/1\""));
}

#[tokio::test]
async fn actor_detail_renders_biography_and_back_link() {
    let base = spawn_test_server().await;
    let resp = reqwest::get(format!("{}/detail/movie/1/actor/0", base))
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body = resp.text().await.unwrap();
    assert!(body.contains("Ivana Baquero"));
    assert!(body.contains("href=\"/detail/movie/1\""));
    // The highlight note belongs to listing cards, not the detail page.
    assert!(!body.contains("cast member in a top-rated film"));
}

#[tokio::test]
async fn regular_movie_cast_is_not_highlighted() {
    let base = spawn_test_server().await;
    let body = reqwest::get(format!("{}/detail/movie/4", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(!body.contains("card-highlighted"));
}

// ── Misses ────────────────────────────────────────────────────────

#[tokio::test]
async fn absent_movie_is_a_404_with_movie_copy() {
    let base = spawn_test_server().await;
    let resp = reqwest::get(format!("{}/detail/movie/9999", base)).await.unwrap();

    assert_eq!(resp.status(), 404);
    assert!(resp.text().await.unwrap().contains("The requested movie was not found."));
}

#[tokio::test]
async fn non_numeric_movie_id_is_a_404_with_movie_copy() {
    let base = spawn_test_server().await;
    let resp = reqwest::get(format!("{}/detail/movie/abc", base)).await.unwrap();

    assert_eq!(resp.status(), 404);
    assert!(resp.text().await.unwrap().contains("The requested movie was not found."));
}

#[tokio::test]
async fn out_of_range_actor_is_a_404_with_cast_copy() {
    let base = spawn_test_server().await;
    let resp = reqwest::get(format!("{}/detail/movie/1/actor/99", base))
        .await
        .unwrap();

    assert_eq!(resp.status(), 404);
    assert!(resp
        .text()
        .await
        .unwrap()
        .contains("The requested cast member was not found."));
}

#[tokio::test]
async fn movie_miss_wins_when_both_parameters_are_bad() {
    let base = spawn_test_server().await;
    let resp = reqwest::get(format!("{}/detail/movie/9999/actor/99", base))
        .await
        .unwrap();

    assert_eq!(resp.status(), 404);
    assert!(resp.text().await.unwrap().contains("The requested movie was not found."));
}

#[tokio::test]
async fn unmatched_path_is_a_routing_404_with_distinct_copy() {
    let base = spawn_test_server().await;
    let resp = reqwest::get(format!("{}/nonexistent", base)).await.unwrap();

    assert_eq!(resp.status(), 404);
    let body = resp.text().await.unwrap();
    assert!(body.contains("The path does not exist."));
    assert!(!body.contains("was not found"));
}
