pub mod config;
pub mod demo;
pub mod error;
pub mod observability;
pub mod routes;

pub use routes::AppState;

/// Create the app router.
///
/// Also used by integration tests to drive the API without starting the
/// full server.
pub fn create_app(state: AppState) -> axum::Router {
    use axum::routing::{get, post};
    use routes::{health, list_vendors, post_checkout, post_generate, post_match, ready};

    axum::Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/vendors", get(list_vendors))
        .route("/shopping/generate", post(post_generate))
        .route("/shopping/match", post(post_match))
        .route("/shopping/checkout", post(post_checkout))
        .with_state(state)
}
