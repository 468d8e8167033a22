use axum::{
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::AppState;
use crate::middleware::{make_span_with_request_id, request_id_middleware};

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Catalog
        .route("/movies", get(handlers::list_movies))
        .route("/movies/trending", get(handlers::trending_movies))
        .route("/movies/featured", get(handlers::featured_movie))
        .route("/movies/continue", get(handlers::continue_watching))
        .route("/movies/:id", get(handlers::get_movie))
        // Context and suggestions
        .route("/context", get(handlers::get_context))
        .route("/suggestions", post(handlers::suggest))
        // Library
        .route(
            "/library/watchlist",
            get(handlers::get_watchlist).post(handlers::add_to_watchlist),
        )
        .route("/library/watchlist/:id", delete(handlers::remove_from_watchlist))
        .route(
            "/library/watched",
            get(handlers::get_watched).post(handlers::add_to_watched),
        )
        .route(
            "/library/watch-later",
            get(handlers::get_watch_later).post(handlers::add_to_watch_later),
        )
        // Request id is assigned before the trace span is built
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id)),
        )
        .with_state(state)
}
