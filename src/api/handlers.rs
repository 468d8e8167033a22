use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::middleware::RequestId;
use crate::models::{Category, Movie, MovieId, Shelf, Suggestion, UserContext};
use crate::services::{detect_context, generate_suggestions};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct MovieQuery {
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionRequest {
    /// Detected from the configured signals when absent
    #[serde(default)]
    pub context: Option<UserContext>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionResponse<'a> {
    pub context: &'a UserContext,
    pub suggestions: Vec<Suggestion<'a>>,
}

#[derive(Debug, Deserialize)]
pub struct AddToShelfRequest {
    pub movie_id: MovieId,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// List the catalog, optionally filtered by category
pub async fn list_movies(
    State(state): State<AppState>,
    Query(query): Query<MovieQuery>,
) -> AppResult<Json<Vec<Movie>>> {
    let filter = query.category.as_deref().unwrap_or("all");
    if filter != "all" && Category::from_name(filter).is_none() {
        return Err(AppError::InvalidInput(format!("unknown category: {}", filter)));
    }
    Ok(Json(state.catalog.by_category(filter).into_iter().cloned().collect()))
}

pub async fn get_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<MovieId>,
) -> AppResult<Json<Movie>> {
    state
        .catalog
        .get(movie_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("movie {}", movie_id)))
}

pub async fn trending_movies(State(state): State<AppState>) -> Json<Vec<Movie>> {
    Json(state.catalog.trending().into_iter().cloned().collect())
}

pub async fn featured_movie(State(state): State<AppState>) -> AppResult<Json<Movie>> {
    state
        .catalog
        .featured()
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("no featured movie".to_string()))
}

pub async fn continue_watching(State(state): State<AppState>) -> Json<Vec<Movie>> {
    Json(state.catalog.continue_watching().into_iter().cloned().collect())
}

/// Current context as reported by the signal source
pub async fn get_context(State(state): State<AppState>) -> Json<UserContext> {
    Json(detect_context(state.signals.as_ref(), Local::now().naive_local()).await)
}

/// Score the catalog against the supplied or detected context
pub async fn suggest(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<SuggestionRequest>,
) -> AppResult<Json<Value>> {
    let context = match request.context {
        Some(context) => context,
        None => detect_context(state.signals.as_ref(), Local::now().naive_local()).await,
    };

    tracing::info!(
        request_id = %request_id,
        mood = ?context.mood,
        weather = ?context.weather,
        platform = ?context.platform,
        "Processing suggestion request"
    );

    let suggestions = generate_suggestions(state.catalog.all(), &context);

    tracing::info!(
        request_id = %request_id,
        count = suggestions.len(),
        "Suggestions generated"
    );

    let body = serde_json::to_value(SuggestionResponse {
        context: &context,
        suggestions,
    })
    .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(body))
}

pub async fn get_watchlist(State(state): State<AppState>) -> Json<Vec<Movie>> {
    shelf_contents(&state, Shelf::Watchlist).await
}

pub async fn add_to_watchlist(
    State(state): State<AppState>,
    Json(request): Json<AddToShelfRequest>,
) -> AppResult<(StatusCode, Json<Vec<Movie>>)> {
    add_to_shelf(&state, Shelf::Watchlist, request.movie_id).await
}

pub async fn remove_from_watchlist(
    State(state): State<AppState>,
    Path(movie_id): Path<MovieId>,
) -> AppResult<StatusCode> {
    let mut inner = state.inner.write().await;
    if inner.library.remove_from_watchlist(movie_id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("movie {} is not on the watchlist", movie_id)))
    }
}

pub async fn get_watched(State(state): State<AppState>) -> Json<Vec<Movie>> {
    shelf_contents(&state, Shelf::Watched).await
}

pub async fn add_to_watched(
    State(state): State<AppState>,
    Json(request): Json<AddToShelfRequest>,
) -> AppResult<(StatusCode, Json<Vec<Movie>>)> {
    add_to_shelf(&state, Shelf::Watched, request.movie_id).await
}

pub async fn get_watch_later(State(state): State<AppState>) -> Json<Vec<Movie>> {
    shelf_contents(&state, Shelf::WatchLater).await
}

pub async fn add_to_watch_later(
    State(state): State<AppState>,
    Json(request): Json<AddToShelfRequest>,
) -> AppResult<(StatusCode, Json<Vec<Movie>>)> {
    add_to_shelf(&state, Shelf::WatchLater, request.movie_id).await
}

async fn shelf_contents(state: &AppState, shelf: Shelf) -> Json<Vec<Movie>> {
    let inner = state.inner.read().await;
    Json(inner.library.shelf(shelf).to_vec())
}

async fn add_to_shelf(
    state: &AppState,
    shelf: Shelf,
    movie_id: MovieId,
) -> AppResult<(StatusCode, Json<Vec<Movie>>)> {
    let movie = state
        .catalog
        .get(movie_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("movie {}", movie_id)))?;

    let mut inner = state.inner.write().await;
    let status = if inner.library.add(shelf, movie) {
        tracing::debug!(movie_id, ?shelf, "Added to library");
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(inner.library.shelf(shelf).to_vec())))
}
