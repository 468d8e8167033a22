//! CineTracker: movie catalog, watchlist and context-aware suggestions.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
