use serde::{Deserialize, Serialize};

use super::{Movie, MovieId};

/// Which shelf of the user's library a movie goes on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Shelf {
    Watchlist,
    Watched,
    WatchLater,
}

/// The user's saved movies
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Library {
    pub watchlist: Vec<Movie>,
    pub watched: Vec<Movie>,
    pub watch_later: Vec<Movie>,
}

impl Library {
    /// Creates an empty library
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shelf(&self, shelf: Shelf) -> &[Movie] {
        match shelf {
            Shelf::Watchlist => &self.watchlist,
            Shelf::Watched => &self.watched,
            Shelf::WatchLater => &self.watch_later,
        }
    }

    /// Adds a movie to a shelf. Returns false if it was already there.
    pub fn add(&mut self, shelf: Shelf, movie: Movie) -> bool {
        let movies = match shelf {
            Shelf::Watchlist => &mut self.watchlist,
            Shelf::Watched => &mut self.watched,
            Shelf::WatchLater => &mut self.watch_later,
        };

        if movies.iter().any(|m| m.id == movie.id) {
            return false;
        }
        movies.push(movie);
        true
    }

    /// Removes a movie from the watchlist. Returns false if it was not there.
    pub fn remove_from_watchlist(&mut self, movie_id: MovieId) -> bool {
        let before = self.watchlist.len();
        self.watchlist.retain(|m| m.id != movie_id);
        self.watchlist.len() != before
    }
}
