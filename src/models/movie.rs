use serde::{Deserialize, Serialize};

/// Identifier of a catalog entry
pub type MovieId = u32;

/// Catalog grouping of a title
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Feature film
    Movie,
    Animation,
    Military,
    /// Episodic content
    Tv,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Movie,
        Category::Animation,
        Category::Military,
        Category::Tv,
    ];

    /// Parses a wire name such as `"tv"`
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Movie => "movie",
            Category::Animation => "animation",
            Category::Military => "military",
            Category::Tv => "tv",
        }
    }
}

/// A movie or show in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: i32,
    /// External critical score, 0-10
    pub rating: f64,
    /// Comma-separated genre tags (e.g. "Action, Adventure")
    pub genre: String,
    pub description: String,
    pub category: Category,
    /// Runtime such as "2h 20m" or "50m"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default)]
    pub trending: bool,
    #[serde(default)]
    pub featured: bool,
    /// Percent watched, for "continue watching"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
}

impl Movie {
    /// Creates a catalog entry with no duration, flags or progress
    pub fn new(
        id: MovieId,
        title: impl Into<String>,
        year: i32,
        rating: f64,
        genre: impl Into<String>,
        description: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            year,
            rating,
            genre: genre.into(),
            description: description.into(),
            category,
            duration: None,
            trending: false,
            featured: false,
            progress: None,
        }
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    pub fn with_progress(mut self, progress: u8) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn trending(mut self) -> Self {
        self.trending = true;
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Individual genre tags, trimmed
    pub fn genre_tags(&self) -> impl Iterator<Item = &str> {
        self.genre.split(',').map(str::trim)
    }

    /// True if any genre tag is exactly one of `genres`
    pub fn has_any_genre(&self, genres: &[&str]) -> bool {
        self.genre_tags().any(|tag| genres.contains(&tag))
    }

    pub fn is_feature_film(&self) -> bool {
        self.category == Category::Movie
    }

    pub fn is_episodic(&self) -> bool {
        self.category == Category::Tv
    }
}
