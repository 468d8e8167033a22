use crate::models::{Category, Movie, MovieId};

/// In-memory movie catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    /// The built-in sample catalog
    pub fn sample() -> Self {
        Self::new(vec![
            Movie::new(
                1,
                "Spider-Man: Across the Spider-Verse",
                2023,
                8.7,
                "Animation, Action, Adventure",
                "Miles Morales catapults across the Multiverse, where he encounters a team of Spider-People charged with protecting its very existence.",
                Category::Animation,
            )
            .with_duration("2h 20m")
            .trending()
            .featured(),
            Movie::new(
                2,
                "The Flash",
                2023,
                6.9,
                "Action, Adventure, Sci-Fi",
                "Barry Allen uses his super speed to change the past, but his attempt to save his family creates a world without super heroes.",
                Category::Movie,
            )
            .with_duration("2h 24m"),
            Movie::new(
                4,
                "Elemental",
                2023,
                7.0,
                "Animation, Comedy, Family",
                "Follows Ember and Wade, in a city where fire-, water-, land- and air-residents live together.",
                Category::Animation,
            )
            .with_duration("1h 43m"),
            Movie::new(
                5,
                "Interstellar",
                2014,
                8.6,
                "Adventure, Drama, Sci-Fi",
                "A team of explorers travel through a wormhole in space in an attempt to ensure humanity's survival.",
                Category::Movie,
            )
            .with_duration("2h 49m"),
            Movie::new(
                7,
                "Transformers: Rise of the Beasts",
                2023,
                6.0,
                "Action, Adventure, Sci-Fi",
                "During the '90s, a new faction of Transformers - the Maximals - join the Autobots as allies in the battle for Earth.",
                Category::Movie,
            )
            .with_duration("2h 7m")
            .with_progress(75),
            Movie::new(
                8,
                "Loki Season 2",
                2023,
                8.2,
                "Action, Adventure, Fantasy",
                "Loki finds himself in a battle for the soul of the Time Variance Authority.",
                Category::Tv,
            )
            .with_duration("50m")
            .with_progress(30),
            Movie::new(
                9,
                "Avatar: The Way of Water",
                2022,
                7.6,
                "Action, Adventure, Drama",
                "Jake Sully lives with his newfound family formed on the planet of Pandora.",
                Category::Movie,
            )
            .with_duration("3h 12m"),
            Movie::new(
                10,
                "The Last Kingdom: Seven Kings Must Die",
                2023,
                7.0,
                "Action, Drama, History",
                "In the wake of King Edward's death, Uhtred of Bebbanburg and his comrades adventure across a fractured kingdom.",
                Category::Military,
            )
            .with_duration("1h 51m"),
        ])
    }

    pub fn all(&self) -> &[Movie] {
        &self.movies
    }

    pub fn get(&self, id: MovieId) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    /// Movies in a category; `"all"` returns the whole catalog
    pub fn by_category(&self, filter: &str) -> Vec<&Movie> {
        if filter == "all" {
            return self.movies.iter().collect();
        }
        self.movies
            .iter()
            .filter(|m| m.category.as_str() == filter)
            .collect()
    }

    pub fn trending(&self) -> Vec<&Movie> {
        self.movies.iter().filter(|m| m.trending).collect()
    }

    pub fn featured(&self) -> Option<&Movie> {
        self.movies.iter().find(|m| m.featured)
    }

    /// Partially watched movies
    pub fn continue_watching(&self) -> Vec<&Movie> {
        self.movies
            .iter()
            .filter(|m| m.progress.is_some_and(|p| p > 0))
            .collect()
    }
}
