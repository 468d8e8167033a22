use std::collections::HashSet;

use chrono::{Datelike, Timelike, Weekday};
use rand::Rng;
use tracing::instrument;

use crate::models::{
    DayOfWeek, Mood, Movie, Platform, Season, Suggestion, SuggestionContext, SuggestionKind,
    TimeOfDay, UserContext, Weather,
};

/// Upper bound on the number of suggestions returned per request
pub const MAX_SUGGESTIONS: usize = 15;

/// Scores a catalog against the current context using the thread-local RNG
/// for confidence jitter.
pub fn generate_suggestions<'a>(catalog: &'a [Movie], context: &UserContext) -> Vec<Suggestion<'a>> {
    SuggestionEngine::new(catalog).suggest(context, &mut rand::thread_rng())
}

/// Same as [`generate_suggestions`] with an explicit jitter source
pub fn generate_suggestions_with_rng<'a, R: Rng>(
    catalog: &'a [Movie],
    context: &UserContext,
    rng: &mut R,
) -> Vec<Suggestion<'a>> {
    SuggestionEngine::new(catalog).suggest(context, rng)
}

/// Rule-based scorer over a read-only catalog
///
/// Runs five passes (mood, time, weather, seasonal, platform) over the whole
/// catalog, keeps the first suggestion emitted for each movie, then orders by
/// confidence and keeps the top [`MAX_SUGGESTIONS`].
pub struct SuggestionEngine<'a> {
    catalog: &'a [Movie],
}

impl<'a> SuggestionEngine<'a> {
    pub fn new(catalog: &'a [Movie]) -> Self {
        Self { catalog }
    }

    #[instrument(skip_all, fields(catalog_size = self.catalog.len()))]
    pub fn suggest<R: Rng>(&self, context: &UserContext, rng: &mut R) -> Vec<Suggestion<'a>> {
        let mut candidates = Vec::new();

        candidates.extend(self.mood_pass(context, rng));
        candidates.extend(self.time_pass(context, rng));
        candidates.extend(self.weather_pass(context, rng));
        candidates.extend(self.seasonal_pass(context, rng));
        candidates.extend(self.platform_pass(context));

        let candidate_count = candidates.len();
        let suggestions = merge(candidates);

        tracing::debug!(
            candidates = candidate_count,
            returned = suggestions.len(),
            "Scored catalog"
        );

        suggestions
    }

    fn mood_pass<R: Rng>(&self, context: &UserContext, rng: &mut R) -> Vec<Suggestion<'a>> {
        let Some(mood) = context.mood else {
            return Vec::new();
        };
        let genres = mood_genres(mood);

        self.catalog
            .iter()
            .filter(|movie| movie.has_any_genre(genres))
            .map(|movie| Suggestion {
                movie,
                reason: format!("Perfect for your {} mood", mood),
                confidence: 85.0 + jitter(rng, 10.0),
                kind: SuggestionKind::Mood,
                context: SuggestionContext {
                    current_mood: Some(mood),
                    ..Default::default()
                },
            })
            .collect()
    }

    fn time_pass<R: Rng>(&self, context: &UserContext, rng: &mut R) -> Vec<Suggestion<'a>> {
        let slot = TimeSlot::from_context(context);
        let mut suggestions = Vec::new();

        for movie in self.catalog {
            let Some(rule) = TIME_RULES.iter().find(|rule| (rule.applies)(&slot, movie)) else {
                continue;
            };

            suggestions.push(Suggestion {
                movie,
                reason: rule.reason.to_string(),
                confidence: rule.base_confidence + jitter(rng, 10.0),
                kind: SuggestionKind::Time,
                context: SuggestionContext {
                    time_of_day: Some(TimeOfDay::from_hour(slot.hour)),
                    day_of_week: Some(if slot.is_weekend {
                        DayOfWeek::Weekend
                    } else {
                        DayOfWeek::Weekday
                    }),
                    ..Default::default()
                },
            });
        }

        suggestions
    }

    fn weather_pass<R: Rng>(&self, context: &UserContext, rng: &mut R) -> Vec<Suggestion<'a>> {
        let Some(weather) = context.weather else {
            return Vec::new();
        };
        let Some(profile) = weather_profile(weather) else {
            return Vec::new();
        };

        self.catalog
            .iter()
            .filter(|movie| movie.has_any_genre(profile.genres))
            .map(|movie| Suggestion {
                movie,
                reason: profile.reason.to_string(),
                confidence: profile.base_confidence + jitter(rng, 15.0),
                kind: SuggestionKind::Weather,
                context: SuggestionContext {
                    weather: Some(weather),
                    ..Default::default()
                },
            })
            .collect()
    }

    fn seasonal_pass<R: Rng>(&self, context: &UserContext, rng: &mut R) -> Vec<Suggestion<'a>> {
        let season = Season::from_month0(context.current_time.month0());
        let profile = seasonal_profile(season);

        self.catalog
            .iter()
            .filter(|movie| {
                let description = movie.description.to_lowercase();
                let genre = movie.genre.to_lowercase();
                profile
                    .keywords
                    .iter()
                    .any(|keyword| description.contains(keyword) || genre.contains(keyword))
            })
            .map(|movie| Suggestion {
                movie,
                reason: profile.reason.to_string(),
                confidence: 75.0 + jitter(rng, 20.0),
                kind: SuggestionKind::Seasonal,
                context: SuggestionContext {
                    season: Some(season),
                    ..Default::default()
                },
            })
            .collect()
    }

    fn platform_pass(&self, context: &UserContext) -> Vec<Suggestion<'a>> {
        let Some(platform) = context.platform else {
            return Vec::new();
        };
        let Some(genres) = platform_genres(platform) else {
            return Vec::new();
        };

        self.catalog
            .iter()
            .filter(|movie| movie.has_any_genre(genres))
            .map(|movie| Suggestion {
                movie,
                reason: format!("Available now on {}", platform),
                confidence: 95.0,
                kind: SuggestionKind::Trending,
                context: SuggestionContext::default(),
            })
            .collect()
    }
}

/// Keeps the first suggestion per movie id, then sorts by descending
/// confidence (stable) and truncates.
fn merge(candidates: Vec<Suggestion<'_>>) -> Vec<Suggestion<'_>> {
    let mut seen = HashSet::new();
    let mut unique: Vec<Suggestion<'_>> = candidates
        .into_iter()
        .filter(|s| seen.insert(s.movie.id))
        .collect();

    unique.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    unique.truncate(MAX_SUGGESTIONS);
    unique
}

fn jitter<R: Rng>(rng: &mut R, span: f64) -> f64 {
    rng.gen::<f64>() * span
}

fn mood_genres(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Energetic => &["Action", "Adventure", "Thriller"],
        Mood::Relaxed => &["Comedy", "Romance", "Animation"],
        Mood::Adventurous => &["Adventure", "Sci-Fi", "Fantasy"],
        Mood::Romantic => &["Romance", "Drama"],
        Mood::Thoughtful => &["Drama", "Documentary", "Mystery"],
        Mood::Unknown => &[],
    }
}

struct WeatherProfile {
    genres: &'static [&'static str],
    reason: &'static str,
    base_confidence: f64,
}

fn weather_profile(weather: Weather) -> Option<WeatherProfile> {
    let profile = match weather {
        Weather::Rainy => WeatherProfile {
            genres: &["Drama", "Romance", "Mystery"],
            reason: "Cozy films for a rainy day",
            base_confidence: 80.0,
        },
        Weather::Sunny => WeatherProfile {
            genres: &["Adventure", "Comedy", "Animation"],
            reason: "Uplifting content for a beautiful day",
            base_confidence: 75.0,
        },
        Weather::Snowy => WeatherProfile {
            genres: &["Family", "Animation", "Romance"],
            reason: "Warm and heartwarming for snowy weather",
            base_confidence: 85.0,
        },
        Weather::Cloudy => WeatherProfile {
            genres: &["Thriller", "Mystery", "Drama"],
            reason: "Atmospheric content matching the mood",
            base_confidence: 70.0,
        },
        Weather::Unknown => return None,
    };
    Some(profile)
}

struct SeasonalProfile {
    keywords: &'static [&'static str],
    reason: &'static str,
}

fn seasonal_profile(season: Season) -> SeasonalProfile {
    match season {
        Season::Spring => SeasonalProfile {
            keywords: &["adventure", "comedy", "romance"],
            reason: "Fresh and uplifting content for spring",
        },
        Season::Summer => SeasonalProfile {
            keywords: &["action", "adventure", "blockbuster"],
            reason: "High-energy summer entertainment",
        },
        Season::Fall => SeasonalProfile {
            keywords: &["thriller", "mystery", "drama"],
            reason: "Atmospheric content for autumn",
        },
        Season::Winter => SeasonalProfile {
            keywords: &["family", "drama", "romance"],
            reason: "Cozy winter viewing",
        },
    }
}

fn platform_genres(platform: Platform) -> Option<&'static [&'static str]> {
    match platform {
        Platform::Netflix => Some(&["Drama", "Thriller", "Documentary"]),
        Platform::Prime => Some(&["Action", "Sci-Fi", "Comedy"]),
        Platform::Disney => Some(&["Animation", "Family", "Adventure"]),
        Platform::Hulu => Some(&["Comedy", "Crime", "Mystery"]),
        Platform::Theater | Platform::Unknown => None,
    }
}

/// Hour and weekend flag derived from the request time
struct TimeSlot {
    hour: u32,
    is_weekend: bool,
}

impl TimeSlot {
    fn from_context(context: &UserContext) -> Self {
        let weekday = context.current_time.weekday();
        Self {
            hour: context.current_time.hour(),
            is_weekend: matches!(weekday, Weekday::Sat | Weekday::Sun),
        }
    }
}

struct TimeRule {
    reason: &'static str,
    base_confidence: f64,
    applies: fn(&TimeSlot, &Movie) -> bool,
}

// Evaluated in order; the first rule that applies to a movie wins.
const TIME_RULES: [TimeRule; 4] = [
    TimeRule {
        reason: "Perfect evening entertainment",
        base_confidence: 80.0,
        applies: evening_feature,
    },
    TimeRule {
        reason: "Great for late-night relaxation",
        base_confidence: 75.0,
        applies: late_night_light,
    },
    TimeRule {
        reason: "Perfect for a quick lunch break",
        base_confidence: 85.0,
        applies: weekday_lunch,
    },
    TimeRule {
        reason: "Ideal for weekend binge-watching",
        base_confidence: 90.0,
        applies: weekend_binge,
    },
];

fn evening_feature(slot: &TimeSlot, movie: &Movie) -> bool {
    (18..=23).contains(&slot.hour) && movie.is_feature_film() && movie.rating >= 8.0
}

fn late_night_light(slot: &TimeSlot, movie: &Movie) -> bool {
    (slot.hour >= 23 || slot.hour <= 2)
        && (movie.genre.contains("Comedy") || movie.genre.contains("Animation"))
}

fn weekday_lunch(slot: &TimeSlot, movie: &Movie) -> bool {
    !slot.is_weekend
        && (12..=14).contains(&slot.hour)
        && (movie.is_episodic()
            || movie
                .duration
                .as_deref()
                .is_some_and(|duration| duration.contains("1h")))
}

fn weekend_binge(slot: &TimeSlot, movie: &Movie) -> bool {
    slot.is_weekend
        && (10..=16).contains(&slot.hour)
        && (movie.is_episodic() || movie.genre.contains("Drama"))
}
