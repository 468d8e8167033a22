use serde::Serialize;

use super::{Mood, Movie, Weather};

/// Which scoring pass produced a suggestion
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    Mood,
    Time,
    Weather,
    Seasonal,
    /// Emitted by the platform pass
    Trending,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    pub fn from_hour(hour: u32) -> Self {
        if hour < 12 {
            TimeOfDay::Morning
        } else if hour < 18 {
            TimeOfDay::Afternoon
        } else {
            TimeOfDay::Evening
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DayOfWeek {
    Weekday,
    Weekend,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Season for a zero-based month (0 = January)
    pub fn from_month0(month0: u32) -> Self {
        match month0 {
            2..=4 => Season::Spring,
            5..=7 => Season::Summer,
            8..=10 => Season::Fall,
            _ => Season::Winter,
        }
    }
}

/// Signals that drove a match, for display only
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct SuggestionContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_mood: Option<Mood>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<TimeOfDay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<DayOfWeek>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<Weather>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<Season>,
}

/// A catalog entry recommended for the current context
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Suggestion<'a> {
    pub movie: &'a Movie,
    pub reason: String,
    /// Nominally 0-100; not clamped
    pub confidence: f64,
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub context: SuggestionContext,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_season_boundaries() {
        let seasons: Vec<Season> = (0..12).map(Season::from_month0).collect();
        assert_eq!(
            seasons,
            vec![
                Season::Winter,
                Season::Winter,
                Season::Spring,
                Season::Spring,
                Season::Spring,
                Season::Summer,
                Season::Summer,
                Season::Summer,
                Season::Fall,
                Season::Fall,
                Season::Fall,
                Season::Winter,
            ]
        );
    }

    #[test]
    fn test_time_of_day_from_hour() {
        assert_eq!(TimeOfDay::from_hour(0), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(18), TimeOfDay::Evening);
    }

    #[test]
    fn test_kind_serializes_under_type_key() {
        let movie = Movie::new(1, "Test", 2020, 7.0, "Drama", "", Category::Movie);
        let suggestion = Suggestion {
            movie: &movie,
            reason: "Available now on netflix".to_string(),
            confidence: 95.0,
            kind: SuggestionKind::Trending,
            context: SuggestionContext::default(),
        };

        let value = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(value["type"], "trending");
        assert_eq!(value["context"], serde_json::json!({}));
        assert_eq!(value["movie"]["id"], 1);
    }
}
