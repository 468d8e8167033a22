use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;

/// Viewer mood as reported by the client or a mood detector
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Energetic,
    Relaxed,
    Adventurous,
    Romantic,
    Thoughtful,
    /// Any unrecognized value; matches nothing
    #[serde(other)]
    Unknown,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Energetic,
        Mood::Relaxed,
        Mood::Adventurous,
        Mood::Romantic,
        Mood::Thoughtful,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Energetic => "energetic",
            Mood::Relaxed => "relaxed",
            Mood::Adventurous => "adventurous",
            Mood::Romantic => "romantic",
            Mood::Thoughtful => "thoughtful",
            Mood::Unknown => "unknown",
        }
    }
}

impl Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Weather {
    Sunny,
    Rainy,
    Cloudy,
    Snowy,
    #[serde(other)]
    Unknown,
}

impl Weather {
    pub const ALL: [Weather; 4] = [
        Weather::Sunny,
        Weather::Rainy,
        Weather::Cloudy,
        Weather::Snowy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weather::Sunny => "sunny",
            Weather::Rainy => "rainy",
            Weather::Cloudy => "cloudy",
            Weather::Snowy => "snowy",
            Weather::Unknown => "unknown",
        }
    }
}

impl Display for Weather {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the viewer intends to watch
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Netflix,
    Prime,
    Disney,
    Hulu,
    /// Accepted but carries no streaming catalog
    Theater,
    #[serde(other)]
    Unknown,
}

impl Platform {
    /// Streaming platforms a preferred platform is drawn from
    pub const STREAMING: [Platform; 4] = [
        Platform::Netflix,
        Platform::Prime,
        Platform::Disney,
        Platform::Hulu,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Netflix => "netflix",
            Platform::Prime => "prime",
            Platform::Disney => "disney",
            Platform::Hulu => "hulu",
            Platform::Theater => "theater",
            Platform::Unknown => "unknown",
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How long the viewer has: under an hour, one to two hours, or more
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AvailableTime {
    Short,
    Medium,
    Long,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Device {
    Mobile,
    Tablet,
    Tv,
    Laptop,
    #[serde(other)]
    Unknown,
}

impl Device {
    pub const ALL: [Device; 4] = [Device::Mobile, Device::Tablet, Device::Tv, Device::Laptop];
}

/// Situational signals a suggestion request is scored against
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserContext {
    /// Local wall-clock time of the request
    #[serde(deserialize_with = "deserialize_wall_clock")]
    pub current_time: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<Weather>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    /// Reported to clients; not consulted when scoring
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_time: Option<AvailableTime>,
    /// Reported to clients; not consulted when scoring
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,
}

impl UserContext {
    /// Context with only a timestamp set
    pub fn at(current_time: NaiveDateTime) -> Self {
        Self {
            current_time,
            mood: None,
            weather: None,
            platform: None,
            available_time: None,
            device: None,
        }
    }

    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = Some(mood);
        self
    }

    pub fn with_weather(mut self, weather: Weather) -> Self {
        self.weather = Some(weather);
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }
}

/// Accepts RFC 3339 (wall clock at the given offset) or a naive timestamp
fn deserialize_wall_clock<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(time) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(time.naive_local());
    }
    raw.parse::<NaiveDateTime>().map_err(serde::de::Error::custom)
}
