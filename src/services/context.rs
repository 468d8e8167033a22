use chrono::{NaiveDateTime, Timelike};
use rand::seq::SliceRandom;
use tracing::instrument;

use crate::models::{AvailableTime, Device, Mood, Platform, UserContext, Weather};

/// Source of the situational signals a suggestion request is scored against
///
/// Implementations may call out to a weather service, inspect recent
/// activity, or simply guess. Any signal may be unavailable.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ContextSignals: Send + Sync {
    async fn weather(&self) -> Option<Weather>;

    async fn mood(&self) -> Option<Mood>;

    /// The viewer's preferred platform
    async fn platform(&self) -> Option<Platform>;

    async fn device(&self) -> Option<Device>;

    /// Signal source name for logging
    fn name(&self) -> &'static str;
}

/// Signals drawn uniformly at random, for demos
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSignals;

#[async_trait::async_trait]
impl ContextSignals for RandomSignals {
    async fn weather(&self) -> Option<Weather> {
        Weather::ALL.choose(&mut rand::thread_rng()).copied()
    }

    async fn mood(&self) -> Option<Mood> {
        Mood::ALL.choose(&mut rand::thread_rng()).copied()
    }

    async fn platform(&self) -> Option<Platform> {
        Platform::STREAMING.choose(&mut rand::thread_rng()).copied()
    }

    async fn device(&self) -> Option<Device> {
        Device::ALL.choose(&mut rand::thread_rng()).copied()
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Builds a context for `now` from the given signal source
#[instrument(skip(signals), fields(source = signals.name()))]
pub async fn detect_context(signals: &dyn ContextSignals, now: NaiveDateTime) -> UserContext {
    let context = UserContext {
        current_time: now,
        weather: signals.weather().await,
        mood: signals.mood().await,
        platform: signals.platform().await,
        available_time: Some(available_time_at(now.hour())),
        device: signals.device().await,
    };

    tracing::debug!(
        mood = ?context.mood,
        weather = ?context.weather,
        platform = ?context.platform,
        "Detected user context"
    );

    context
}

/// Lunch hours are short, early evening is medium, anything else is long
pub fn available_time_at(hour: u32) -> AvailableTime {
    match hour {
        12..=14 => AvailableTime::Short,
        18..=20 => AvailableTime::Medium,
        _ => AvailableTime::Long,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 6)
            .unwrap()
            .and_hms_opt(13, 15, 0)
            .unwrap()
    }

    #[test]
    fn test_available_time_at() {
        assert_eq!(available_time_at(12), AvailableTime::Short);
        assert_eq!(available_time_at(14), AvailableTime::Short);
        assert_eq!(available_time_at(19), AvailableTime::Medium);
        assert_eq!(available_time_at(21), AvailableTime::Long);
        assert_eq!(available_time_at(3), AvailableTime::Long);
    }

    #[test]
    fn test_detect_context_uses_signals() {
        let mut signals = MockContextSignals::new();
        signals.expect_weather().times(1).returning(|| Some(Weather::Rainy));
        signals.expect_mood().times(1).returning(|| Some(Mood::Thoughtful));
        signals.expect_platform().times(1).returning(|| None);
        signals.expect_device().times(1).returning(|| Some(Device::Tv));
        signals.expect_name().returning(|| "mock");

        let context = tokio_test::block_on(detect_context(&signals, noon()));

        assert_eq!(context.current_time, noon());
        assert_eq!(context.weather, Some(Weather::Rainy));
        assert_eq!(context.mood, Some(Mood::Thoughtful));
        assert_eq!(context.platform, None);
        assert_eq!(context.device, Some(Device::Tv));
        assert_eq!(context.available_time, Some(AvailableTime::Short));
    }

    #[test]
    fn test_random_signals_stay_in_known_values() {
        let signals = RandomSignals;
        for _ in 0..20 {
            let context = tokio_test::block_on(detect_context(&signals, noon()));
            assert!(context.mood.is_some_and(|m| Mood::ALL.contains(&m)));
            assert!(context.weather.is_some_and(|w| Weather::ALL.contains(&w)));
            assert!(context
                .platform
                .is_some_and(|p| Platform::STREAMING.contains(&p)));
            assert!(context.device.is_some_and(|d| Device::ALL.contains(&d)));
        }
    }
}
