pub mod context;
pub mod library;
pub mod movie;
pub mod suggestion;

pub use context::{AvailableTime, Device, Mood, Platform, UserContext, Weather};
pub use library::{Library, Shelf};
pub use movie::{Category, Movie, MovieId};
pub use suggestion::{
    DayOfWeek, Season, Suggestion, SuggestionContext, SuggestionKind, TimeOfDay,
};
