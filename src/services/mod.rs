pub mod catalog;
pub mod context;
pub mod suggestions;

pub use catalog::Catalog;
pub use context::{detect_context, ContextSignals, RandomSignals};
pub use suggestions::{generate_suggestions, generate_suggestions_with_rng, SuggestionEngine};
