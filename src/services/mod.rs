//! External collaborators: the statistics API and the narrative model.

pub mod fred;
pub mod gemini;
pub mod narrative;
pub mod series_provider;

pub use fred::FredClient;
pub use gemini::GeminiClient;
pub use narrative::{NarrativeError, NarrativeGenerator};
pub use series_provider::{DateRange, FetchError, SeriesProvider};
