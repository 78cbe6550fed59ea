//! Shared data models spanning the fetch, analytics and narrative layers.

pub mod analytics;
pub mod ordered;
pub mod series;
pub mod snapshot;

pub use analytics::{
    MovingAveragePoint, NormalizedPoint, PeriodChange, SeriesAnalytics, Trend, YoYChange,
};
pub use ordered::OrderedMap;
pub use series::{LatestObservation, Observation, Series};
pub use snapshot::{Analysis, CategoryEntries, IndicatorSnapshot, SnapshotEntry};
