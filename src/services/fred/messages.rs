//! Wire types for `GET /series/observations`

use serde::Deserialize;

/// Marker FRED uses for a period with no value.
pub const MISSING_VALUE: &str = ".";

#[derive(Debug, Clone, Deserialize)]
pub struct ObservationsResponse {
    #[serde(default)]
    pub observations: Vec<RawObservation>,
}

/// Observation as FRED sends it: both fields are strings.
#[derive(Debug, Clone, Deserialize)]
pub struct RawObservation {
    pub date: String,
    pub value: String,
}
