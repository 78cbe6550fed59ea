//! FRED (Federal Reserve Economic Data) series provider

pub mod client;
pub mod messages;

pub use client::FredClient;
pub use messages::{ObservationsResponse, RawObservation, MISSING_VALUE};
