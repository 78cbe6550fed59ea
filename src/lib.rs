//! Macrolens: macroeconomic indicator aggregation service.
//!
//! Fetches FRED time series by category, derives summary analytics and
//! optionally hands a latest-value snapshot to a generative model.

pub mod aggregation;
pub mod analytics;
pub mod common;
pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
