//! HTTP surface: routing, request parsing, error mapping

pub mod error;
pub mod http;
pub mod period;

pub use error::ApiError;
pub use http::*;
pub use period::Period;
