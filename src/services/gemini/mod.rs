//! Google Gemini narrative generator

pub mod client;
pub mod messages;
pub mod parser;
pub mod prompt;

pub use client::GeminiClient;
pub use parser::{extract_sections, Sections};
pub use prompt::{build_analysis_prompt, build_context, build_insight_prompt};
