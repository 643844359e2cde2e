// Upstream generative-text client and prompt templates.

pub mod client;
pub mod error;
pub mod prompt;

pub use client::{GeminiClient, TextGenerator};
pub use error::ServiceError;
