//! OpenAI chat-completions client with JSON-schema structured output.
//!
//! Two operations back the pipeline: extracting (brand, product) candidate
//! pairs from a batch of comment text, and generating the included/excluded
//! subject-phrase vocabularies for a product category.

pub mod client;
pub mod error;
pub mod types;

pub use client::OpenAiClient;
pub use error::OpenAiError;
pub use types::SubjectPhrases;
