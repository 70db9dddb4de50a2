//! Clients for the entity-tagging and sentiment-classification inference
//! endpoints.
//!
//! Both speak the HuggingFace inference HTTP shape: POST a JSON body with an
//! `inputs` field, get back per-text predictions. The models behind the
//! endpoints are stateless, so the clients are safe to share across
//! concurrent requests.

pub mod error;
pub mod ner;
pub mod sentiment;

pub use error::InferenceError;
pub use ner::{EntityTag, NerClient};
pub use sentiment::{Polarity, PolarityLabel, SentimentClient};
