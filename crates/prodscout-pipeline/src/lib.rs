//! Product discovery and ranking pipeline for prodscout.
//!
//! Given a product category, collects discussion trees from the evidence
//! source, prunes them to topically relevant nodes via entity tagging,
//! extracts (brand, product) candidates through structured LLM generation
//! with a TTL cache, drops candidates matching the category's exclusion
//! vocabulary, scores the survivors by sentiment across the filtered text,
//! and returns them ranked by descending average sentiment.
//!
//! Stages run strictly feed-forward; every external capability sits behind a
//! narrow trait in [`traits`] so tests can substitute deterministic fakes.

pub mod cache;
pub mod error;
pub mod extract;
pub mod filter;
pub mod phrases;
pub mod pipeline;
pub mod rank;
pub mod sentiment;
pub mod testing;
pub mod traits;

mod adapters;

pub use adapters::RedditEvidence;
pub use cache::MemoryCache;
pub use error::PipelineError;
pub use pipeline::{run_product_search, PipelineDeps};
