//! Capability seams for the pipeline's external collaborators.
//!
//! Each trait covers exactly one capability from the pipeline's point of
//! view; the concrete clients implement them in `adapters`, and tests use
//! the deterministic fakes in [`crate::testing`]. All implementations must
//! be stateless per call and safe for concurrent use.

use std::time::Duration;

use async_trait::async_trait;

use prodscout_core::{Candidate, DiscussionNode};
use prodscout_inference::{EntityTag, Polarity};
use prodscout_openai::SubjectPhrases;

use crate::error::PipelineError;

/// Ranked discussion trees for a category query.
///
/// Collection is best-effort: implementations skip failed units and log
/// them, returning whatever was gathered (possibly nothing).
#[async_trait]
pub trait EvidenceSource: Send + Sync {
    async fn collect(&self, category: &str) -> Vec<DiscussionNode>;
}

/// Named-entity tagging over one text body.
#[async_trait]
pub trait EntityTagger: Send + Sync {
    async fn tag(&self, text: &str) -> Result<Vec<EntityTag>, PipelineError>;
}

/// Binary sentiment classification over one text body.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<Polarity, PipelineError>;
}

/// Structured text generation: candidate extraction and phrase vocabularies.
#[async_trait]
pub trait CandidateGenerator: Send + Sync {
    async fn extract_candidates(&self, comments: &str) -> Result<Vec<Candidate>, PipelineError>;

    async fn subject_phrases(&self, category: &str) -> Result<SubjectPhrases, PipelineError>;
}

/// Byte-valued cache store with per-entry TTL.
///
/// Shared across requests; concurrent writers race with last-writer-wins,
/// which is correctness-preserving because values are pure memoizations.
#[async_trait]
pub trait CandidateCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, PipelineError>;

    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), PipelineError>;
}
