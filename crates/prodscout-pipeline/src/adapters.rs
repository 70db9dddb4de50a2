//! Capability-trait implementations for the concrete clients.

use async_trait::async_trait;

use prodscout_core::{Candidate, DiscussionNode};
use prodscout_inference::{EntityTag, NerClient, Polarity, SentimentClient};
use prodscout_openai::{OpenAiClient, SubjectPhrases};
use prodscout_reddit::{collect_discussions, RedditClient};

use crate::error::PipelineError;
use crate::traits::{CandidateGenerator, EntityTagger, EvidenceSource, SentimentClassifier};

/// Reddit-backed evidence source: a client plus the subreddits to search.
pub struct RedditEvidence {
    client: RedditClient,
    subreddits: Vec<String>,
    submission_limit: u32,
}

impl RedditEvidence {
    #[must_use]
    pub fn new(client: RedditClient, subreddits: Vec<String>, submission_limit: u32) -> Self {
        Self {
            client,
            subreddits,
            submission_limit,
        }
    }
}

#[async_trait]
impl EvidenceSource for RedditEvidence {
    async fn collect(&self, category: &str) -> Vec<DiscussionNode> {
        collect_discussions(
            &self.client,
            &self.subreddits,
            category,
            self.submission_limit,
        )
        .await
    }
}

#[async_trait]
impl EntityTagger for NerClient {
    async fn tag(&self, text: &str) -> Result<Vec<EntityTag>, PipelineError> {
        Ok(NerClient::tag(self, text).await?)
    }
}

#[async_trait]
impl SentimentClassifier for SentimentClient {
    async fn classify(&self, text: &str) -> Result<Polarity, PipelineError> {
        Ok(SentimentClient::classify(self, text).await?)
    }
}

#[async_trait]
impl CandidateGenerator for OpenAiClient {
    async fn extract_candidates(&self, comments: &str) -> Result<Vec<Candidate>, PipelineError> {
        Ok(OpenAiClient::extract_candidates(self, comments).await?)
    }

    async fn subject_phrases(&self, category: &str) -> Result<SubjectPhrases, PipelineError> {
        Ok(OpenAiClient::subject_phrases(self, category).await?)
    }
}
