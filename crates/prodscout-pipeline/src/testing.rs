//! Deterministic fakes for the capability traits.
//!
//! Used by this crate's unit tests and the end-to-end pipeline tests; kept
//! public so downstream crates can exercise the pipeline without network
//! dependencies.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use prodscout_core::{Candidate, DiscussionNode};
use prodscout_inference::{EntityTag, Polarity, PolarityLabel};
use prodscout_openai::SubjectPhrases;

use crate::error::PipelineError;
use crate::traits::{CandidateGenerator, EntityTagger, EvidenceSource, SentimentClassifier};

/// Evidence source returning a fixed forest.
pub struct StaticEvidence {
    nodes: Vec<DiscussionNode>,
}

impl StaticEvidence {
    #[must_use]
    pub fn new(nodes: Vec<DiscussionNode>) -> Self {
        Self { nodes }
    }
}

#[async_trait]
impl EvidenceSource for StaticEvidence {
    async fn collect(&self, _category: &str) -> Vec<DiscussionNode> {
        self.nodes.clone()
    }
}

/// Tagger that reports an ORG entity for any text containing one of the
/// configured keywords (case-insensitive), and nothing otherwise.
pub struct KeywordTagger {
    keywords: Vec<String>,
}

impl KeywordTagger {
    #[must_use]
    pub fn new(keywords: &[&str]) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }
}

#[async_trait]
impl EntityTagger for KeywordTagger {
    async fn tag(&self, text: &str) -> Result<Vec<EntityTag>, PipelineError> {
        let lower = text.to_lowercase();
        let tags = self
            .keywords
            .iter()
            .filter(|keyword| lower.contains(keyword.as_str()))
            .map(|keyword| EntityTag {
                entity_group: "ORG".to_string(),
                score: 0.99,
                word: keyword.clone(),
            })
            .collect();
        Ok(tags)
    }
}

/// Classifier scripted by substring: the first `(needle, signed_score)`
/// whose needle occurs in the text wins; unmatched text scores +0.0.
pub struct ScriptedClassifier {
    scores: Vec<(String, f32)>,
}

impl ScriptedClassifier {
    #[must_use]
    pub fn new(scores: &[(&str, f32)]) -> Self {
        Self {
            scores: scores
                .iter()
                .map(|(needle, score)| ((*needle).to_string(), *score))
                .collect(),
        }
    }
}

#[async_trait]
impl SentimentClassifier for ScriptedClassifier {
    async fn classify(&self, text: &str) -> Result<Polarity, PipelineError> {
        let signed = self
            .scores
            .iter()
            .find(|(needle, _)| text.contains(needle))
            .map_or(0.0, |(_, score)| *score);

        let label = if signed < 0.0 {
            PolarityLabel::Negative
        } else {
            PolarityLabel::Positive
        };
        Ok(Polarity {
            label,
            score: signed.abs(),
        })
    }
}

/// Generator returning fixed candidates and phrases, counting extraction
/// calls so tests can assert the cache short-circuits.
pub struct ScriptedGenerator {
    candidates: Vec<Candidate>,
    phrases: SubjectPhrases,
    extract_calls: AtomicUsize,
}

impl ScriptedGenerator {
    #[must_use]
    pub fn new(candidates: Vec<Candidate>, phrases: SubjectPhrases) -> Self {
        Self {
            candidates,
            phrases,
            extract_calls: AtomicUsize::new(0),
        }
    }

    /// Generator with no exclusions and the given candidates.
    #[must_use]
    pub fn with_candidates(candidates: Vec<Candidate>) -> Self {
        Self::new(
            candidates,
            SubjectPhrases {
                included_words: Vec::new(),
                excluded_words: Vec::new(),
            },
        )
    }

    #[must_use]
    pub fn extract_calls(&self) -> usize {
        self.extract_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CandidateGenerator for ScriptedGenerator {
    async fn extract_candidates(&self, _comments: &str) -> Result<Vec<Candidate>, PipelineError> {
        self.extract_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.candidates.clone())
    }

    async fn subject_phrases(&self, _category: &str) -> Result<SubjectPhrases, PipelineError> {
        Ok(self.phrases.clone())
    }
}
