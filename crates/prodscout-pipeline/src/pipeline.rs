//! Pipeline orchestration.

use std::sync::Arc;
use std::time::Duration;

use prodscout_core::{ScoredCandidate, SearchRequest};

use crate::error::PipelineError;
use crate::extract::extract_candidates;
use crate::filter::filter_discussions;
use crate::phrases::clean_candidates;
use crate::rank::rank_candidates;
use crate::sentiment::score_candidates;
use crate::traits::{
    CandidateCache, CandidateGenerator, EntityTagger, EvidenceSource, SentimentClassifier,
};

/// External capabilities wired in at the composition root.
///
/// All members are stateless per call and shared across concurrent
/// requests; per-request working data stays inside [`run_product_search`].
pub struct PipelineDeps {
    pub evidence: Arc<dyn EvidenceSource>,
    pub tagger: Arc<dyn EntityTagger>,
    pub classifier: Arc<dyn SentimentClassifier>,
    pub generator: Arc<dyn CandidateGenerator>,
    pub cache: Arc<dyn CandidateCache>,
    pub cache_ttl: Duration,
}

/// Run the full discovery pipeline for one search request.
///
/// 1. Collect ranked discussion trees for the category.
/// 2. Prune them to topically relevant nodes.
/// 3. Extract (brand, product) candidates (cached, batched, deduplicated).
/// 4. Drop candidates matching the category's exclusion vocabulary.
/// 5. Score each survivor by average sentiment across the filtered text.
/// 6. Rank by descending score.
///
/// An empty ranking is a valid outcome when nothing survives filtering.
///
/// # Errors
///
/// Returns [`PipelineError`] on any unrecovered stage failure; partial
/// rankings are never returned once a stage fails.
pub async fn run_product_search(
    deps: &PipelineDeps,
    request: &SearchRequest,
) -> Result<Vec<ScoredCandidate>, PipelineError> {
    let category = &request.product_category;

    let evidence = deps.evidence.collect(category).await;
    tracing::info!(category, count = evidence.len(), "collected discussion trees");

    let filtered = filter_discussions(deps.tagger.as_ref(), evidence).await?;
    tracing::info!(count = filtered.len(), "relevance filter kept trees");

    let candidates = extract_candidates(
        deps.generator.as_ref(),
        deps.cache.as_ref(),
        &filtered,
        category,
        deps.cache_ttl,
    )
    .await?;
    tracing::info!(count = candidates.len(), "extracted candidates");

    let subject_phrases = deps.generator.subject_phrases(category).await?;
    let cleaned = clean_candidates(candidates, &subject_phrases, category);
    tracing::info!(count = cleaned.len(), "candidates after phrase filter");

    let scored = score_candidates(deps.classifier.as_ref(), &filtered, cleaned).await?;
    let ranked = rank_candidates(scored);
    tracing::info!(count = ranked.len(), "ranked candidates");

    Ok(ranked)
}
