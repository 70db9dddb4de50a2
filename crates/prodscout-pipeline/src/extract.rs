//! Product extraction: batched structured generation with a TTL cache.

use std::collections::HashSet;
use std::time::Duration;

use sha2::{Digest, Sha256};

use prodscout_core::{Candidate, DiscussionNode};

use crate::error::PipelineError;
use crate::traits::{CandidateCache, CandidateGenerator};

/// Comment bodies per generation call; the last batch may be smaller.
const BATCH_SIZE: usize = 10;

/// Deterministic cache key for a query's candidate list.
#[must_use]
pub fn cache_key(query: &str) -> String {
    let digest = Sha256::digest(query.as_bytes());
    format!("search:{digest:x}")
}

/// Extract deduplicated candidates from the filtered forest's bodies.
///
/// Checks the cache first; a well-formed hit is returned as-is and no
/// generation happens. A malformed cache value is logged and treated as a
/// miss. On a miss, every node body (replies included, flattened
/// depth-first) is batched ([`BATCH_SIZE`] per call) and each batch's
/// generation failure contributes nothing rather than failing the stage.
/// Results are deduplicated case-insensitively keeping
/// the first occurrence, and non-empty results are written back with `ttl`.
/// Empty results are not cached, so an empty miss is retried on the next
/// identical query.
///
/// # Errors
///
/// Returns [`PipelineError::Cache`] if the cache store itself fails on read
/// or write.
pub async fn extract_candidates(
    generator: &dyn CandidateGenerator,
    cache: &dyn CandidateCache,
    nodes: &[DiscussionNode],
    query: &str,
    ttl: Duration,
) -> Result<Vec<Candidate>, PipelineError> {
    let key = cache_key(query);

    if let Some(raw) = cache.get(&key).await? {
        match serde_json::from_slice::<Vec<Candidate>>(&raw) {
            Ok(cached) => {
                tracing::info!(query, count = cached.len(), "candidate cache hit");
                return Ok(cached);
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "cache value invalid, reprocessing");
            }
        }
    }
    tracing::info!(query, "candidate cache miss, extracting");

    let bodies: Vec<&str> = nodes
        .iter()
        .flat_map(DiscussionNode::flattened_bodies)
        .collect();
    let mut all_candidates = Vec::new();
    for batch in bodies.chunks(BATCH_SIZE) {
        let joined = batch.join("\n");
        match generator.extract_candidates(&joined).await {
            Ok(batch_candidates) => all_candidates.extend(batch_candidates),
            Err(e) => {
                tracing::warn!(error = %e, "extraction batch failed, skipping batch");
            }
        }
    }

    let unique = dedup_candidates(all_candidates);

    if !unique.is_empty() {
        let raw = serde_json::to_vec(&unique).map_err(|e| PipelineError::Cache(e.to_string()))?;
        cache.set(&key, raw, ttl).await?;
    }

    Ok(unique)
}

/// Deduplicate by case-insensitive (brand, product) identity, keeping the
/// first occurrence's casing.
fn dedup_candidates(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for candidate in candidates {
        if seen.insert(candidate.identity()) {
            unique.push(candidate);
        }
    }
    unique
}
