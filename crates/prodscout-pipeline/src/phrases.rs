//! Subject-phrase exclusion filter.

use prodscout_core::Candidate;
use prodscout_openai::SubjectPhrases;

/// Drop candidates matching the category's exclusion vocabulary.
///
/// A candidate is removed when its brand name or product name exactly
/// matches an excluded phrase (case-sensitive, as produced), or when its
/// product name case-insensitively equals the category string itself
/// (the extractor occasionally returns the bare category as a "product").
/// Surviving candidates keep their order.
#[must_use]
pub fn clean_candidates(
    candidates: Vec<Candidate>,
    phrases: &SubjectPhrases,
    category: &str,
) -> Vec<Candidate> {
    let category_lower = category.to_lowercase();

    candidates
        .into_iter()
        .filter(|candidate| {
            let excluded = phrases
                .excluded_words
                .iter()
                .any(|word| word == &candidate.brand_name || word == &candidate.product_name);
            let is_category = candidate.product_name.to_lowercase() == category_lower;
            !excluded && !is_category
        })
        .collect()
}
