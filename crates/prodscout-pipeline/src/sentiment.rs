//! Sentiment aggregation: per-candidate average of signed comment scores.

use futures::future::join_all;

use prodscout_core::{Candidate, DiscussionNode};

use crate::error::PipelineError;
use crate::traits::SentimentClassifier;

/// Score each candidate by the sentiment of the comments that mention it.
///
/// Classifies every body in the filtered forest once, replies included
/// (trees flatten depth-first; classifications fan out concurrently and fan
/// back in preserving order), converts each label to a signed score, and
/// accumulates that score for every candidate whose brand name or product
/// name occurs in the body as a case-insensitive substring. One body may
/// contribute to several candidates. Each candidate's scores are averaged;
/// a candidate mentioned by no comment scores `0.0`.
///
/// The result keeps the candidates' input order.
///
/// # Errors
///
/// Propagates the first classifier failure.
pub async fn score_candidates(
    classifier: &dyn SentimentClassifier,
    nodes: &[DiscussionNode],
    candidates: Vec<Candidate>,
) -> Result<Vec<(Candidate, f32)>, PipelineError> {
    let bodies: Vec<&str> = nodes
        .iter()
        .flat_map(DiscussionNode::flattened_bodies)
        .collect();

    let classifications = join_all(bodies.iter().map(|body| classifier.classify(body))).await;

    let mut signed_scores = Vec::with_capacity(classifications.len());
    for result in classifications {
        signed_scores.push(result?.signed());
    }

    let bodies_lower: Vec<String> = bodies.iter().map(|body| body.to_lowercase()).collect();

    let mut scored = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let (brand_lower, product_lower) = candidate.identity();

        let mut sum = 0.0_f32;
        let mut count = 0_usize;
        for (body, score) in bodies_lower.iter().zip(&signed_scores) {
            if body.contains(&brand_lower) || body.contains(&product_lower) {
                sum += *score;
                count += 1;
            }
        }

        #[allow(clippy::cast_precision_loss)]
        let average = if count == 0 { 0.0 } else { sum / count as f32 };
        scored.push((candidate, average));
    }

    Ok(scored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedClassifier;

    fn node(body: &str) -> DiscussionNode {
        DiscussionNode {
            id: "c".to_string(),
            body: body.to_string(),
            score: 0,
            replies: Vec::new(),
        }
    }

    #[tokio::test]
    async fn averages_signed_scores_of_matching_comments() {
        let classifier = ScriptedClassifier::new(&[
            ("love", 0.9),
            ("meh", -0.2),
            ("decent", 0.5),
        ]);
        let nodes = vec![
            node("love my Vitamix"),
            node("vitamix is meh"),
            node("the VITAMIX is decent"),
        ];

        let scored = score_candidates(
            &classifier,
            &nodes,
            vec![Candidate::new("Vitamix", "5200")],
        )
        .await
        .unwrap();

        // (0.9 - 0.2 + 0.5) / 3 = 0.4
        assert!((scored[0].1 - 0.4).abs() < 1e-6);
    }

    #[tokio::test]
    async fn reply_bodies_contribute_to_scores() {
        let classifier = ScriptedClassifier::new(&[("love", 0.8), ("broke", -0.4)]);
        let nodes = vec![DiscussionNode {
            id: "c1".to_string(),
            body: "love my Vitamix".to_string(),
            score: 10,
            replies: vec![node("mine broke after a month, vitamix quality slipped")],
        }];

        let scored = score_candidates(
            &classifier,
            &nodes,
            vec![Candidate::new("Vitamix", "5200")],
        )
        .await
        .unwrap();

        // (0.8 - 0.4) / 2
        assert!((scored[0].1 - 0.2).abs() < 1e-6);
    }

    #[tokio::test]
    async fn unmentioned_candidate_scores_exactly_zero() {
        let classifier = ScriptedClassifier::new(&[("anything", 0.8)]);
        let nodes = vec![node("anything about blenders")];

        let scored = score_candidates(
            &classifier,
            &nodes,
            vec![Candidate::new("Breville", "Bit More")],
        )
        .await
        .unwrap();

        assert_eq!(scored[0].1, 0.0);
    }

    #[tokio::test]
    async fn one_comment_contributes_to_multiple_candidates() {
        let classifier = ScriptedClassifier::new(&[("both", 0.6)]);
        let nodes = vec![node("both the Vitamix and the Oster are fine")];

        let scored = score_candidates(
            &classifier,
            &nodes,
            vec![
                Candidate::new("Vitamix", "5200"),
                Candidate::new("Oster", "Pro 1200"),
            ],
        )
        .await
        .unwrap();

        assert!((scored[0].1 - 0.6).abs() < 1e-6);
        assert!((scored[1].1 - 0.6).abs() < 1e-6);
    }

    #[tokio::test]
    async fn product_name_match_counts_too() {
        let classifier = ScriptedClassifier::new(&[("5200", 0.7)]);
        let nodes = vec![node("the 5200 model never quits")];

        let scored = score_candidates(
            &classifier,
            &nodes,
            vec![Candidate::new("Vitamix", "5200")],
        )
        .await
        .unwrap();

        assert!((scored[0].1 - 0.7).abs() < 1e-6);
    }
}
