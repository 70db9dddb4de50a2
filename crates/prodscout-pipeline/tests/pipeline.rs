//! End-to-end pipeline tests against deterministic fakes.

use std::sync::Arc;
use std::time::Duration;

use prodscout_core::{Candidate, DiscussionNode, SearchRequest};
use prodscout_openai::SubjectPhrases;
use prodscout_pipeline::testing::{
    KeywordTagger, ScriptedClassifier, ScriptedGenerator, StaticEvidence,
};
use prodscout_pipeline::{run_product_search, MemoryCache, PipelineDeps};

fn node(id: &str, body: &str, score: i64) -> DiscussionNode {
    DiscussionNode {
        id: id.to_string(),
        body: body.to_string(),
        score,
        replies: Vec::new(),
    }
}

fn request(category: &str) -> SearchRequest {
    SearchRequest {
        product_category: category.to_string(),
        min_price: 0.0,
        max_price: 1000.0,
        sites: Vec::new(),
        retailers: Vec::new(),
    }
}

fn deps(
    evidence: Vec<DiscussionNode>,
    tagger_keywords: &[&str],
    classifier: ScriptedClassifier,
    generator: ScriptedGenerator,
) -> PipelineDeps {
    PipelineDeps {
        evidence: Arc::new(StaticEvidence::new(evidence)),
        tagger: Arc::new(KeywordTagger::new(tagger_keywords)),
        classifier: Arc::new(classifier),
        generator: Arc::new(generator),
        cache: Arc::new(MemoryCache::new()),
        cache_ttl: Duration::from_secs(3600),
    }
}

#[tokio::test]
async fn blender_scenario_ranks_single_candidate_by_average_sentiment() {
    let evidence = vec![
        node("c1", "The Vitamix 5200 is a tank, love it", 40),
        node("c2", "my Vitamix 5200 still going strong", 25),
        node("c3", "had a Vitamix 5200 break on me though", 10),
    ];
    let classifier = ScriptedClassifier::new(&[
        ("love it", 0.8),
        ("going strong", 0.6),
        ("break on me", -0.3),
    ]);
    let generator = ScriptedGenerator::with_candidates(vec![Candidate::new("Vitamix", "5200")]);

    let deps = deps(evidence, &["vitamix"], classifier, generator);
    let ranked = run_product_search(&deps, &request("blender")).await.unwrap();

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].candidate.brand_name, "Vitamix");
    assert_eq!(ranked[0].candidate.product_name, "5200");
    // (0.8 + 0.6 - 0.3) / 3
    let expected = (0.8 + 0.6 - 0.3) / 3.0;
    assert!((ranked[0].score - expected).abs() < 1e-6);
}

#[tokio::test]
async fn candidate_equal_to_category_is_excluded() {
    let evidence = vec![node("c1", "any Toaster does the job, love it", 5)];
    let classifier = ScriptedClassifier::new(&[("love it", 0.9)]);
    let generator = ScriptedGenerator::with_candidates(vec![
        Candidate::new("Generic", "Toaster"),
        Candidate::new("Breville", "Bit More"),
    ]);

    let deps = deps(evidence, &["toaster"], classifier, generator);
    let ranked = run_product_search(&deps, &request("toaster")).await.unwrap();

    let brands: Vec<&str> = ranked
        .iter()
        .map(|s| s.candidate.brand_name.as_str())
        .collect();
    assert_eq!(brands, vec!["Breville"]);
}

#[tokio::test]
async fn excluded_phrase_drops_candidate_before_scoring() {
    let evidence = vec![node("c1", "Juicero Press or a Vitamix 5200, love it", 5)];
    let classifier = ScriptedClassifier::new(&[("love it", 0.9)]);
    let generator = ScriptedGenerator::new(
        vec![
            Candidate::new("Juicero", "Press"),
            Candidate::new("Vitamix", "5200"),
        ],
        SubjectPhrases {
            included_words: vec!["blender".to_string()],
            excluded_words: vec!["Juicero".to_string()],
        },
    );

    let deps = deps(evidence, &["juicero", "vitamix"], classifier, generator);
    let ranked = run_product_search(&deps, &request("blender")).await.unwrap();

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].candidate.brand_name, "Vitamix");
}

#[tokio::test]
async fn candidate_mentioned_only_in_a_reply_is_scored() {
    let mut root = node("c1", "what blender should I get?", 12);
    root.replies = vec![node("c2", "the Vitamix 5200 never dies, love it", 30)];
    let classifier = ScriptedClassifier::new(&[("love it", 0.9)]);
    let generator = ScriptedGenerator::with_candidates(vec![Candidate::new("Vitamix", "5200")]);

    let deps = deps(vec![root], &["vitamix"], classifier, generator);
    let ranked = run_product_search(&deps, &request("blender")).await.unwrap();

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].candidate.brand_name, "Vitamix");
    assert!((ranked[0].score - 0.9).abs() < 1e-6);
}

#[tokio::test]
async fn no_evidence_yields_empty_ranking_not_an_error() {
    let classifier = ScriptedClassifier::new(&[]);
    let generator = ScriptedGenerator::with_candidates(Vec::new());

    let deps = deps(Vec::new(), &["vitamix"], classifier, generator);
    let ranked = run_product_search(&deps, &request("blender")).await.unwrap();

    assert!(ranked.is_empty());
}

#[tokio::test]
async fn irrelevant_evidence_is_pruned_before_extraction() {
    // Tagger knows no keywords, so every tree is dropped and extraction sees
    // no bodies; the scripted generator would still return a candidate, but
    // nothing mentions it, so it scores 0.0.
    let evidence = vec![node("c1", "totally off topic", 5)];
    let classifier = ScriptedClassifier::new(&[("off topic", -0.9)]);
    let generator = ScriptedGenerator::with_candidates(vec![Candidate::new("Vitamix", "5200")]);

    let deps = deps(evidence, &[], classifier, generator);
    let ranked = run_product_search(&deps, &request("blender")).await.unwrap();

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].score, 0.0);
}
