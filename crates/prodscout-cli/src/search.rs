//! Search command handlers for the CLI.
//!
//! These build the live clients from config and run the discovery pipeline
//! once, printing results to stdout.

use std::sync::Arc;
use std::time::Duration;

use prodscout_core::{AppConfig, SearchRequest};
use prodscout_inference::{NerClient, SentimentClient};
use prodscout_openai::OpenAiClient;
use prodscout_pipeline::{run_product_search, MemoryCache, PipelineDeps, RedditEvidence};
use prodscout_reddit::{RedditClient, RedditCredentials};

async fn build_deps(config: &AppConfig, subreddits: Vec<String>) -> anyhow::Result<PipelineDeps> {
    let credentials = RedditCredentials {
        client_id: config.reddit_client_id.clone(),
        client_secret: config.reddit_client_secret.clone(),
        user_agent: config.reddit_user_agent.clone(),
    };
    let reddit = RedditClient::new(&credentials, config.http_timeout_secs)
        .await
        .map_err(|e| anyhow::anyhow!("failed to build Reddit client: {e}"))?;

    let subreddits = if subreddits.is_empty() {
        config.search_subreddits.clone()
    } else {
        tracing::info!(subreddits = ?subreddits, "overriding configured subreddits");
        subreddits
    };
    let evidence = RedditEvidence::new(reddit, subreddits, config.submission_limit);

    let tagger = NerClient::new(&config.ner_url, config.http_timeout_secs)
        .map_err(|e| anyhow::anyhow!("failed to build NER client: {e}"))?;
    let classifier = SentimentClient::new(&config.sentiment_url, config.http_timeout_secs)
        .map_err(|e| anyhow::anyhow!("failed to build sentiment client: {e}"))?;
    let generator = OpenAiClient::new(&config.openai_api_key, config.http_timeout_secs)
        .map_err(|e| anyhow::anyhow!("failed to build OpenAI client: {e}"))?;

    Ok(PipelineDeps {
        evidence: Arc::new(evidence),
        tagger: Arc::new(tagger),
        classifier: Arc::new(classifier),
        generator: Arc::new(generator),
        cache: Arc::new(MemoryCache::new()),
        cache_ttl: Duration::from_secs(config.cache_ttl_secs),
    })
}

/// Run the full discovery pipeline for `category` and print the ranking.
pub(crate) async fn run_search(
    config: &AppConfig,
    category: &str,
    subreddits: Vec<String>,
) -> anyhow::Result<()> {
    let deps = build_deps(config, subreddits).await?;
    tracing::info!(category, "starting product discovery");
    let request = SearchRequest {
        product_category: category.to_string(),
        min_price: 0.0,
        max_price: f64::MAX,
        sites: Vec::new(),
        retailers: Vec::new(),
    };

    let ranked = run_product_search(&deps, &request).await?;

    if ranked.is_empty() {
        println!("no candidates found for '{category}'");
        return Ok(());
    }

    println!("{} candidates for '{category}':", ranked.len());
    for (i, scored) in ranked.iter().enumerate() {
        println!(
            "{:>3}. {:+.3}  {} {}",
            i + 1,
            scored.score,
            scored.candidate.brand_name,
            scored.candidate.product_name
        );
    }

    Ok(())
}

/// Print the included/excluded phrase vocabulary for `category`.
pub(crate) async fn run_phrases(config: &AppConfig, category: &str) -> anyhow::Result<()> {
    let generator = OpenAiClient::new(&config.openai_api_key, config.http_timeout_secs)
        .map_err(|e| anyhow::anyhow!("failed to build OpenAI client: {e}"))?;

    let phrases = generator.subject_phrases(category).await?;

    println!("included: [{}]", phrases.included_words.join(", "));
    println!("excluded: [{}]", phrases.excluded_words.join(", "));

    Ok(())
}
