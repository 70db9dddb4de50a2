mod api;
mod middleware;

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use prodscout_inference::{NerClient, SentimentClient};
use prodscout_openai::OpenAiClient;
use prodscout_pipeline::{MemoryCache, PipelineDeps, RedditEvidence};
use prodscout_reddit::{RedditClient, RedditCredentials};

use crate::{
    api::{build_app, AppState},
    middleware::AuthState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = prodscout_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let credentials = RedditCredentials {
        client_id: config.reddit_client_id.clone(),
        client_secret: config.reddit_client_secret.clone(),
        user_agent: config.reddit_user_agent.clone(),
    };
    let reddit = RedditClient::new(&credentials, config.http_timeout_secs).await?;
    let evidence = RedditEvidence::new(
        reddit,
        config.search_subreddits.clone(),
        config.submission_limit,
    );
    let tagger = NerClient::new(&config.ner_url, config.http_timeout_secs)?;
    let classifier = SentimentClient::new(&config.sentiment_url, config.http_timeout_secs)?;
    let generator = OpenAiClient::new(&config.openai_api_key, config.http_timeout_secs)?;

    let deps = PipelineDeps {
        evidence: Arc::new(evidence),
        tagger: Arc::new(tagger),
        classifier: Arc::new(classifier),
        generator: Arc::new(generator),
        cache: Arc::new(MemoryCache::new()),
        cache_ttl: Duration::from_secs(config.cache_ttl_secs),
    };

    let auth = AuthState::from_env(matches!(
        config.env,
        prodscout_core::Environment::Development
    ))?;
    let app = build_app(
        AppState {
            deps: Arc::new(deps),
        },
        auth,
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "prodscout-server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
