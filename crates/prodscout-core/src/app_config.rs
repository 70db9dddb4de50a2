use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub reddit_client_id: String,
    pub reddit_client_secret: String,
    pub reddit_user_agent: String,
    pub openai_api_key: String,
    pub ner_url: String,
    pub sentiment_url: String,
    pub http_timeout_secs: u64,
    pub search_subreddits: Vec<String>,
    pub submission_limit: u32,
    pub cache_ttl_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("reddit_client_id", &self.reddit_client_id)
            .field("reddit_client_secret", &"[redacted]")
            .field("reddit_user_agent", &self.reddit_user_agent)
            .field("openai_api_key", &"[redacted]")
            .field("ner_url", &self.ner_url)
            .field("sentiment_url", &self.sentiment_url)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("search_subreddits", &self.search_subreddits)
            .field("submission_limit", &self.submission_limit)
            .field("cache_ttl_secs", &self.cache_ttl_secs)
            .finish()
    }
}
