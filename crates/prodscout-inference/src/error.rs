use thiserror::Error;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("NER endpoint error: {0}")]
    Ner(String),

    #[error("sentiment endpoint error: {0}")]
    Sentiment(String),
}
