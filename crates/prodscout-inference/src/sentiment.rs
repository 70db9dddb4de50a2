//! Binary sentiment classification client.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::InferenceError;

/// Input-length bound for a single classification, in characters.
/// Longer texts are truncated at a char boundary before being sent.
const MAX_INPUT_CHARS: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PolarityLabel {
    #[serde(rename = "POSITIVE")]
    Positive,
    #[serde(rename = "NEGATIVE")]
    Negative,
}

/// Binary polarity with a confidence magnitude in `[0, 1]`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Polarity {
    pub label: PolarityLabel,
    pub score: f32,
}

impl Polarity {
    /// Signed sentiment score: `+score` for positive, `-score` for negative.
    #[must_use]
    pub fn signed(&self) -> f32 {
        match self.label {
            PolarityLabel::Positive => self.score,
            PolarityLabel::Negative => -self.score,
        }
    }
}

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    inputs: &'a str,
    parameters: ClassifyParameters,
}

#[derive(Serialize)]
struct ClassifyParameters {
    truncation: bool,
}

/// Some inference servers return `[[{label, score}, ...]]`, others a flat
/// `[{label, score}]`. Accept both; the first entry is the top label.
#[derive(Deserialize)]
#[serde(untagged)]
enum ClassifyResponse {
    Nested(Vec<Vec<Polarity>>),
    Flat(Vec<Polarity>),
}

/// Sentiment HTTP client.
pub struct SentimentClient {
    client: reqwest::Client,
    url: String,
}

impl SentimentClient {
    /// Create a new `SentimentClient` against the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`InferenceError::Http`] if the underlying client cannot be
    /// constructed.
    pub fn new(url: &str, timeout_secs: u64) -> Result<Self, InferenceError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    /// Classify one text body as positive or negative.
    ///
    /// # Errors
    ///
    /// Returns [`InferenceError::Sentiment`] if the request fails, the
    /// response cannot be parsed, or the endpoint returns no prediction.
    pub async fn classify(&self, text: &str) -> Result<Polarity, InferenceError> {
        let inputs = truncate_input(text);
        if inputs.len() < text.len() {
            tracing::debug!(
                original_chars = text.chars().count(),
                "truncated classification input"
            );
        }
        let request = ClassifyRequest {
            inputs,
            parameters: ClassifyParameters { truncation: true },
        };

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| InferenceError::Sentiment(format!("sentiment request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(InferenceError::Sentiment(format!(
                "sentiment endpoint returned status {}",
                response.status()
            )));
        }

        let body: ClassifyResponse = response.json().await.map_err(|e| {
            InferenceError::Sentiment(format!("sentiment response parse error: {e}"))
        })?;

        let top = match body {
            ClassifyResponse::Nested(rows) => rows.into_iter().next().and_then(|r| r.into_iter().next()),
            ClassifyResponse::Flat(row) => row.into_iter().next(),
        };

        top.ok_or_else(|| InferenceError::Sentiment("empty prediction".to_string()))
    }
}

/// Truncate to [`MAX_INPUT_CHARS`] without splitting a char.
fn truncate_input(text: &str) -> &str {
    match text.char_indices().nth(MAX_INPUT_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
