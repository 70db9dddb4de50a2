//! Named-entity tagging client.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::InferenceError;

/// One grouped entity returned by the tagger.
#[derive(Debug, Clone, Deserialize)]
pub struct EntityTag {
    pub entity_group: String,
    #[serde(default)]
    pub score: f32,
    #[serde(default)]
    pub word: String,
}

#[derive(Serialize)]
struct TagRequest<'a> {
    inputs: &'a str,
    parameters: TagParameters,
}

#[derive(Serialize)]
struct TagParameters {
    aggregation_strategy: &'static str,
}

/// NER HTTP client.
pub struct NerClient {
    client: reqwest::Client,
    url: String,
}

impl NerClient {
    /// Create a new `NerClient` against the given endpoint.
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

    /// Tag entities in one text body.
    ///
    /// Returns grouped entities (`entity_group`, confidence, surface form)
    /// in text order.
    ///
    /// # Errors
    ///
    /// Returns [`InferenceError::Ner`] if the request fails or the response
    /// cannot be parsed.
    pub async fn tag(&self, text: &str) -> Result<Vec<EntityTag>, InferenceError> {
        let request = TagRequest {
            inputs: text,
            parameters: TagParameters {
                aggregation_strategy: "simple",
            },
        };

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| InferenceError::Ner(format!("NER request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(InferenceError::Ner(format!(
                "NER endpoint returned status {}",
                response.status()
            )));
        }

        let tags: Vec<EntityTag> = response
            .json()
            .await
            .map_err(|e| InferenceError::Ner(format!("NER response parse error: {e}")))?;

        Ok(tags)
    }
}
