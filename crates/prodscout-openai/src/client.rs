//! HTTP client for the OpenAI chat-completions API.
//!
//! Every call requests `json_schema` structured output and parses the
//! message content into a typed payload. Use [`OpenAiClient::new`] for
//! production or [`OpenAiClient::with_base_url`] to point at a mock server
//! in tests.

use std::time::Duration;

use serde::de::DeserializeOwned;

use prodscout_core::Candidate;

use crate::error::OpenAiError;
use crate::types::{
    product_list_schema, subject_phrases_schema, ChatMessage, ChatRequest, ChatResponse,
    JsonSchemaFormat, ProductListPayload, ResponseFormat, SubjectPhrases,
};

const DEFAULT_BASE_URL: &str = "https://api.openai.com";

const EXTRACTION_MODEL: &str = "gpt-4o-mini-2024-07-18";
const PHRASES_MODEL: &str = "gpt-4o-2024-08-06";

const EXTRACTION_SYSTEM_PROMPT: &str = "You are a brand and product finding assistant. \
You will be given a list of comments and should return unique brand/product combinations \
as a valid JSON object.";

const PHRASES_SYSTEM_PROMPT: &str = "Given a search query provide a comprehensive list of \
phrases that should be included (because they are relevant to the query) and excluded \
(because they are not related at all). Please respond in the provided format";

/// Client for the OpenAI chat-completions endpoint.
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    /// Creates a client against the production OpenAI API.
    ///
    /// # Errors
    ///
    /// Returns [`OpenAiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, OpenAiError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`OpenAiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, OpenAiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Extracts clearly-named (brand, product) pairs from a batch of comment
    /// text.
    ///
    /// The prompt instructs the model to skip generic category-only names
    /// ("toaster") and return only explicit brand/product combinations.
    ///
    /// # Errors
    ///
    /// - [`OpenAiError::Api`] on a non-2xx response or empty completion.
    /// - [`OpenAiError::Http`] on network failure.
    /// - [`OpenAiError::Deserialize`] if the completion is not the expected
    ///   JSON shape.
    pub async fn extract_candidates(&self, comments: &str) -> Result<Vec<Candidate>, OpenAiError> {
        let user_prompt = format!(
            "Instructions:\n\
             - Extract the brand and product name from the comments. Do NOT allow for generic \
             product names like \"toaster\". If there is no clear product name do not include \
             the product.\n\
             - Return *only* the extracted brand and product combinations in the provided JSON \
             format. The brand_name and product_name must be strings.\n\n\
             Comments:\n{comments}"
        );

        let payload: ProductListPayload = self
            .chat_structured(
                EXTRACTION_MODEL,
                EXTRACTION_SYSTEM_PROMPT,
                &user_prompt,
                "product_list",
                product_list_schema(),
            )
            .await?;

        Ok(payload.products)
    }

    /// Generates included/excluded phrase vocabularies for a category.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`OpenAiClient::extract_candidates`].
    pub async fn subject_phrases(&self, category: &str) -> Result<SubjectPhrases, OpenAiError> {
        self.chat_structured(
            PHRASES_MODEL,
            PHRASES_SYSTEM_PROMPT,
            category,
            "subject_phrases",
            subject_phrases_schema(),
        )
        .await
    }

    async fn chat_structured<T: DeserializeOwned>(
        &self,
        model: &str,
        system: &str,
        user: &str,
        schema_name: &str,
        schema: serde_json::Value,
    ) -> Result<T, OpenAiError> {
        let request = ChatRequest {
            model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            response_format: ResponseFormat {
                kind: "json_schema",
                json_schema: JsonSchemaFormat {
                    name: schema_name,
                    schema,
                    strict: true,
                },
            },
        };

        tracing::debug!(model, schema_name, "requesting structured completion");

        let url = format!("{}/v1/chat/completions", self.base_url);
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(OpenAiError::Api(format!(
                "chat completion ({schema_name}) failed with status {}",
                response.status()
            )));
        }

        let completion: ChatResponse =
            response
                .json()
                .await
                .map_err(|e| OpenAiError::Api(format!("completion parse error: {e}")))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| OpenAiError::Api("completion contained no choices".to_string()))?;

        serde_json::from_str(&content).map_err(|e| OpenAiError::Deserialize {
            context: format!("structured output ({schema_name})"),
            source: e,
        })
    }
}
