use serde::{Deserialize, Serialize};

use prodscout_core::Candidate;

/// Included/excluded phrase vocabularies for a product category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectPhrases {
    pub included_words: Vec<String>,
    pub excluded_words: Vec<String>,
}

/// Structured-output payload for candidate extraction.
#[derive(Debug, Deserialize)]
pub(crate) struct ProductListPayload {
    pub products: Vec<Candidate>,
}

#[derive(Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub response_format: ResponseFormat<'a>,
}

#[derive(Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Serialize)]
pub(crate) struct ResponseFormat<'a> {
    #[serde(rename = "type")]
    pub kind: &'a str,
    pub json_schema: JsonSchemaFormat<'a>,
}

#[derive(Serialize)]
pub(crate) struct JsonSchemaFormat<'a> {
    pub name: &'a str,
    pub schema: serde_json::Value,
    pub strict: bool,
}

#[derive(Deserialize)]
pub(crate) struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
pub(crate) struct ChatChoice {
    pub message: ChatResponseMessage,
}

#[derive(Deserialize)]
pub(crate) struct ChatResponseMessage {
    pub content: String,
}

/// JSON schema for the `ProductList` structured output.
pub(crate) fn product_list_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "products": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "brand_name": { "type": "string" },
                        "product_name": { "type": "string" }
                    },
                    "required": ["brand_name", "product_name"],
                    "additionalProperties": false
                }
            }
        },
        "required": ["products"],
        "additionalProperties": false
    })
}

/// JSON schema for the `SubjectPhrases` structured output.
pub(crate) fn subject_phrases_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "included_words": { "type": "array", "items": { "type": "string" } },
            "excluded_words": { "type": "array", "items": { "type": "string" } }
        },
        "required": ["included_words", "excluded_words"],
        "additionalProperties": false
    })
}
