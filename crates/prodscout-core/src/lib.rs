use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod app_config;
pub mod config;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};

/// A discovered (brand, product) name pair.
///
/// Identity for deduplication and lookup is case-insensitive on both
/// fields (see [`Candidate::identity`]); the display form keeps the
/// casing of the first occurrence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Candidate {
    pub brand_name: String,
    pub product_name: String,
}

impl Candidate {
    #[must_use]
    pub fn new(brand_name: impl Into<String>, product_name: impl Into<String>) -> Self {
        Self {
            brand_name: brand_name.into(),
            product_name: product_name.into(),
        }
    }

    /// Case-insensitive identity key used for dedup and score lookup.
    #[must_use]
    pub fn identity(&self) -> (String, String) {
        (
            self.brand_name.to_lowercase(),
            self.product_name.to_lowercase(),
        )
    }
}

/// A candidate paired with its average sentiment in `[-1.0, 1.0]`.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub score: f32,
}

/// One unit of forum-style discussion text with nested replies.
///
/// A node exclusively owns its replies; sibling order is the original
/// source order and is preserved through every pipeline stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscussionNode {
    pub id: String,
    pub body: String,
    pub score: i64,
    #[serde(default)]
    pub replies: Vec<DiscussionNode>,
}

impl DiscussionNode {
    /// All body text in this tree: the node's own body first, then each
    /// reply subtree depth-first in sibling order.
    #[must_use]
    pub fn flattened_bodies(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_bodies(&mut out);
        out
    }

    fn collect_bodies<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(self.body.as_str());
        for reply in &self.replies {
            reply.collect_bodies(out);
        }
    }
}

/// Incoming product search request.
///
/// Only `product_category` drives the discovery pipeline; the price and
/// site fields ride along for the routing layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub product_category: String,
    pub min_price: f64,
    pub max_price: f64,
    #[serde(default)]
    pub sites: Vec<String>,
    #[serde(default)]
    pub retailers: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_case_insensitive() {
        let a = Candidate::new("Acme", "Widget");
        let b = Candidate::new("acme", "WIDGET");
        assert_eq!(a.identity(), b.identity());
    }

    #[test]
    fn identity_distinguishes_products() {
        let a = Candidate::new("Acme", "Widget");
        let b = Candidate::new("Acme", "Gadget");
        assert_ne!(a.identity(), b.identity());
    }

    #[test]
    fn scored_candidate_serializes_flat() {
        let scored = ScoredCandidate {
            candidate: Candidate::new("Vitamix", "5200"),
            score: 0.4,
        };
        let json = serde_json::to_value(&scored).unwrap();
        assert_eq!(json["brand_name"], "Vitamix");
        assert_eq!(json["product_name"], "5200");
        assert!((json["score"].as_f64().unwrap() - 0.4).abs() < 1e-6);
    }

    #[test]
    fn flattened_bodies_walks_replies_depth_first() {
        let tree = DiscussionNode {
            id: "a".to_string(),
            body: "root".to_string(),
            score: 0,
            replies: vec![
                DiscussionNode {
                    id: "b".to_string(),
                    body: "first child".to_string(),
                    score: 0,
                    replies: vec![DiscussionNode {
                        id: "c".to_string(),
                        body: "grandchild".to_string(),
                        score: 0,
                        replies: Vec::new(),
                    }],
                },
                DiscussionNode {
                    id: "d".to_string(),
                    body: "second child".to_string(),
                    score: 0,
                    replies: Vec::new(),
                },
            ],
        };
        assert_eq!(
            tree.flattened_bodies(),
            vec!["root", "first child", "grandchild", "second child"]
        );
    }

    #[test]
    fn discussion_node_replies_default_empty() {
        let node: DiscussionNode =
            serde_json::from_str(r#"{"id":"c1","body":"text","score":3}"#).unwrap();
        assert!(node.replies.is_empty());
    }
}
