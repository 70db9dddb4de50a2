//! Comment-tree materialization from Reddit's listing JSON.
//!
//! `/comments/{id}` returns a two-element array: the submission listing and
//! the comment listing. Comment children of kind `t1` carry a `replies` field
//! that is either an empty string (leaf) or a nested listing; `more` stubs
//! are skipped. The reply tree is walked recursively, preserving sibling
//! order as returned by the API.

use serde_json::Value;

use prodscout_core::DiscussionNode;

/// Extract top-level comments (with full reply trees) from the raw
/// `/comments/{id}` response body.
pub(crate) fn comments_from_response(body: &Value) -> Vec<DiscussionNode> {
    // Element 0 is the submission itself; element 1 holds the comments.
    match body.as_array().and_then(|parts| parts.get(1)) {
        Some(listing) => nodes_from_listing(listing),
        None => Vec::new(),
    }
}

fn nodes_from_listing(listing: &Value) -> Vec<DiscussionNode> {
    let Some(children) = listing
        .get("data")
        .and_then(|data| data.get("children"))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    children
        .iter()
        .filter(|child| child.get("kind").and_then(Value::as_str) == Some("t1"))
        .filter_map(|child| child.get("data").and_then(node_from_comment))
        .collect()
}

fn node_from_comment(data: &Value) -> Option<DiscussionNode> {
    let id = data.get("id")?.as_str()?.to_string();
    let body = data.get("body")?.as_str()?.to_string();
    let score = data.get("score").and_then(Value::as_i64).unwrap_or(0);

    // `replies` is "" for leaves and a listing object otherwise.
    let replies = match data.get("replies") {
        Some(replies) if replies.is_object() => nodes_from_listing(replies),
        _ => Vec::new(),
    };

    Some(DiscussionNode {
        id,
        body,
        score,
        replies,
    })
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod parse_test;
