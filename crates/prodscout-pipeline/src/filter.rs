//! Relevance filter: recursive prune of discussion trees.

use futures::future::BoxFuture;

use prodscout_core::DiscussionNode;

use crate::error::PipelineError;
use crate::traits::EntityTagger;

/// Entity groups that make a node directly relevant.
const RELEVANT_ENTITY_GROUPS: [&str; 2] = ["ORG", "MISC"];

/// Prune a forest of discussion trees to topically relevant nodes.
///
/// A node is kept if the tagger finds at least one ORG/MISC entity in its
/// body, or if any of its replies is kept (so ancestors of relevant text
/// survive). Kept nodes carry exactly their kept replies, in the original
/// sibling order; dropped nodes take their whole subtree with them.
///
/// Re-filtering a filtered forest is a no-op: every surviving node is
/// either directly relevant or has a directly relevant descendant.
///
/// # Errors
///
/// Propagates the first tagger failure; there is no per-node skip.
pub async fn filter_discussions(
    tagger: &dyn EntityTagger,
    nodes: Vec<DiscussionNode>,
) -> Result<Vec<DiscussionNode>, PipelineError> {
    let mut kept = Vec::with_capacity(nodes.len());
    for node in nodes {
        if let Some(filtered) = filter_node(tagger, node).await? {
            kept.push(filtered);
        }
    }
    Ok(kept)
}

// Recursion over an owned tree; boxed because async fns cannot recurse
// directly.
fn filter_node(
    tagger: &dyn EntityTagger,
    node: DiscussionNode,
) -> BoxFuture<'_, Result<Option<DiscussionNode>, PipelineError>> {
    Box::pin(async move {
        let DiscussionNode {
            id,
            body,
            score,
            replies,
        } = node;

        // Replies first (bottom-up), so the keep decision can see them.
        let mut kept_replies = Vec::new();
        for reply in replies {
            if let Some(kept) = filter_node(tagger, reply).await? {
                kept_replies.push(kept);
            }
        }

        let tags = tagger.tag(&body).await?;
        let directly_relevant = tags
            .iter()
            .any(|tag| RELEVANT_ENTITY_GROUPS.contains(&tag.entity_group.as_str()));

        if directly_relevant || !kept_replies.is_empty() {
            Ok(Some(DiscussionNode {
                id,
                body,
                score,
                replies: kept_replies,
            }))
        } else {
            Ok(None)
        }
    })
}
