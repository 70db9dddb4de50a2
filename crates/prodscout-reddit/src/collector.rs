//! Evidence collector: ranked discussion trees for a product category.

use futures::future::join_all;

use prodscout_core::DiscussionNode;

use crate::client::RedditClient;

/// Collect discussion trees for `category` across the configured subreddits.
///
/// For each subreddit: confirm it exists, search submissions for the
/// category, then fetch every submission's comment tree. Comment fetches for
/// a subreddit's submissions run concurrently and fan back in preserving
/// submission order. A failure on any one subreddit or submission is logged
/// and that unit skipped; the collector never fails as a whole and returns
/// an empty list when everything failed.
///
/// The combined result is sorted by descending top-level score. The sort is
/// stable, so ties keep their discovery order.
pub async fn collect_discussions(
    client: &RedditClient,
    subreddits: &[String],
    category: &str,
    submission_limit: u32,
) -> Vec<DiscussionNode> {
    let mut all_nodes = Vec::new();

    for subreddit in subreddits {
        let info = match client.subreddit_info(subreddit).await {
            Ok(info) => info,
            Err(e) => {
                tracing::warn!(subreddit, error = %e, "subreddit lookup failed, skipping");
                continue;
            }
        };
        tracing::info!(
            subreddit = %info.display_name,
            subscribers = info.subscribers,
            "fetched subreddit info"
        );

        let submissions = match client
            .search_submissions(subreddit, category, submission_limit)
            .await
        {
            Ok(submissions) => submissions,
            Err(e) => {
                tracing::warn!(subreddit, error = %e, "submission search failed, skipping");
                continue;
            }
        };
        tracing::info!(
            subreddit,
            count = submissions.len(),
            "found submissions for category"
        );

        let fetches = submissions
            .iter()
            .map(|submission| client.submission_comments(&submission.id));
        let results = join_all(fetches).await;

        for (submission, result) in submissions.iter().zip(results) {
            match result {
                Ok(nodes) => all_nodes.extend(nodes),
                Err(e) => {
                    tracing::warn!(
                        submission = %submission.id,
                        error = %e,
                        "comment fetch failed, skipping submission"
                    );
                }
            }
        }
    }

    all_nodes.sort_by_key(|node| std::cmp::Reverse(node.score));
    all_nodes
}
