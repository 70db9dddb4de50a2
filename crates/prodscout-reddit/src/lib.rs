//! Reddit evidence collection for prodscout.
//!
//! Wraps the Reddit OAuth REST API (client-credentials grant) and exposes the
//! evidence collector: fetch subreddit metadata, search submissions for a
//! product category, materialize full comment trees, and return them sorted
//! by descending score. Individual fetch failures are logged and skipped —
//! collection never aborts on partial failure.

pub mod client;
pub mod collector;
pub mod error;
pub mod types;

mod parse;

pub use client::{RedditClient, RedditCredentials};
pub use collector::collect_discussions;
pub use error::RedditError;
pub use types::{SubmissionSummary, Subreddit};
