use serde::Deserialize;

/// Subreddit metadata from `/r/{name}/about`.
#[derive(Debug, Clone, Deserialize)]
pub struct Subreddit {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub subscribers: u64,
    #[serde(default)]
    pub over18: bool,
}

/// One search result from `/r/{name}/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionSummary {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub num_comments: u64,
    #[serde(default)]
    pub over_18: bool,
}

/// Reddit's `{"kind": ..., "data": ...}` envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct Thing<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Listing<T> {
    pub data: ListingData<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListingData<T> {
    pub children: Vec<Thing<T>>,
}
