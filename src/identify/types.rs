use serde::{Deserialize, Serialize};

/// Platform a URL was attributed to. Serialized as the upstream-facing
/// string tag ("youtube", "reddit", "other").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Youtube,
    Reddit,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Video,
    Post,
    Other,
}

/// Output of the classifier: the platform tag plus, when the platform's
/// gate condition passed, the target the enricher should fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub platform: Platform,
    pub target: Option<EnrichTarget>,
}

impl Classified {
    pub fn unmatched(platform: Platform) -> Self {
        Self {
            platform,
            target: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrichTarget {
    /// A video id extracted from a watch or short-link URL.
    Video { id: String },
    /// A reddit comments-thread page, carried through as the original URL.
    Post { url: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentifyResponse {
    pub source: Platform,
    pub content_type: ContentType,

    /// Platform-specific payload. Omitted (not null, not empty) whenever
    /// enrichment produced nothing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Details>,
}

impl IdentifyResponse {
    /// Degraded response: platform tag survives, everything else is "other".
    pub fn other(source: Platform) -> Self {
        Self {
            source,
            content_type: ContentType::Other,
            details: None,
        }
    }
}

/// Enrichment payload. The shape depends on the platform, so this is an
/// untagged union over the possible detail objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Details {
    Video(VideoDetails),
    Post(PostDetails),
    Error { error: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoDetails {
    pub title: String,
    pub channel_name: String,
    pub bio: String,

    /// Present only if the comment fetch itself succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<Comment>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDetails {
    pub title: String,
    pub subreddit: String,
    pub score: i64,
    pub author: String,
    pub comments: u64,
}
