use std::time::Duration;

const DEFAULT_ADDR: &str = "0.0.0.0:8080";

const DEFAULT_YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// Bounded timeout for every outbound call; upstream APIs occasionally
/// hang and a request must never be held open indefinitely.
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    /// YouTube Data API key. Absence is a handled condition: video URLs
    /// still classify, enrichment degrades to an error detail.
    pub youtube_api_key: Option<String>,

    /// Base URL of the YouTube Data API. Overridable so tests can point
    /// the enricher at a local stub.
    pub youtube_api_base: String,

    /// Address the daemon binds to.
    pub addr: String,

    /// Timeout applied to the shared outbound HTTP client.
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        let youtube_api_key = std::env::var("YOUTUBE_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        let youtube_api_base = std::env::var("LINKID_YOUTUBE_API_BASE")
            .unwrap_or_else(|_| DEFAULT_YOUTUBE_API_BASE.to_string());

        let addr = std::env::var("LINKID_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

        let http_timeout = std::env::var("LINKID_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|secs| secs.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS));

        Self {
            youtube_api_key,
            youtube_api_base,
            addr,
            http_timeout,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            youtube_api_key: None,
            youtube_api_base: DEFAULT_YOUTUBE_API_BASE.to_string(),
            addr: DEFAULT_ADDR.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}
