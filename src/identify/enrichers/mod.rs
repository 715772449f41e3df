pub mod reddit;
pub mod youtube;

use serde_json::Value;

use crate::config::Config;
use crate::identify::types::{Classified, EnrichTarget, IdentifyResponse};
use crate::identify::IdentifyError;

/// Platform enrichment strategies behind a single dispatch point. The
/// classified target is a tagged variant, so strategy selection is a match
/// rather than nested host conditionals.
pub struct Enricher {
    client: reqwest::Client,
    youtube_api_key: Option<String>,
    youtube_api_base: String,
}

impl Enricher {
    pub fn new(config: &Config) -> Result<Self, IdentifyError> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;

        Ok(Self {
            client,
            youtube_api_key: config.youtube_api_key.clone(),
            youtube_api_base: config.youtube_api_base.clone(),
        })
    }

    /// Run the strategy selected by classification. A classified URL with
    /// no target never touches the network.
    pub async fn enrich(
        &self,
        classified: &Classified,
    ) -> Result<IdentifyResponse, IdentifyError> {
        let Some(target) = &classified.target else {
            log::info!("platform={:?} outcome=no-target", classified.platform);
            return Ok(IdentifyResponse::other(classified.platform));
        };

        match target {
            EnrichTarget::Video { id } => youtube::enrich(self, id).await,
            EnrichTarget::Post { url } => reddit::enrich(self, url).await,
        }
    }
}

/// String field lookup; a missing or non-string value inside an otherwise
/// well-shaped record becomes "".
pub(crate) fn str_field(obj: &Value, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
