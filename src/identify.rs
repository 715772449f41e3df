pub mod classify;
pub mod enrichers;
pub mod types;

use url::Url;

use crate::config::Config;
use enrichers::Enricher;
use types::IdentifyResponse;

/// Failures that escape the core. Upstream protocol problems (bad status,
/// empty results, unexpected payload shape) are handled inside the
/// enrichers and degrade the response; only transport-level trouble
/// surfaces here.
#[derive(thiserror::Error, Debug)]
pub enum IdentifyError {
    #[error("reqwest error: {0:?}")]
    Reqwest(#[from] reqwest::Error),

    #[error("unexpected error: {0:?}")]
    Other(#[from] anyhow::Error),
}

/// Classifier + enricher composed per request. Holds no per-request state,
/// so a single instance serves concurrent requests.
pub struct Identifier {
    enricher: Enricher,
}

impl Identifier {
    pub fn new(config: &Config) -> Result<Self, IdentifyError> {
        Ok(Self {
            enricher: Enricher::new(config)?,
        })
    }

    /// Classify the URL, then run the platform strategy if its gate
    /// passed. The caller guarantees `url` is absolute with a host.
    pub async fn identify(&self, url: &Url) -> Result<IdentifyResponse, IdentifyError> {
        let classified = classify::classify(url);
        log::debug!("classified {url} as {:?}", classified.platform);

        self.enricher.enrich(&classified).await
    }
}
