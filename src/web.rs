use std::sync::Arc;

use axum::{
    extract::State,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::signal;
use url::Url;

use crate::{
    config::Config,
    identify::{types::IdentifyResponse, Identifier, IdentifyError},
};

#[derive(Clone)]
struct SharedState {
    identifier: Arc<Identifier>,
}

async fn start_app(config: Config) -> anyhow::Result<()> {
    let addr = config.addr.clone();
    let app = router(&config)?;

    async fn shutdown_signal() {
        let ctrl_c = async {
            signal::ctrl_c()
                .await
                .expect("failed to install Ctrl+C handler");
        };

        let terminate = async {
            signal::unix::signal(signal::unix::SignalKind::terminate())
                .expect("failed to install signal handler")
                .recv()
                .await;
        };

        tokio::select! {
            _ = ctrl_c => {},
            _ = terminate => {},
        }
    }

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("listening on {addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

pub(crate) fn router(config: &Config) -> anyhow::Result<Router> {
    let shared_state = Arc::new(SharedState {
        identifier: Arc::new(Identifier::new(config)?),
    });

    Ok(Router::new()
        .route("/identify", post(identify))
        .layer(
            tower_http::trace::TraceLayer::new_for_http()
                .make_span_with(
                    tower_http::trace::DefaultMakeSpan::new().level(tracing::Level::INFO),
                )
                .on_response(
                    tower_http::trace::DefaultOnResponse::new().level(tracing::Level::INFO),
                ),
        )
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        .with_state(shared_state))
}

pub fn start_daemon(config: Config) -> anyhow::Result<()> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async { start_app(config).await })
}

// Error wrapper that teaches axum how to render core failures. Upstream
// protocol failures never reach this: they degrade inside the enricher.
#[derive(Debug)]
enum HttpError {
    InvalidUrl(String),
    Identify(IdentifyError),
}

impl IntoResponse for HttpError {
    fn into_response(self) -> axum::response::Response {
        match self {
            HttpError::InvalidUrl(url) => (
                axum::http::StatusCode::BAD_REQUEST,
                json!({"error": format!("not a valid absolute url: {url}")}).to_string(),
            ),
            HttpError::Identify(err @ IdentifyError::Reqwest(_)) => {
                log::error!("{err:?}");
                (
                    axum::http::StatusCode::BAD_GATEWAY,
                    json!({"error": err.to_string()}).to_string(),
                )
            }
            HttpError::Identify(err) => {
                log::error!("{err:?}");
                (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": err.to_string()}).to_string(),
                )
            }
        }
        .into_response()
    }
}

impl From<IdentifyError> for HttpError {
    fn from(err: IdentifyError) -> Self {
        Self::Identify(err)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IdentifyRequest {
    pub url: String,
}

async fn identify(
    State(state): State<Arc<SharedState>>,
    Json(payload): Json<IdentifyRequest>,
) -> Result<Json<IdentifyResponse>, HttpError> {
    log::debug!("payload: {payload:?}");

    let url = parse_absolute_url(&payload.url)
        .ok_or_else(|| HttpError::InvalidUrl(payload.url.clone()))?;

    let response = state.identifier.identify(&url).await?;
    Ok(Json(response))
}

/// Boundary validation: the core is only ever called with an absolute URL
/// that has a host.
pub(crate) fn parse_absolute_url(url: &str) -> Option<Url> {
    Url::parse(url).ok().filter(|url| url.host_str().is_some())
}
