use serde_json::Value;

use crate::identify::enrichers::{str_field, Enricher};
use crate::identify::types::{ContentType, Details, IdentifyResponse, Platform, PostDetails};
use crate::identify::IdentifyError;

/// Reddit rejects default/empty user agents, so every request carries a
/// fixed identifying string.
const USER_AGENT: &str = "linkid-daemon/0.1";

/// Fetch the structured form of a comments-thread page and extract the
/// post record.
pub(super) async fn enrich(
    enricher: &Enricher,
    post_url: &str,
) -> Result<IdentifyResponse, IdentifyError> {
    let json_url = resource_url(post_url);

    let response = enricher
        .client
        .get(&json_url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()
        .await?;

    if !response.status().is_success() {
        log::warn!("reddit json endpoint: status={}", response.status());
        return Ok(IdentifyResponse::other(Platform::Reddit));
    }

    let payload: Value = match response.json().await {
        Ok(payload) => payload,
        Err(err) => {
            log::warn!("reddit payload was not valid json: {err}");
            return Ok(IdentifyResponse::other(Platform::Reddit));
        }
    };

    let Some(details) = post_details(&payload) else {
        log::warn!("reddit payload had an unexpected shape: {json_url}");
        return Ok(IdentifyResponse::other(Platform::Reddit));
    };

    log::info!("platform=reddit outcome=success subreddit={}", details.subreddit);

    Ok(IdentifyResponse {
        source: Platform::Reddit,
        content_type: ContentType::Post,
        details: Some(Details::Post(details)),
    })
}

/// The machine-readable twin of a post page: same URL with query and
/// fragment dropped, trailing slashes stripped, ".json" appended.
pub(crate) fn resource_url(post_url: &str) -> String {
    let page = post_url
        .split(['?', '#'])
        .next()
        .unwrap_or(post_url)
        .trim_end_matches('/');

    format!("{page}.json")
}

/// The post record lives at [0].data.children[0].data; anything else is
/// treated as upstream failure.
pub(crate) fn post_details(payload: &Value) -> Option<PostDetails> {
    let post = payload
        .get(0)?
        .get("data")?
        .get("children")?
        .get(0)?
        .get("data")?;

    Some(PostDetails {
        title: str_field(post, "title"),
        subreddit: str_field(post, "subreddit_name_prefixed"),
        score: post.get("score").and_then(Value::as_i64).unwrap_or_default(),
        author: str_field(post, "author"),
        comments: post
            .get("num_comments")
            .and_then(Value::as_u64)
            .unwrap_or_default(),
    })
}
