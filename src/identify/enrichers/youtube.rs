use serde_json::Value;

use crate::identify::enrichers::{str_field, Enricher};
use crate::identify::types::{
    Comment, ContentType, Details, IdentifyResponse, Platform, VideoDetails,
};
use crate::identify::IdentifyError;

const COMMENT_LIMIT: &str = "5";

/// Fetch video metadata, then top comments. The two calls are sequential
/// and independently fallible: a failed comment fetch only drops the
/// `comments` key, never the metadata already in hand.
pub(super) async fn enrich(
    enricher: &Enricher,
    video_id: &str,
) -> Result<IdentifyResponse, IdentifyError> {
    let Some(api_key) = enricher.youtube_api_key.as_deref() else {
        log::warn!("YOUTUBE_API_KEY is missing; returning degraded video response");
        return Ok(IdentifyResponse {
            source: Platform::Youtube,
            content_type: ContentType::Video,
            details: Some(Details::Error {
                error: "YouTube API key not configured.".to_string(),
            }),
        });
    };

    let response = enricher
        .client
        .get(format!("{}/videos", enricher.youtube_api_base))
        .query(&[
            ("id", video_id),
            ("key", api_key),
            ("part", "snippet,statistics"),
        ])
        .send()
        .await?;

    if !response.status().is_success() {
        log::warn!("youtube videos endpoint: status={}", response.status());
        return Ok(IdentifyResponse::other(Platform::Youtube));
    }

    let payload: Value = match response.json().await {
        Ok(payload) => payload,
        Err(err) => {
            log::warn!("youtube videos payload was not valid json: {err}");
            return Ok(IdentifyResponse::other(Platform::Youtube));
        }
    };

    let Some(mut details) = video_details(&payload) else {
        log::info!("platform=youtube outcome=no-items id={video_id}");
        return Ok(IdentifyResponse::other(Platform::Youtube));
    };

    details.comments = top_comments(enricher, video_id, api_key).await;

    log::info!(
        "platform=youtube outcome=success id={video_id} comments={}",
        details.comments.as_ref().map(Vec::len).unwrap_or(0)
    );

    Ok(IdentifyResponse {
        source: Platform::Youtube,
        content_type: ContentType::Video,
        details: Some(Details::Video(details)),
    })
}

/// Best-effort comment fetch. Every failure mode (transport, status,
/// shape) is caught here so the caller's metadata survives.
async fn top_comments(
    enricher: &Enricher,
    video_id: &str,
    api_key: &str,
) -> Option<Vec<Comment>> {
    let request = enricher
        .client
        .get(format!("{}/commentThreads", enricher.youtube_api_base))
        .query(&[
            ("videoId", video_id),
            ("key", api_key),
            ("part", "snippet"),
            ("order", "relevance"),
            ("maxResults", COMMENT_LIMIT),
        ]);

    let response = match request.send().await {
        Ok(response) => response,
        Err(err) => {
            log::warn!("youtube comments fetch failed: {err}");
            return None;
        }
    };

    if !response.status().is_success() {
        log::warn!("youtube comments endpoint: status={}", response.status());
        return None;
    }

    match response.json::<Value>().await {
        Ok(payload) => Some(comment_list(&payload)),
        Err(err) => {
            log::warn!("youtube comments payload was not valid json: {err}");
            None
        }
    }
}

/// Extract title/channel/description from a videos-by-id payload.
/// Returns None on an empty result list or an unrecognizable shape.
pub(crate) fn video_details(payload: &Value) -> Option<VideoDetails> {
    let snippet = payload.get("items")?.get(0)?.get("snippet")?;

    Some(VideoDetails {
        title: str_field(snippet, "title"),
        channel_name: str_field(snippet, "channelTitle"),
        bio: str_field(snippet, "description"),
        comments: None,
    })
}

/// Map comment threads to {author, text} pairs, preserving upstream order.
/// Threads missing the top-level comment structure are skipped.
pub(crate) fn comment_list(payload: &Value) -> Vec<Comment> {
    payload
        .get("items")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| {
                    let snippet = item
                        .get("snippet")?
                        .get("topLevelComment")?
                        .get("snippet")?;

                    Some(Comment {
                        author: str_field(snippet, "authorDisplayName"),
                        text: str_field(snippet, "textDisplay"),
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}
