use url::Url;

use crate::identify::types::{Classified, EnrichTarget, Platform};

/// Classify a URL by originating platform and extract the enrichment
/// target if its gate condition holds. Pure and total: no I/O, never fails.
///
/// Host matching is substring-based on purpose (it also catches regional
/// hosts like music.youtube.com or old.reddit.com); lookalike hosts that
/// merely contain the marker will match too.
pub fn classify(url: &Url) -> Classified {
    let domain = url.host_str().unwrap_or_default().to_lowercase();
    let path = url.path();

    if domain.contains("youtube.com") || domain.contains("youtu.be") {
        let video_id = extract_video_id(url, &domain, path);
        return Classified {
            platform: Platform::Youtube,
            target: video_id.map(|id| EnrichTarget::Video { id }),
        };
    }

    if domain.contains("reddit.com") || domain.contains("redd.it") {
        // The gate is structural: only comments-thread pages are posts.
        // The enricher refetches the page itself, so the whole URL is the target.
        if path.contains("/comments/") {
            return Classified {
                platform: Platform::Reddit,
                target: Some(EnrichTarget::Post {
                    url: url.to_string(),
                }),
            };
        }
        return Classified::unmatched(Platform::Reddit);
    }

    Classified::unmatched(Platform::Other)
}

/// Best effort: long-form watch URLs carry the id in `v`, short links in
/// the path. Anything else (channel pages, playlists) yields no id.
fn extract_video_id(url: &Url, domain: &str, path: &str) -> Option<String> {
    let id = if domain.contains("youtube.com") && path.contains("watch") {
        url.query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())
    } else if domain.contains("youtu.be") {
        Some(path.trim_start_matches('/').to_string())
    } else {
        None
    };

    id.filter(|id| !id.is_empty())
}
