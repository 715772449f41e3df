use url::Url;

use crate::identify::classify::classify;
use crate::identify::types::{Classified, EnrichTarget, Platform};

fn classified(url: &str) -> Classified {
    classify(&Url::parse(url).expect("test url must parse"))
}

fn video_id(url: &str) -> Option<String> {
    match classified(url).target {
        Some(EnrichTarget::Video { id }) => Some(id),
        _ => None,
    }
}

// --- unrecognized hosts ---

#[test]
fn unknown_host_is_other_with_no_target() {
    let result = classified("https://example.com/watch?v=abc123");
    assert_eq!(result.platform, Platform::Other);
    assert_eq!(result.target, None);
}

#[test]
fn bare_host_is_other() {
    let result = classified("https://news.ycombinator.com/");
    assert_eq!(result.platform, Platform::Other);
    assert_eq!(result.target, None);
}

// --- youtube ---

#[test]
fn watch_url_extracts_v_parameter() {
    let result = classified("https://www.youtube.com/watch?v=abc123");
    assert_eq!(result.platform, Platform::Youtube);
    assert_eq!(
        result.target,
        Some(EnrichTarget::Video {
            id: "abc123".to_string()
        })
    );
}

#[test]
fn watch_url_takes_first_v_value() {
    assert_eq!(
        video_id("https://www.youtube.com/watch?v=first&v=second"),
        Some("first".to_string())
    );
}

#[test]
fn watch_url_without_v_has_no_target() {
    let result = classified("https://www.youtube.com/watch?t=30");
    assert_eq!(result.platform, Platform::Youtube);
    assert_eq!(result.target, None);
}

#[test]
fn watch_url_with_empty_v_has_no_target() {
    assert_eq!(video_id("https://www.youtube.com/watch?v="), None);
}

#[test]
fn non_watch_path_is_known_platform_without_target() {
    let result = classified("https://www.youtube.com/@somechannel/videos");
    assert_eq!(result.platform, Platform::Youtube);
    assert_eq!(result.target, None);
}

#[test]
fn short_link_extracts_path_id() {
    let result = classified("https://youtu.be/abc123");
    assert_eq!(result.platform, Platform::Youtube);
    assert_eq!(
        result.target,
        Some(EnrichTarget::Video {
            id: "abc123".to_string()
        })
    );
}

#[test]
fn short_link_id_ignores_query_string() {
    assert_eq!(
        video_id("https://youtu.be/abc123?t=42&feature=share"),
        Some("abc123".to_string())
    );
}

#[test]
fn short_link_root_has_no_target() {
    let result = classified("https://youtu.be/");
    assert_eq!(result.platform, Platform::Youtube);
    assert_eq!(result.target, None);
}

#[test]
fn host_matching_is_substring_based() {
    // Loose on purpose: subdomains carrying the marker still classify.
    let result = classified("https://music.youtube.com/watch?v=xyz789");
    assert_eq!(result.platform, Platform::Youtube);
    assert_eq!(
        result.target,
        Some(EnrichTarget::Video {
            id: "xyz789".to_string()
        })
    );
}

// --- reddit ---

#[test]
fn comments_thread_carries_url_through() {
    let input = "https://www.reddit.com/r/rust/comments/abc123/some_title/";
    let result = classified(input);
    assert_eq!(result.platform, Platform::Reddit);
    assert_eq!(
        result.target,
        Some(EnrichTarget::Post {
            url: Url::parse(input).unwrap().to_string()
        })
    );
}

#[test]
fn old_reddit_subdomain_still_classifies() {
    let result = classified("https://old.reddit.com/r/rust/comments/abc123/some_title/");
    assert_eq!(result.platform, Platform::Reddit);
    assert!(result.target.is_some());
}

#[test]
fn non_comments_path_has_no_target() {
    let result = classified("https://www.reddit.com/r/rust/");
    assert_eq!(result.platform, Platform::Reddit);
    assert_eq!(result.target, None);
}

#[test]
fn short_host_without_comments_has_no_target() {
    let result = classified("https://redd.it/abc123");
    assert_eq!(result.platform, Platform::Reddit);
    assert_eq!(result.target, None);
}
