use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use super::{ExternalVideoId, VideoPlatform};

static ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9A-Za-z_\-]{11}$").unwrap());

/// Path prefixes that carry the id as the following segment
static ID_PATHS: [&str; 5] = ["embed", "v", "e", "shorts", "live"];

pub struct YouTube;

impl VideoPlatform for YouTube {
    const EMBED_BASE: &'static str = "https://www.youtube.com/embed";

    fn matches_host(host: &str) -> bool {
        is_share_host(host) || is_site_host(host)
    }

    fn video_id(url: &Url) -> Option<ExternalVideoId> {
        let host = url.host_str()?;
        let segments: Vec<&str> = url.path_segments()?.filter(|s| !s.is_empty()).collect();

        let candidate = if is_share_host(host) {
            segments.first().map(|s| s.to_string())
        } else {
            match segments.as_slice() {
                ["watch", ..] => url
                    .query_pairs()
                    .find(|(k, _)| k == "v")
                    .map(|(_, v)| v.into_owned()),
                [prefix, id, ..] if ID_PATHS.contains(prefix) => Some(id.to_string()),
                _ => None,
            }
        };

        let candidate = candidate?;
        let id = strip_trailing(&candidate);
        if ID_RE.is_match(id) {
            Some(ExternalVideoId(id.to_owned()))
        } else {
            None
        }
    }
}

/// `youtu.be/<id>` share links
fn is_share_host(host: &str) -> bool {
    matches!(host, "youtu.be" | "www.youtu.be")
}

fn is_site_host(host: &str) -> bool {
    let host = ["www.", "m.", "music."]
        .iter()
        .find_map(|prefix| host.strip_prefix(prefix))
        .unwrap_or(host);
    matches!(host, "youtube.com" | "youtube-nocookie.com")
}

/// Pasted links sometimes glue parameters straight onto the id
fn strip_trailing(candidate: &str) -> &str {
    candidate
        .split(|c| matches!(c, '&' | ';' | '?' | '#'))
        .next()
        .unwrap_or(candidate)
}

#[cfg(test)]
mod test {
    use super::*;

    fn id(url: &str) -> Option<String> {
        let url = Url::parse(url).ok()?;
        YouTube::video_id(&url).map(|id| id.as_str().to_owned())
    }

    #[test]
    fn hosts() {
        for host in [
            "youtube.com",
            "www.youtube.com",
            "m.youtube.com",
            "music.youtube.com",
            "www.youtube-nocookie.com",
            "youtu.be",
        ] {
            assert!(YouTube::matches_host(host), "{host}");
        }
        for host in ["vimeo.com", "youtube.co", "evil-youtube.com", "youtu.be.example.com"] {
            assert!(!YouTube::matches_host(host), "{host}");
        }
    }

    #[test]
    fn watch_pages() {
        let expected = Some("dQw4w9WgXcQ".to_owned());
        assert_eq!(id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"), expected);
        assert_eq!(id("https://m.youtube.com/watch?v=dQw4w9WgXcQ&t=42s"), expected);
        assert_eq!(
            id("https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ#t=10"),
            expected
        );
        assert_eq!(id("https://music.youtube.com/watch?v=dQw4w9WgXcQ&list=RD"), expected);
        assert_eq!(id("https://www.youtube.com/watch?list=PL123"), None);
    }

    #[test]
    fn path_ids() {
        let expected = Some("dQw4w9WgXcQ".to_owned());
        assert_eq!(id("https://youtu.be/dQw4w9WgXcQ"), expected);
        assert_eq!(id("https://youtu.be/dQw4w9WgXcQ?si=abc#t=3"), expected);
        assert_eq!(id("https://youtu.be/dQw4w9WgXcQ&feature=share"), expected);
        assert_eq!(id("https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1"), expected);
        assert_eq!(id("https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ"), expected);
        assert_eq!(id("https://www.youtube.com/v/dQw4w9WgXcQ"), expected);
        assert_eq!(id("https://www.youtube.com/shorts/dQw4w9WgXcQ/"), expected);
        assert_eq!(id("https://www.youtube.com/live/dQw4w9WgXcQ"), expected);
    }

    #[test]
    fn grammar() {
        assert_eq!(id("https://youtu.be/abc_DEF-123"), Some("abc_DEF-123".to_owned()));
        assert_eq!(id("https://youtu.be/dQw4w9WgXc"), None);
        assert_eq!(id("https://youtu.be/dQw4w9WgXcQQ"), None);
        assert_eq!(id("https://youtu.be/dQw4w9WgX%21Q"), None);
        assert_eq!(id("https://youtu.be/"), None);
        assert_eq!(id("https://www.youtube.com/channel/UCuAXFkgsw1L7xaCfnd5JJOw"), None);
        assert_eq!(id("https://www.youtube.com/embed/"), None);
    }

    #[test]
    fn embed_url() {
        let url = Url::parse("https://youtu.be/dQw4w9WgXcQ").unwrap();
        let id = YouTube::video_id(&url).unwrap();
        assert_eq!(
            YouTube::embed_url(&id),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
    }
}
