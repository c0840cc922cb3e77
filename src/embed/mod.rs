mod youtube;

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use url::{ParseError, Url};

pub use self::youtube::YouTube;

/// The value of an embed field as stored by the studio (`{"url": "..."}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRef {
    #[serde(rename = "url", default)]
    pub source_url: String,
}

impl VideoRef {
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
        }
    }
}

/// A video id that passed its platform's grammar check
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExternalVideoId(String);

impl ExternalVideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ExternalVideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingReason {
    NoIdExtracted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EmbedDescriptor {
    Present {
        embed_url: String,
        source_url: String,
    },
    Missing {
        reason: MissingReason,
    },
}

impl EmbedDescriptor {
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present { .. })
    }

    pub fn embed_url(&self) -> Option<&str> {
        match self {
            Self::Present { embed_url, .. } => Some(embed_url),
            Self::Missing { .. } => None,
        }
    }
}

pub trait VideoPlatform {
    /// Base the video id is appended to
    const EMBED_BASE: &'static str;

    fn matches_host(host: &str) -> bool;

    fn video_id(url: &Url) -> Option<ExternalVideoId>;

    fn embed_url(id: &ExternalVideoId) -> String {
        format!("{}/{}", Self::EMBED_BASE, id)
    }
}

pub fn extract_embed(video: &VideoRef) -> EmbedDescriptor {
    match resolve_embed_url(&video.source_url) {
        Some(embed_url) => EmbedDescriptor::Present {
            embed_url,
            source_url: video.source_url.clone(),
        },
        None => EmbedDescriptor::Missing {
            reason: MissingReason::NoIdExtracted,
        },
    }
}

fn resolve_embed_url(source: &str) -> Option<String> {
    let url = parse_lenient(source)?;
    match url.host_str() {
        Some(host) if YouTube::matches_host(host) => {
            YouTube::video_id(&url).map(|id| YouTube::embed_url(&id))
        }
        _ => None,
    }
}

/// Parse user input, assuming `https://` when the scheme was left off
fn parse_lenient(source: &str) -> Option<Url> {
    let source = source.trim();
    if source.is_empty() {
        return None;
    }

    let url = match Url::parse(source) {
        Ok(url) => url,
        Err(ParseError::RelativeUrlWithoutBase) => {
            Url::parse(&format!("https://{}", source.trim_start_matches('/'))).ok()?
        }
        Err(_) => return None,
    };

    match url.scheme() {
        "http" | "https" => Some(url),
        _ => None,
    }
}
