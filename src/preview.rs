use serde::{Deserialize, Serialize};

use crate::config::PreviewConfig;
use crate::error::{Error, Result};

pub static PREVIEW_PATH: &str = "/api/preview";

/// The document being previewed.
///
/// Deserializes either from a plain `{"slug": "..."}` or from a studio
/// document where the slug is stored as `{"slug": {"current": "..."}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDocument")]
pub struct DocumentRef {
    pub slug: String,
}

#[derive(Deserialize)]
struct RawDocument {
    slug: RawSlug,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSlug {
    Plain(String),
    Field { current: String },
}

impl From<RawDocument> for DocumentRef {
    fn from(doc: RawDocument) -> Self {
        let slug = match doc.slug {
            RawSlug::Plain(s) => s,
            RawSlug::Field { current } => current,
        };
        Self { slug }
    }
}

impl DocumentRef {
    pub fn new(slug: impl Into<String>) -> Self {
        Self { slug: slug.into() }
    }
}

/// Secret and slug are percent-encoded here; pass them raw
pub fn resolve_preview_url(config: &PreviewConfig, doc: &DocumentRef) -> Result<String> {
    if doc.slug.is_empty() {
        return Err(Error::EmptySlug);
    }

    Ok(format!(
        "{}{}?secret={}&slug={}",
        config.base_origin(),
        PREVIEW_PATH,
        urlencoding::encode(config.secret()),
        urlencoding::encode(&doc.slug),
    ))
}
