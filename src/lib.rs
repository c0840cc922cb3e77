//! Preview helpers for the blog studio.
//!
//! - [`preview::resolve_preview_url`] builds the URL the studio fetches to
//!   preview an unpublished document.
//! - [`embed::extract_embed`] turns a user-entered video URL into an
//!   [`embed::EmbedDescriptor`], and [`render`] turns that into HTML.
//! - [`schema::studio_schema`] is the content schema handed to the studio.

pub mod config;
pub mod embed;
pub mod error;
pub mod preview;
pub mod render;
pub mod schema;

pub use crate::config::PreviewConfig;
pub use crate::embed::{extract_embed, EmbedDescriptor, MissingReason, VideoRef};
pub use crate::error::{Error, Result};
pub use crate::preview::{resolve_preview_url, DocumentRef};
