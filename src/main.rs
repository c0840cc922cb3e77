use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::builder::NonEmptyStringValueParser;
use clap::{value_parser, Parser, Subcommand, ValueEnum};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use studio_preview::config::CONFIG_FILE;
use studio_preview::render::{embed_frame_sized, FrameSize, MAX_FRAME_WIDTH};
use studio_preview::schema::studio_schema;
use studio_preview::{extract_embed, resolve_preview_url, DocumentRef, PreviewConfig, VideoRef};

#[derive(Debug, Parser)]
#[command(version, about = "Preview URLs, video embeds and schema for the blog studio")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the preview URL for a document
    Url {
        /// Document slug
        #[arg(
            required_unless_present = "document",
            conflicts_with = "document",
            value_parser = NonEmptyStringValueParser::new()
        )]
        slug: Option<String>,
        /// Studio document as JSON, with the slug at `slug.current`
        #[arg(long)]
        document: Option<PathBuf>,
    },
    /// Extract an embed from a video URL
    Embed {
        url: String,
        /// Print the rendered HTML instead of the descriptor
        #[arg(long)]
        html: bool,
        /// Frame width when rendering HTML
        #[arg(
            long,
            default_value_t = 560,
            value_parser = value_parser!(u32).range(1..=i64::from(MAX_FRAME_WIDTH))
        )]
        width: u32,
    },
    /// Print the content schema
    Schema {
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Toml,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Url { slug, document } => {
            let config = PreviewConfig::load()
                .with_context(|| format!("Error reading {} or environment", CONFIG_FILE))?;
            debug!(origin = config.base_origin(), "loaded preview config");

            let doc = match document {
                Some(path) => read_document(&path)?,
                None => DocumentRef::new(slug.unwrap_or_default()),
            };
            println!("{}", resolve_preview_url(&config, &doc)?);
        }
        Command::Embed { url, html, width } => {
            let embed = extract_embed(&VideoRef::new(url.as_str()));
            if !embed.is_present() {
                warn!(url = %url, "no video id found");
            }
            if html {
                println!("{}", embed_frame_sized(&embed, FrameSize { width }).into_string());
            } else {
                println!("{}", serde_json::to_string_pretty(&embed)?);
            }
        }
        Command::Schema { format } => {
            let schema = studio_schema();
            let text = match format {
                Format::Json => schema.to_json()?,
                Format::Toml => schema.to_toml()?,
            };
            println!("{}", text);
        }
    }

    Ok(())
}


fn read_document(path: &Path) -> Result<DocumentRef> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Error reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("No slug in {}", path.display()))
}
