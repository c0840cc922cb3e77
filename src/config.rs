use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};

pub static CONFIG_FILE: &str = "studio.toml";
pub static ENV_PREFIX: &str = "SANITY_STUDIO_";

static PROJECT_URL_VAR: &str = "SANITY_STUDIO_PROJECT_URL";
static PREVIEW_SECRET_VAR: &str = "SANITY_STUDIO_PREVIEW_SECRET";

/// Raw settings as read from `studio.toml` and the environment
#[derive(Debug, Default, Deserialize)]
struct Settings {
    #[serde(default)]
    project_url: Option<String>,
    #[serde(default)]
    preview_secret: Option<String>,
}

/// Origin and shared secret used to build preview URLs.
///
/// Loaded once at startup and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewConfig {
    base_origin: String,
    secret: String,
}

impl PreviewConfig {
    /// Validate an origin and secret.
    ///
    /// Trailing slashes are stripped from the origin, which must be an
    /// absolute `http` or `https` URL.
    pub fn new(base_origin: impl Into<String>, secret: impl Into<String>) -> Result<Self> {
        let base_origin = required(Some(base_origin.into()), PROJECT_URL_VAR)?;
        let secret = required(Some(secret.into()), PREVIEW_SECRET_VAR)?;

        let base_origin = base_origin.trim().trim_end_matches('/').to_owned();
        check_origin(&base_origin)?;

        Ok(Self {
            base_origin,
            secret,
        })
    }

    /// Default sources: `studio.toml`, overridden by `SANITY_STUDIO_*` variables
    pub fn figment() -> Figment {
        let mut figment = Figment::new()
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX).ignore(&["project_url", "preview_secret"]));

        // Taken verbatim: `Env` would turn a secret like `12345` into a number
        for (key, var) in [
            ("project_url", PROJECT_URL_VAR),
            ("preview_secret", PREVIEW_SECRET_VAR),
        ] {
            if let Ok(raw) = std::env::var(var) {
                figment = figment.merge(Serialized::default(key, raw));
            }
        }
        figment
    }

    pub fn from_figment(figment: &Figment) -> Result<Self> {
        let settings: Settings = figment.extract()?;
        debug!(
            project_url = settings.project_url.is_some(),
            preview_secret = settings.preview_secret.is_some(),
            "read preview settings"
        );

        let base_origin = required(settings.project_url, PROJECT_URL_VAR)?;
        let secret = required(settings.preview_secret, PREVIEW_SECRET_VAR)?;
        Self::new(base_origin, secret)
    }

    pub fn load() -> Result<Self> {
        Self::from_figment(&Self::figment())
    }

    pub fn base_origin(&self) -> &str {
        &self.base_origin
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

fn required(value: Option<String>, name: &'static str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(Error::MissingConfig(name)),
    }
}

fn check_origin(origin: &str) -> Result<()> {
    let invalid = |reason: String| Error::InvalidOrigin {
        origin: origin.to_owned(),
        reason,
    };

    let url = Url::parse(origin).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        scheme => return Err(invalid(format!("unsupported scheme `{scheme}`"))),
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host".into()));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("must not carry a query or fragment".into()));
    }

    Ok(())
}
