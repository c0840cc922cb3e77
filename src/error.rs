use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("missing configuration value {0}")]
    MissingConfig(&'static str),
    #[error("invalid project url `{origin}`: {reason}")]
    InvalidOrigin { origin: String, reason: String },
    #[error("document slug is empty")]
    EmptySlug,
    #[error("could not read configuration: {0}")]
    Figment(#[from] figment::Error),
    #[error("could not serialize schema: {0}")]
    Serialize(String),
}

impl Error {
    /// Deployment misconfiguration, as opposed to a bad per-call input
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::MissingConfig(_) | Self::InvalidOrigin { .. } | Self::Figment(_)
        )
    }
}
