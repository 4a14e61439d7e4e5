use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring a carousel.
///
/// Navigation itself never fails: degenerate inputs (empty galleries,
/// out-of-range slider values) are clamped or ignored instead.
#[derive(Debug, Error)]
pub enum CarouselError {
    #[error("could not read config file {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed carousel config: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("invalid value for `{field}`: {reason}")]
    InvalidParameter { field: &'static str, reason: String },
}

impl CarouselError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        CarouselError::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CarouselError>;
