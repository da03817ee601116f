use thiserror::Error;

/// Rejections from the geometry and solar calculations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SiteError {
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, SiteError>;
