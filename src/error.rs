//! Error taxonomy for the request path.
//!
//! Input problems (missing fields, failed fetch or decode) are the caller's
//! fault and map to HTTP 400; anything that goes wrong after a valid image
//! has been resolved is a generic processing failure and maps to HTTP 500.
//! The HTTP mapping itself lives in the server module.

use std::fmt::Display;
use thiserror::Error;

/// All the ways a single request can fail. No error here is fatal to the
/// service process.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Neither `imageUrl` nor `imageBase64` was provided
    #[error("imageUrl or imageBase64 is required")]
    MissingInput,

    /// Both `imageUrl` and `imageBase64` were provided
    #[error("exactly one of imageUrl or imageBase64 may be set")]
    AmbiguousInput,

    /// Remote image fetch failed (network error or non-success status)
    #[error("image download failed: {0}")]
    Download(String),

    /// Base64 or raster decoding of the input failed
    #[error("image decode failed: {0}")]
    Decode(String),

    /// Inference or output encoding failed
    #[error("background removal failed: {0}")]
    Processing(String),
}

impl ServiceError {
    pub fn download(err: impl Display) -> Self {
        Self::Download(err.to_string())
    }

    pub fn decode(err: impl Display) -> Self {
        Self::Decode(err.to_string())
    }

    pub fn processing(err: impl Display) -> Self {
        Self::Processing(err.to_string())
    }

    /// Whether the failure is the caller's fault (4xx) rather than ours (5xx).
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Processing(_))
    }
}
