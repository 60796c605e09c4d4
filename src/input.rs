//! Input resolution: turn a request into an in-memory raster image, either by
//! fetching a remote URL or by decoding an inline base64 payload.

use crate::error::ServiceError;
use crate::server::protocol::RemoveBgRequest;
use base64::{engine::general_purpose, Engine as _};
use image::DynamicImage;
use tracing::debug;

/// Resolve the request's image reference into a decoded raster.
///
/// Exactly one of `imageUrl` / `imageBase64` must be set and non-empty; the
/// empty string counts as unset. Fails fast on missing or ambiguous input
/// without doing any network or decode work.
pub async fn resolve_image(
    client: &reqwest::Client,
    request: &RemoveBgRequest,
) -> Result<DynamicImage, ServiceError> {
    let url = request.image_url.as_deref().filter(|s| !s.is_empty());
    let inline = request.image_base64.as_deref().filter(|s| !s.is_empty());

    match (url, inline) {
        (Some(_), Some(_)) => Err(ServiceError::AmbiguousInput),
        (Some(url), None) => fetch_remote(client, url).await,
        (None, Some(payload)) => decode_inline(payload),
        (None, None) => Err(ServiceError::MissingInput),
    }
}

/// Download the image over HTTP and decode it. The client carries the
/// configured request timeout; any non-success status is a download failure.
async fn fetch_remote(client: &reqwest::Client, url: &str) -> Result<DynamicImage, ServiceError> {
    debug!("fetching remote image from {url}");

    let response = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(ServiceError::download)?;

    let bytes = response.bytes().await.map_err(ServiceError::download)?;

    image::load_from_memory(&bytes).map_err(ServiceError::decode)
}

/// Decode an inline base64 payload, stripping any `data:<mime>;base64,`
/// prefix up to the first comma first.
fn decode_inline(payload: &str) -> Result<DynamicImage, ServiceError> {
    let payload = strip_data_uri_prefix(payload);

    let bytes = general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(ServiceError::decode)?;

    image::load_from_memory(&bytes).map_err(ServiceError::decode)
}

/// Strip a `data:...,` prefix if present, leaving the raw base64 payload.
fn strip_data_uri_prefix(payload: &str) -> &str {
    if payload.starts_with("data:") {
        payload.split_once(',').map_or(payload, |(_, rest)| rest)
    } else {
        payload
    }
}
