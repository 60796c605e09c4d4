//! Output encoding: serialize a processed raster to PNG and wrap it as a
//! `data:image/png;base64,` URI for inline transport in the response JSON.

use anyhow::{Context, Result};
use base64::{engine::general_purpose, Engine as _};
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

/// Data-URI prefix every successful response's `imageUrl` starts with.
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Encode the image as PNG and wrap it in a data URI.
pub fn png_data_uri(image: &DynamicImage) -> Result<String> {
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, ImageFormat::Png)
        .context("failed to encode output image as PNG")?;

    let payload = general_purpose::STANDARD.encode(buf.into_inner());
    Ok(format!("{PNG_DATA_URI_PREFIX}{payload}"))
}
