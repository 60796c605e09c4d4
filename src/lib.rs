//! A thin HTTP adapter around a pre-trained background-removal model.
//!
//! The service accepts an image by URL or inline base64, hands the decoded
//! raster to an opaque [`remover::BackgroundRemover`] capability, and returns
//! the result as a `data:image/png;base64,` URI. No state outlives a single
//! request/response cycle.

pub mod config;
pub mod encode;
pub mod error;
pub mod input;
pub mod remover;
pub mod server;
