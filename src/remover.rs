//! The background-removal capability seam.
//!
//! The service never inspects the model, its runtime, or its weights; it only
//! depends on the [`BackgroundRemover`] trait. The production implementation
//! wraps the external `imgly-bgremove` crate and is gated behind the
//! `bgremove` feature so the library and its tests build without pulling in
//! an inference stack.

use anyhow::Result;
use image::DynamicImage;

/// An opaque `(raster image) -> raster image` background-removal capability.
///
/// Implementations are called exactly once per request, synchronously, from a
/// blocking-thread context. Background pixels in the returned image carry
/// alpha = 0.
pub trait BackgroundRemover: Send + Sync {
    fn remove_background(&self, image: DynamicImage) -> Result<DynamicImage>;
}

#[cfg(feature = "bgremove")]
pub use model::ModelRemover;

#[cfg(feature = "bgremove")]
mod model {
    use super::BackgroundRemover;
    use anyhow::{anyhow, Context, Result};
    use image::DynamicImage;
    use imgly_bgremove::{
        BackendFactory, BackendType, BackgroundRemovalProcessor, BgRemovalError,
        InferenceBackend, ModelDownloader, ModelManager, ModelSource, ModelSpec, OutputFormat,
        ProcessorConfigBuilder, TractBackend,
    };
    use std::sync::Mutex;
    use tracing::info;

    /// Supplies the pure-Rust Tract backend to the processor. The crate's own
    /// `DefaultBackendFactory` creates nothing and expects the embedding
    /// frontend to inject a backend.
    struct TractFactory;

    impl BackendFactory for TractFactory {
        fn create_backend(
            &self,
            backend_type: BackendType,
            model_manager: ModelManager,
        ) -> imgly_bgremove::Result<Box<dyn InferenceBackend>> {
            match backend_type {
                BackendType::Tract => {
                    Ok(Box::new(TractBackend::with_model_manager(model_manager)))
                },
                other => Err(BgRemovalError::invalid_config(format!(
                    "unsupported backend type: {other:?}"
                ))),
            }
        }

        fn available_backends(&self) -> Vec<BackendType> {
            vec![BackendType::Tract]
        }
    }

    /// Production remover backed by `imgly-bgremove`'s pure-Rust Tract
    /// backend. Model weights are fetched into the crate's cache on first
    /// startup and reused afterwards.
    ///
    /// The inference session is stateful, so calls are serialized through a
    /// mutex; scaling past one inference at a time means running more
    /// service instances.
    pub struct ModelRemover {
        processor: Mutex<BackgroundRemovalProcessor>,
    }

    impl ModelRemover {
        /// Download the model if it is not cached yet and set up the
        /// inference session.
        pub async fn load(model_url: &str) -> Result<Self> {
            let downloader = ModelDownloader::new()
                .context("failed to initialize model downloader")?;
            let model_id = downloader
                .download_model(model_url, false)
                .await
                .with_context(|| format!("failed to fetch model from {model_url}"))?;

            info!("loaded background-removal model {model_id}");

            let config = ProcessorConfigBuilder::new()
                .model_spec(ModelSpec {
                    source: ModelSource::Downloaded(model_id),
                    variant: None,
                })
                .backend_type(BackendType::Tract)
                .output_format(OutputFormat::Png)
                .build()
                .context("failed to build processor configuration")?;

            let mut processor =
                BackgroundRemovalProcessor::with_factory(config, Box::new(TractFactory))
                    .context("failed to configure inference processor")?;

            // Initialize eagerly so a broken model surfaces at startup, not
            // on the first request
            processor
                .initialize()
                .context("failed to initialize inference backend")?;

            Ok(Self {
                processor: Mutex::new(processor),
            })
        }
    }

    impl BackgroundRemover for ModelRemover {
        fn remove_background(&self, image: DynamicImage) -> Result<DynamicImage> {
            let mut processor = self
                .processor
                .lock()
                .map_err(|_| anyhow!("inference session lock poisoned"))?;

            let result = processor
                .process_image(&image)
                .context("inference failed")?;

            Ok(result.image)
        }
    }

}
