//! The user-facing JSON web server: shared per-process state, the mapping
//! from [`ServiceError`] to HTTP responses, and server startup.

use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::remover::BackgroundRemover;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{middleware, web, App, HttpResponse, HttpServer};
use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

pub mod protocol;
pub mod routes;

/// State shared by all request handlers. The remover is immutable from the
/// handlers' point of view; no other state is shared between requests.
pub struct AppState {
    /// Outbound client for remote image fetches, carrying the configured
    /// timeout
    pub http: reqwest::Client,

    /// The opaque background-removal capability
    pub remover: Arc<dyn BackgroundRemover>,
}

/// Build the shared state from the service configuration.
pub fn app_state(
    config: &ServiceConfig,
    remover: Arc<dyn BackgroundRemover>,
) -> Result<web::Data<AppState>> {
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.fetch_timeout_secs))
        .build()
        .context("failed to build HTTP client")?;

    Ok(web::Data::new(AppState { http, remover }))
}

/// JSON extractor configuration: enforce the body-size cap before any
/// processing and render extractor failures in the service's response shape.
pub fn json_config(max_body_bytes: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(max_body_bytes)
        .error_handler(|err, _req| {
            let status = match &err {
                JsonPayloadError::Overflow { .. }
                | JsonPayloadError::OverflowKnownLength { .. } => StatusCode::PAYLOAD_TOO_LARGE,
                _ => StatusCode::BAD_REQUEST,
            };
            let body = protocol::RemoveBgResponse::failure(format!("invalid request body: {err}"));
            InternalError::from_response(err, HttpResponse::build(status).json(body)).into()
        })
}

impl actix_web::error::ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse {
        warn!("request failed: {self}");

        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(protocol::RemoveBgResponse::failure(self.to_string()))
    }
}

/// Start the HTTP server and serve until shutdown.
pub async fn run(config: ServiceConfig, remover: Arc<dyn BackgroundRemover>) -> Result<()> {
    let state = app_state(&config, remover)?;
    let max_body_bytes = config.max_body_bytes;

    info!("listening on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(json_config(max_body_bytes))
            .wrap(middleware::Logger::default())
            .service(routes::remove_bg)
            .service(routes::health)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
