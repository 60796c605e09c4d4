//! HTTP route handlers. Each request resolves its input, invokes the
//! background-removal capability exactly once on the blocking pool, encodes
//! the result, and terminates in exactly one of two outcomes: a success
//! payload or a failure payload. No retries, no partial results.

use super::protocol::{HealthResponse, RemoveBgRequest, RemoveBgResponse};
use super::AppState;
use crate::error::ServiceError;
use crate::{encode, input};
use actix_web::{get, post, web, Responder};
use std::sync::Arc;
use tracing::{debug, info};

type Result<T> = std::result::Result<T, ServiceError>;

#[post("/remove-bg")]
pub async fn remove_bg(
    request: web::Json<RemoveBgRequest>,
    state: web::Data<AppState>,
) -> Result<impl Responder> {
    let image = input::resolve_image(&state.http, &request).await?;
    debug!(
        "resolved input image ({}x{})",
        image.width(),
        image.height()
    );

    // The capability is synchronous and blocking; keep it off the executor.
    let remover = Arc::clone(&state.remover);
    let output = web::block(move || remover.remove_background(image))
        .await
        .map_err(ServiceError::processing)?
        .map_err(ServiceError::processing)?;

    let data_uri = encode::png_data_uri(&output).map_err(ServiceError::processing)?;

    info!("finished serving background-removal request");
    Ok(web::Json(RemoveBgResponse::removed(data_uri)))
}

#[get("/health")]
pub async fn health() -> impl Responder {
    web::Json(HealthResponse::ok())
}
