use actix_web::body::BoxBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::header::CONTENT_LENGTH;
use actix_web::middleware::Next;
use actix_web::web::{self, Bytes, BytesMut, Data};
use actix_web::{Error, HttpResponse};
use futures::StreamExt;
use serde_json::json;
use tracing::warn;

use crate::config::Config;
use crate::error::ApiError;

/// Rejects any request whose declared `Content-Length` is over the limit,
/// before routing and before the body is read.
pub async fn size_guard(
    req: ServiceRequest,
    next: Next<BoxBody>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let limit = req
        .app_data::<Data<Config>>()
        .map(|config| config.max_body_bytes)
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("App config missing"))?;

    let declared = req
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.trim().parse::<usize>().ok());

    if let Some(length) = declared.filter(|length| *length > limit) {
        warn!(
            method = %req.method(),
            path = %req.path(),
            length,
            limit,
            "Rejected oversized request"
        );
        let resp = HttpResponse::PayloadTooLarge().json(json!({
            "error": ApiError::PayloadTooLarge { limit }.to_string()
        }));
        return Ok(req.into_response(resp.map_into_boxed_body()));
    }

    next.call(req).await
}

/// Buffers the request body, giving up as soon as it grows past `limit`.
/// Covers chunked uploads that carry no `Content-Length`.
pub async fn read_body(mut payload: web::Payload, limit: usize) -> Result<Bytes, ApiError> {
    let mut body = BytesMut::new();

    while let Some(chunk) = payload.next().await {
        let chunk = chunk?;
        if body.len() + chunk.len() > limit {
            warn!(limit, "Rejected oversized streamed body");
            return Err(ApiError::PayloadTooLarge { limit });
        }
        body.extend_from_slice(&chunk);
    }

    Ok(body.freeze())
}
