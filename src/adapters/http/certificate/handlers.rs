//! HTTP handlers for certificate endpoints.

use axum::extract::{Json, State};
use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Response};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::domain::certificate::Certificate;
use crate::domain::foundation::CertificateId;

use super::dto::CertificateRequest;

/// POST /api/certificate - Render a certificate as a file download
pub async fn download_certificate(
    State(state): State<AppState>,
    Json(request): Json<CertificateRequest>,
) -> Result<Response, ApiError> {
    let certificate_id = request
        .certificate_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(CertificateId::parse)
        .transpose()?;

    let certificate = Certificate::new(request.name.as_deref(), request.profile, certificate_id);
    let rendered = state.certificate_renderer.render(&certificate)?;

    let disposition = HeaderValue::from_str(&format!(
        "attachment; filename=\"{}\"",
        rendered.file_name
    ))
    .map_err(|e| ApiError::internal(format!("invalid file name: {}", e)))?;

    tracing::info!(
        certificate_id = %certificate.certificate_id,
        profile = %certificate.profile,
        "Certificate rendered"
    );

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(rendered.content_type)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        rendered.bytes,
    )
        .into_response())
}
