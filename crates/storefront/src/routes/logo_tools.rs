//! Logo tools route handlers.
//!
//! The background-removal tool: upload a logo, get a transparent PNG back.
//! Processing happens in the external service; this handler only validates
//! the upload and streams the result back as a download. Processing can
//! take tens of seconds, so the page warns the user before submitting.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Response},
};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;

/// Maximum accepted upload size (20 MB).
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Logo tools page template.
#[derive(Template, WebTemplate)]
#[template(path = "logo_tools.html")]
pub struct LogoToolsTemplate {
    /// Whether the external service is configured.
    pub enabled: bool,
}

/// Display the logo tools page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    LogoToolsTemplate {
        enabled: state.background_removal().is_some(),
    }
}

/// Remove the background from an uploaded logo.
///
/// Expects a multipart form with an `image` field. Returns the processed
/// PNG as an attachment.
#[instrument(skip_all)]
pub async fn remove(State(state): State<AppState>, mut multipart: Multipart) -> Result<Response> {
    let Some(client) = state.background_removal() else {
        return Err(AppError::ServiceUnavailable(
            "background removal is not configured".to_owned(),
        ));
    };

    let mut image: Option<(Vec<u8>, String)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("image") {
            let content_type = field.content_type().unwrap_or_default().to_owned();
            if !content_type.starts_with("image/") {
                return Err(AppError::BadRequest(
                    "Please upload an image file".to_owned(),
                ));
            }

            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            image = Some((bytes.to_vec(), content_type));
        }
    }

    let Some((bytes, content_type)) = image else {
        return Err(AppError::BadRequest("missing image upload".to_owned()));
    };

    tracing::info!(bytes = bytes.len(), "Submitting logo for background removal");
    let png = client.remove_background(bytes, &content_type).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "image/png"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"mmbm-logo-transparent.png\"",
            ),
        ],
        png,
    )
        .into_response())
}
