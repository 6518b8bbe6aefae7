//! Client for the external background-removal service.
//!
//! The logo tool uploads an image and gets back a transparent PNG. The
//! service is an opaque collaborator: a single multipart POST per image, no
//! streaming, no partial results, and processing can take tens of seconds -
//! hence the generous request timeout. One shot only; a failure is reported
//! to the user, never retried.

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use thiserror::Error;

/// Upper bound on how long one removal request may run.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Errors that can occur when calling the background-removal service.
#[derive(Debug, Error)]
pub enum BackgroundRemovalError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service returned an error response.
    #[error("Service error: {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, when readable.
        message: String,
    },
}

/// Client for the background-removal service.
#[derive(Debug, Clone)]
pub struct BackgroundRemovalClient {
    client: reqwest::Client,
    endpoint: String,
}

impl BackgroundRemovalClient {
    /// Create a new client for the given service endpoint.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, BackgroundRemovalError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Submit an image and return the processed PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, times out, or the service
    /// responds with a non-success status.
    pub async fn remove_background(
        &self,
        image: Vec<u8>,
        content_type: &str,
    ) -> Result<Vec<u8>, BackgroundRemovalError> {
        let part = Part::bytes(image)
            .file_name("upload")
            .mime_str(content_type)?;
        let form = Form::new().part("image", part);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BackgroundRemovalError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
