//! HttpReceiptScanner - multipart upload client for the OCR service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;

use tabsplit_core::config::ScannerSettings;
use tabsplit_core::scanner::ReceiptScanner;
use tabsplit_core::{Result, SplitError};

/// Scanner implementation that posts the receipt image to the OCR HTTP
/// endpoint as `multipart/form-data`.
///
/// The wire shape the service expects: a single part named `file`, filename
/// `image.jpg`, content type `image/jpeg`. The response body is the raw
/// receipt JSON handed to the decoder.
#[derive(Clone)]
pub struct HttpReceiptScanner {
    client: Client,
    endpoint: String,
}

impl HttpReceiptScanner {
    /// Creates a new scanner for the given endpoint with the default
    /// timeout.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        Self::with_timeout(
            endpoint,
            Duration::from_secs(tabsplit_core::config::DEFAULT_SCANNER_TIMEOUT_SECS),
        )
    }

    /// Creates a new scanner with an explicit request timeout.
    ///
    /// Fails if the HTTP client cannot be built; the configured timeout is
    /// never silently dropped.
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SplitError::scan(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Creates a scanner from loaded configuration.
    pub fn from_settings(settings: &ScannerSettings) -> Result<Self> {
        Self::with_timeout(
            settings.endpoint_url.clone(),
            Duration::from_secs(settings.timeout_secs),
        )
    }

    /// The configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ReceiptScanner for HttpReceiptScanner {
    async fn upload_receipt_image(&self, image: &[u8]) -> Result<String> {
        let part = Part::bytes(image.to_vec())
            .file_name("image.jpg")
            .mime_str("image/jpeg")
            .map_err(|e| SplitError::scan(format!("failed to build upload part: {}", e)))?;
        let form = Form::new().part("file", part);

        tracing::debug!(endpoint = %self.endpoint, bytes = image.len(), "uploading receipt image");

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| SplitError::scan(format!("upload request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SplitError::scan(format!(
                "OCR service returned {}: {}",
                status, body
            )));
        }

        response
            .text()
            .await
            .map_err(|e| SplitError::scan(format!("failed to read response body: {}", e)))
    }
}
