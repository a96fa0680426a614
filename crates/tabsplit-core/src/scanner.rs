//! Receipt scanner trait: the upload collaborator seam.

use async_trait::async_trait;

use crate::error::Result;

/// Uploads a receipt image to the external OCR service and returns its raw
/// response text.
///
/// The core treats this as a black box: image bytes in, UTF-8 text out. No
/// retries, timeouts, or cancellation happen here; those belong to the
/// implementation. The returned text feeds
/// [`decode_receipt`](crate::receipt::decode_receipt).
#[async_trait]
pub trait ReceiptScanner: Send + Sync {
    /// Uploads the image and returns the service's raw response body.
    async fn upload_receipt_image(&self, image: &[u8]) -> Result<String>;
}
