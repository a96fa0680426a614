use std::fs;
use std::path::Path;

use anyhow::Result;

use tabsplit_core::receipt::decode_receipt;
use tabsplit_core::scanner::ReceiptScanner;
use tabsplit_infrastructure::ConfigService;
use tabsplit_ocr::HttpReceiptScanner;

use super::utils::print_ledger;

pub async fn run(image: &Path, endpoint: Option<String>) -> Result<()> {
    let scanner = match endpoint {
        Some(endpoint) => HttpReceiptScanner::new(endpoint)?,
        None => {
            let config = ConfigService::new()?.load_or_init()?;
            HttpReceiptScanner::from_settings(&config.scanner)?
        }
    };

    let bytes = fs::read(image)?;
    println!("Uploading {} ({} bytes)...", image.display(), bytes.len());

    let response = scanner.upload_receipt_image(&bytes).await?;
    let ledger = decode_receipt(&response)?;
    print_ledger(&ledger);
    Ok(())
}
