//! tabsplit OCR: the receipt-image upload collaborator.

mod http_scanner;

pub use http_scanner::HttpReceiptScanner;
