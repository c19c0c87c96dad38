//! Export routes - JSON snapshot download
//!
//! Features:
//! - Snapshot the registry as a timestamped JSON document
//! - Download with a `<prefix>-<epoch-millis>.json` filename
//! - Export summary with account counts and the document format
//!
//! Structure:
//! - api.rs: Download endpoint
//! - page.rs: Full page rendering

pub mod api;
pub mod page;

pub use api::api_export;
pub use page::page_export;
