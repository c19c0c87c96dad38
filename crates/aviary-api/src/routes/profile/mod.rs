//! Profile routes - Avatar and banner uploads
//!
//! Features:
//! - Pick an account, preview its avatar and banner
//! - Upload raw image bytes, decoded into data URIs by the backend
//! - Uploading forces the account active
//!
//! Structure:
//! - api.rs: JSON API endpoints (the page uploads via fetch)
//! - page.rs: Full page rendering

pub mod api;
pub mod page;

pub use api::{api_upload_avatar, api_upload_banner};
pub use page::page_profile;
