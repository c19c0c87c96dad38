//! Posting routes - Post composer
//!
//! Features:
//! - Pick an account, compose a post up to 280 characters
//! - Live character counter; the publish button refuses over-length text
//! - Last-post preview with its timestamp
//! - Publishing increments the tweet counter and forces the account active
//!
//! Structure:
//! - api.rs: JSON API and HTMX endpoints
//! - page.rs: Full page rendering

pub mod api;
pub mod page;

pub use api::{api_post_tweet, htmx_post_store};
pub use page::page_posting;
