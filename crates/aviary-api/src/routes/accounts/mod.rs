//! Account routes - Account table, manual add, delete
//!
//! Features:
//! - List all accounts with status badges and counters
//! - Add an account manually (username, token, email)
//! - Delete an account
//! - Live table refresh while bulk batches activate
//!
//! Structure:
//! - api.rs: JSON API and HTMX endpoints
//! - page.rs: Full page rendering

pub mod api;
pub mod page;

pub use api::{
    api_account_detail, api_accounts, api_create_account, api_delete_account,
    htmx_account_delete, htmx_account_store, htmx_accounts_list, AccountsResponse,
};
pub use page::page_accounts;
