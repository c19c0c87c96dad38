//! Accounts API endpoints - JSON API and HTMX partial responses
//!
//! Endpoints:
//! - api_accounts: Get account list (JSON)
//! - api_account_detail: Get single account (JSON)
//! - api_create_account: Add an account manually (JSON)
//! - api_delete_account: Remove an account (JSON)
//! - htmx_accounts_list: Account table (HTML fragment)
//! - htmx_account_store: Add-account form handler (HTMX)
//! - htmx_account_delete: Delete button handler (HTMX)

use crate::{ApiError, AppState, Notification, OperationResponse};
use aviary_core::{Account, NewAccount};
use axum::extract::Path;

/// Accounts list response for API
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AccountsResponse {
    pub accounts: Vec<Account>,
    pub total_count: usize,
}

/// Get all accounts (JSON API)
pub async fn api_accounts(state: axum::extract::State<AppState>) -> String {
    let accounts = state.registry.accounts();
    let response = AccountsResponse {
        total_count: accounts.len(),
        accounts,
    };
    serde_json::to_string(&response).unwrap_or_default()
}

/// Get single account detail (JSON API)
pub async fn api_account_detail(
    state: axum::extract::State<AppState>,
    path: Path<String>,
) -> Result<String, ApiError> {
    match state.registry.account(&path.0) {
        Some(account) => Ok(serde_json::to_string(&account).unwrap_or_default()),
        None => Err(ApiError::NotFound {
            resource: format!("account {}", path.0),
        }),
    }
}

/// Add an account manually (JSON API)
pub async fn api_create_account(
    state: axum::extract::State<AppState>,
    payload: axum::Json<NewAccount>,
) -> String {
    match state.registry.create_account(payload.0) {
        Ok(account) => OperationResponse::ok(
            Notification::success(
                "Account added",
                format!("{} stored in the registry", account.username),
            ),
            serde_json::to_value(&account).ok(),
        ),
        Err(e) => {
            log::warn!("create_account rejected: {}", e);
            OperationResponse::rejected(Notification::from_error(&e))
        }
    }
}

/// Remove an account (JSON API)
pub async fn api_delete_account(
    state: axum::extract::State<AppState>,
    path: Path<String>,
) -> String {
    let removed = state.registry.delete_account(&path.0);
    let notification = if removed {
        Notification::success("Deleted", "Account removed from the registry".to_string())
    } else {
        // deleting a missing id is a no-op, not an error
        Notification::warning("No change", "Account was already gone".to_string())
    };
    OperationResponse::ok(notification, None)
}

/// Account table (HTML fragment)
pub async fn htmx_accounts_list(state: axum::extract::State<AppState>) -> String {
    super::page::render_accounts_table(&state.registry.accounts())
}

/// Add-account form handler (HTMX)
pub async fn htmx_account_store(
    state: axum::extract::State<AppState>,
    body: String,
) -> String {
    let params = crate::routes::parse_form(&body);
    let new_account = NewAccount {
        username: params.get("username").cloned().unwrap_or_default(),
        token: params.get("token").cloned().unwrap_or_default(),
        email: params.get("email").cloned().unwrap_or_default(),
    };

    match state.registry.create_account(new_account) {
        Ok(account) => Notification::success(
            "Account added",
            format!("{} stored in the registry", account.username),
        )
        .toast_html(),
        Err(e) => {
            log::warn!("create_account rejected: {}", e);
            Notification::from_error(&e).toast_html()
        }
    }
}

/// Delete button handler (HTMX) - returns the refreshed table
pub async fn htmx_account_delete(
    state: axum::extract::State<AppState>,
    path: Path<String>,
) -> String {
    state.registry.delete_account(&path.0);
    super::page::render_accounts_table(&state.registry.accounts())
}
