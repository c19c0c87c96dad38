//! Profile API endpoints - image uploads
//!
//! Both endpoints take the raw image bytes as the request body. Image data
//! is never validated; whatever arrives is decoded into a data URI. An
//! unknown account id changes nothing.

use crate::{AppState, Notification, OperationResponse};
use axum::extract::Path;
use bytes::Bytes;

/// Upload a profile avatar (JSON API)
pub async fn api_upload_avatar(
    state: axum::extract::State<AppState>,
    path: Path<String>,
    body: Bytes,
) -> String {
    match state.registry.upload_avatar(&path.0, body.to_vec()).await {
        Some(account) => OperationResponse::ok(
            Notification::success(
                "Avatar uploaded",
                format!("Profile image updated for {}", account.username),
            ),
            serde_json::to_value(&account).ok(),
        ),
        None => OperationResponse::rejected(Notification::warning(
            "No change",
            "Account no longer exists".to_string(),
        )),
    }
}

/// Upload a profile banner (JSON API)
pub async fn api_upload_banner(
    state: axum::extract::State<AppState>,
    path: Path<String>,
    body: Bytes,
) -> String {
    match state.registry.upload_banner(&path.0, body.to_vec()).await {
        Some(account) => OperationResponse::ok(
            Notification::success(
                "Banner uploaded",
                format!("Profile cover updated for {}", account.username),
            ),
            serde_json::to_value(&account).ok(),
        ),
        None => OperationResponse::rejected(Notification::warning(
            "No change",
            "Account no longer exists".to_string(),
        )),
    }
}
