//! Posting API endpoints - JSON API and HTMX partial responses

use crate::{AppState, Notification, OperationResponse};
use axum::extract::Path;
use serde::Deserialize;

/// Request body for publishing a post
#[derive(Debug, Deserialize)]
pub struct PostRequest {
    pub text: String,
}

/// Publish a post from an account (JSON API)
pub async fn api_post_tweet(
    state: axum::extract::State<AppState>,
    path: Path<String>,
    payload: axum::Json<PostRequest>,
) -> String {
    match state.registry.post(&path.0, &payload.text) {
        Ok(Some(account)) => OperationResponse::ok(
            Notification::success(
                "Post published",
                format!("Tweet from {} is live", account.username),
            ),
            serde_json::to_value(&account).ok(),
        ),
        Ok(None) => OperationResponse::rejected(Notification::warning(
            "No change",
            "Account no longer exists".to_string(),
        )),
        Err(e) => {
            log::warn!("post rejected: {}", e);
            OperationResponse::rejected(Notification::from_error(&e))
        }
    }
}

/// Composer form handler (HTMX)
///
/// On success the fragment carries the toast plus the refreshed last-post
/// card; the composer is cleared client-side.
pub async fn htmx_post_store(
    state: axum::extract::State<AppState>,
    path: Path<String>,
    body: String,
) -> String {
    let params = crate::routes::parse_form(&body);
    let text = params.get("text").cloned().unwrap_or_default();

    match state.registry.post(&path.0, &text) {
        Ok(Some(account)) => format!(
            "{}{}",
            Notification::success(
                "🐦 Post published",
                format!("Tweet from {} is live", account.username),
            )
            .toast_html(),
            super::page::render_last_post_card(&account)
        ),
        Ok(None) => Notification::warning("No change", "Account no longer exists".to_string())
            .toast_html(),
        Err(e) => {
            log::warn!("post rejected: {}", e);
            Notification::from_error(&e).toast_html()
        }
    }
}
