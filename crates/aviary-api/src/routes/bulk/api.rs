//! Bulk registration API endpoints - JSON API and HTMX partial responses

use crate::{AppState, Notification, OperationResponse};
use serde::Deserialize;

/// Request body for a bulk registration
#[derive(Debug, Deserialize)]
pub struct BulkRequest {
    pub count: usize,
}

/// Run a bulk registration (JSON API)
///
/// Returns after the batch has been generated and appended; activation
/// happens in the background. A second invocation while a batch is in
/// flight is refused with a warning, mirroring the disabled button.
pub async fn api_bulk_register(
    state: axum::extract::State<AppState>,
    payload: axum::Json<BulkRequest>,
) -> String {
    if state.registry.is_registering() {
        return OperationResponse::rejected(Notification::warning(
            "Registration running",
            "Wait for the current batch to finish".to_string(),
        ));
    }

    match state.registry.bulk_register(payload.count).await {
        Ok(batch) => OperationResponse::ok(
            Notification::success(
                "Registration complete",
                format!(
                    "Created {} GMX {} and linked to Twitter",
                    batch.len(),
                    if batch.len() == 1 { "account" } else { "accounts" }
                ),
            ),
            serde_json::to_value(&batch).ok(),
        ),
        Err(e) => {
            log::warn!("bulk_register rejected: {}", e);
            OperationResponse::rejected(Notification::from_error(&e))
        }
    }
}

/// Bulk run form handler (HTMX)
pub async fn htmx_bulk_run(state: axum::extract::State<AppState>, body: String) -> String {
    let params = crate::routes::parse_form(&body);
    let count: usize = params
        .get("count")
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);

    if state.registry.is_registering() {
        return Notification::warning(
            "Registration running",
            "Wait for the current batch to finish".to_string(),
        )
        .toast_html();
    }

    match state.registry.bulk_register(count).await {
        Ok(batch) => Notification::success(
            "🎉 Registration complete",
            format!(
                "Created {} GMX {} and linked to Twitter",
                batch.len(),
                if batch.len() == 1 { "account" } else { "accounts" }
            ),
        )
        .toast_html(),
        Err(e) => {
            log::warn!("bulk_register rejected: {}", e);
            Notification::from_error(&e).toast_html()
        }
    }
}

/// In-flight status banner (HTML fragment)
pub async fn htmx_bulk_status(state: axum::extract::State<AppState>) -> String {
    if state.registry.is_registering() {
        return r#"<div class='bg-blue-50 border border-blue-200 rounded-lg p-4 animate-pulse'>
            <p class='text-sm text-blue-600'>⏳ Creating GMX accounts and linking them to Twitter...</p>
        </div>"#
            .to_string();
    }

    let summary = aviary_core::RegistryOperations::summary(state.registry.as_ref());
    format!(
        r#"<div class='text-sm text-gray-500'>{} accounts registered · {} active · {} still registering</div>"#,
        summary.total_accounts, summary.active_accounts, summary.registering_accounts
    )
}
