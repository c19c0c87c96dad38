//! Export API endpoints - snapshot download

use crate::AppState;

/// Download the registry snapshot as a JSON file
pub async fn api_export(
    state: axum::extract::State<AppState>,
) -> axum::response::Response<String> {
    let document = state.registry.export_snapshot();
    let filename = state.registry.export_filename();
    let body = serde_json::to_string_pretty(&document).unwrap_or_default();

    log::info!(
        "exported {} accounts as {}",
        document.total_accounts,
        filename
    );

    axum::response::Response::builder()
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .header(
            axum::http::header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        )
        .body(body)
        .unwrap()
}
