//! Export page rendering - Full page endpoints

use crate::AppState;

/// Export page
pub async fn page_export(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    let stats = state.registry.stats();
    let total = state.registry.account_count();
    let active_share = if total == 0 {
        0.0
    } else {
        stats.active_count as f64 / total as f64 * 100.0
    };

    let download_button = if total == 0 {
        String::from(
            r#"<div class='w-full h-12 bg-gray-200 text-gray-400 rounded-lg font-semibold flex items-center justify-center cursor-not-allowed'>📥 Nothing to export</div>"#,
        )
    } else {
        format!(
            r#"<a href='/api/export' class='block w-full h-12 bg-gradient-to-r from-sky-600 to-indigo-600 text-white rounded-lg font-semibold hover:opacity-90 flex items-center justify-center'>📥 Download JSON ({} {})</a>"#,
            total,
            if total == 1 { "account" } else { "accounts" }
        )
    };

    let inner_content = format!(
        r#"<div class='mb-6'><h2 class='text-2xl font-bold'>📥 Export data</h2><p class='text-gray-500'>Save the account registry as JSON</p></div>
        <div class='max-w-2xl space-y-6'>
            <div class='bg-white rounded-xl shadow-sm p-6'>
                <div class='grid grid-cols-2 gap-4 mb-4'>
                    <div>
                        <p class='text-sm text-gray-500 mb-1'>Total accounts</p>
                        <p class='text-3xl font-bold text-sky-600'>{}</p>
                    </div>
                    <div>
                        <p class='text-sm text-gray-500 mb-1'>Active</p>
                        <p class='text-3xl font-bold text-green-600'>{}</p>
                    </div>
                </div>
                <div class='h-2 bg-gray-100 rounded-full'><div class='h-2 bg-green-400 rounded-full' style='width: {:.0}%'></div></div>
            </div>

            <div class='bg-white rounded-xl shadow-sm p-6 border border-indigo-100'>
                <h4 class='font-semibold mb-2 text-indigo-600'>ℹ️ Export format</h4>
                <pre class='text-xs text-gray-500 bg-gray-50 p-3 rounded-lg'>{{
  "exportDate": "ISO timestamp",
  "totalAccounts": number,
  "accounts": [...]
}}</pre>
            </div>

            {}
        </div>"#,
        total, stats.active_count, active_share, download_button
    );

    axum::response::Html(crate::page_response(&headers, "Export", "/export", &inner_content))
}
