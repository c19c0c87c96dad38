//! Bulk registration page rendering - Full page endpoints

use crate::AppState;
use aviary_core::MAX_BATCH_SIZE;

/// Bulk registration page
pub async fn page_bulk(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    let account_delay = state.config.provisioning.account_delay_ms;

    let inner_content = format!(
        r#"<div class='mb-6'><h2 class='text-2xl font-bold'>⚡ Bulk registration</h2><p class='text-gray-500'>Create up to {max} GMX-backed accounts at once</p></div>
        <div class='max-w-2xl space-y-6'>
            <div class='bg-gradient-to-br from-sky-50 to-indigo-50 p-6 rounded-xl border-2 border-sky-100'>
                <div class='flex items-center gap-3 mb-4'>
                    <span class='p-3 bg-sky-600 text-white rounded-full'>✉️</span>
                    <div>
                        <h3 class='font-bold text-lg'>GMX Email Service</h3>
                        <p class='text-sm text-gray-500'>Simulated mailbox provisioning, ~{delay} ms per account</p>
                    </div>
                </div>
                <p class='flex items-center gap-2 text-sm'>✅ Twitter account binding</p>
                <p class='flex items-center gap-2 text-sm mt-2'>✅ Automatic verification</p>
            </div>

            <div class='bg-white rounded-xl shadow-sm p-6'>
                <form hx-post='/bulk/run' hx-target='#bulk-result' hx-swap='innerHTML' class='space-y-4'>
                    <label class='block text-lg font-medium' for='bulk-count'>👥 Number of accounts (1-{max})</label>
                    <div class='flex items-center gap-4'>
                        <input id='bulk-count' name='count' type='number' min='1' max='{max}' value='1'
                            class='w-28 h-14 text-2xl font-bold text-center border rounded-lg bg-gray-50 focus:border-sky-400 focus:outline-none'
                            oninput='bulkProgress(this.value)'>
                        <div class='flex-1 h-3 bg-gray-100 rounded-full'><div id='bulk-progress' class='h-3 bg-sky-400 rounded-full' style='width: 10%'></div></div>
                    </div>
                    <button type='submit' class='w-full h-12 bg-gradient-to-r from-sky-600 to-indigo-600 text-white rounded-lg font-semibold hover:opacity-90'>
                        ✨ Create accounts
                        <span class='htmx-indicator'>⏳</span>
                    </button>
                </form>
                <div id='bulk-result' class='mt-4'></div>
                <div id='bulk-status' class='mt-4' hx-get='/bulk/status' hx-trigger='load, every 1s' hx-swap='innerHTML'></div>
            </div>
        </div>
        <script>
        function bulkProgress(value) {{
            var count = Math.min({max}, Math.max(1, parseInt(value) || 1));
            document.getElementById('bulk-progress').style.width = (count / {max} * 100) + '%';
        }}
        </script>"#,
        max = MAX_BATCH_SIZE,
        delay = account_delay
    );

    axum::response::Html(crate::page_response(&headers, "Bulk", "/bulk", &inner_content))
}
