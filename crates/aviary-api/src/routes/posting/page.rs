//! Posting page rendering - Full page endpoints

use crate::AppState;
use aviary_core::{Account, MAX_POST_CHARS};
use aviary_utils::{escape_html, format_number};
use axum::extract::Query;
use std::collections::HashMap;

/// Format an RFC 3339 timestamp for display
fn format_timestamp(ts: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(ts)
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| ts.to_string())
}

/// Last-post preview card
pub fn render_last_post_card(account: &Account) -> String {
    match (&account.last_post, &account.last_post_time) {
        (Some(text), Some(time)) => format!(
            r#"<div class='bg-gray-50 p-4 rounded-lg border border-green-200 mt-4'>
                <p class='text-xs text-green-600 mb-2'>✅ Last post</p>
                <p class='text-sm'>{}</p>
                <p class='text-xs text-gray-400 mt-2'>{}</p>
            </div>"#,
            escape_html(text),
            format_timestamp(time)
        ),
        _ => String::new(),
    }
}

/// Composer panel for a selected account
fn render_composer(account: &Account) -> String {
    let avatar = match &account.avatar {
        Some(uri) => format!(
            r#"<img src='{}' alt='avatar' class='w-12 h-12 rounded-full border-2 border-indigo-300 object-cover'>"#,
            uri
        ),
        None => String::from(
            r#"<span class='w-12 h-12 rounded-full bg-gradient-to-br from-indigo-400 to-pink-400 flex items-center justify-center text-white text-xl'>👤</span>"#,
        ),
    };

    format!(
        r#"<div class='bg-gradient-to-br from-white to-indigo-50 p-4 rounded-xl border-2 border-indigo-100 mb-6'>
            <div class='flex items-center gap-3'>
                {}
                <div>
                    <p class='font-bold'>{}</p>
                    <p class='text-xs text-gray-500'>{} tweets · {} followers</p>
                </div>
            </div>
        </div>
        <form id='post-form' hx-post='/posting/{}' hx-target='#post-result' hx-swap='innerHTML' class='space-y-3'>
            <label class='block text-lg font-medium' for='post-text'>💬 Post text</label>
            <textarea id='post-text' name='text' rows='6' maxlength='{}' placeholder="What's happening?"
                class='w-full p-4 bg-gray-50 border-2 border-indigo-100 focus:border-indigo-400 rounded-lg resize-none focus:outline-none text-lg'
                oninput='updateCounter(this)'></textarea>
            <div class='flex justify-between items-center text-sm'>
                <span id='char-counter' class='text-gray-500'>0 / {}</span>
                <span id='char-warning' class='text-yellow-600 hidden'>⚠ Close to the limit</span>
            </div>
            <div class='flex gap-3'>
                <button id='publish-button' type='submit' disabled
                    class='flex-1 h-12 bg-gradient-to-r from-indigo-600 to-pink-600 text-white rounded-lg font-semibold hover:opacity-90 disabled:opacity-40'>
                    ✉️ Publish
                </button>
                <a href='/posting' class='h-12 px-4 border rounded-lg flex items-center hover:bg-gray-50'>✕</a>
            </div>
        </form>
        <div id='post-result' class='mt-4'>{}</div>"#,
        avatar,
        escape_html(&account.username),
        account.tweets,
        format_number(account.followers),
        urlencoding::encode(&account.id),
        MAX_POST_CHARS,
        MAX_POST_CHARS,
        render_last_post_card(account)
    )
}

// Counter, publish-button gating, and composer reset after a successful
// publish. The server still enforces both limits.
const COMPOSER_SCRIPT: &str = r#"<script>
var MAX_POST_CHARS = 280;
function updateCounter(textarea) {
    var length = textarea.value.length;
    var counter = document.getElementById('char-counter');
    counter.textContent = length + ' / ' + MAX_POST_CHARS;
    counter.className = length > MAX_POST_CHARS ? 'text-red-600' : 'text-gray-500';
    document.getElementById('char-warning').classList.toggle('hidden', length <= 250);
    document.getElementById('publish-button').disabled =
        textarea.value.trim().length === 0 || length > MAX_POST_CHARS;
}
document.addEventListener('htmx:afterRequest', function (evt) {
    if (evt.detail.elt.id === 'post-form' && evt.detail.successful) {
        var textarea = document.getElementById('post-text');
        textarea.value = '';
        updateCounter(textarea);
    }
});
</script>"#;

/// Posting page
pub async fn page_posting(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
    query: Query<HashMap<String, String>>,
) -> axum::response::Html<String> {
    let selected = query
        .get("account")
        .and_then(|id| state.registry.account(id));

    let panel = match &selected {
        Some(account) => format!("{}{}", render_composer(account), COMPOSER_SCRIPT),
        None => {
            // same picker as the profile tab, pointed back here
            crate::routes::profile::page::render_account_picker(
                &state.registry.accounts(),
                "/posting",
            )
        }
    };

    let inner_content = format!(
        r#"<div class='mb-6'><h2 class='text-2xl font-bold'>✉️ Publish to Twitter</h2><p class='text-gray-500'>Compose and publish a post from a selected account</p></div>
        <div class='max-w-2xl bg-white rounded-xl shadow-sm p-6'>{}</div>"#,
        panel
    );

    axum::response::Html(crate::page_response(
        &headers,
        "Posting",
        "/posting",
        &inner_content,
    ))
}
