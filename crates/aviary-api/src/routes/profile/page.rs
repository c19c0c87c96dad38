//! Profile page rendering - Full page endpoints

use crate::AppState;
use aviary_core::Account;
use aviary_utils::escape_html;
use axum::extract::Query;
use std::collections::HashMap;

/// Account picker shown when no account is selected; shared with the
/// posting tab, which points it at its own path
pub(crate) fn render_account_picker(accounts: &[Account], target: &str) -> String {
    if accounts.is_empty() {
        return r#"<div class='text-center py-12 text-gray-500'>No accounts to configure yet. Add one first.</div>"#
            .to_string();
    }

    let buttons: Vec<String> = accounts
        .iter()
        .map(|account| {
            format!(
                r#"<a href='{}?account={}' class='p-3 bg-gray-50 hover:bg-sky-50 rounded-lg border hover:border-sky-300 flex items-center gap-2'>
                    <span class='w-8 h-8 rounded-full bg-gradient-to-br from-sky-400 to-indigo-400 flex items-center justify-center text-white'>👤</span>
                    <span class='text-sm font-medium'>{}</span>
                </a>"#,
                target,
                urlencoding::encode(&account.id),
                escape_html(&account.username)
            )
        })
        .collect();

    format!(
        r#"<div class='text-center py-8'>
            <div class='inline-block p-6 bg-gray-100 rounded-full mb-4 text-4xl'>🖼️</div>
            <h3 class='text-xl font-semibold mb-2'>Pick an account</h3>
            <p class='text-gray-500 mb-6'>Choose which account to work with</p>
            <div class='grid grid-cols-1 md:grid-cols-2 gap-3 max-w-md mx-auto'>{}</div>
        </div>"#,
        buttons.join("")
    )
}

/// Profile panel for a selected account
fn render_profile_panel(account: &Account) -> String {
    let avatar = match &account.avatar {
        Some(uri) => format!(
            r#"<img src='{}' alt='avatar' class='w-16 h-16 rounded-full border-4 border-sky-400 object-cover'>"#,
            uri
        ),
        None => String::from(
            r#"<span class='w-16 h-16 rounded-full bg-gradient-to-br from-sky-400 to-indigo-400 flex items-center justify-center text-white text-3xl'>👤</span>"#,
        ),
    };
    let banner = match &account.banner {
        Some(uri) => format!(
            r#"<div class='w-full h-32 rounded-lg overflow-hidden border-2 border-sky-100 mt-4'><img src='{}' alt='banner' class='w-full h-full object-cover'></div>"#,
            uri
        ),
        None => String::new(),
    };
    let id = urlencoding::encode(&account.id).into_owned();

    format!(
        r#"<div class='bg-gradient-to-br from-white to-sky-50 p-6 rounded-xl border-2 border-sky-100'>
            <div class='flex items-center gap-4'>
                {}
                <div>
                    <h3 class='font-bold text-xl'>{}</h3>
                    <p class='text-sm text-gray-500'>{}</p>
                </div>
            </div>
            {}
        </div>
        <div class='grid grid-cols-1 md:grid-cols-2 gap-4 mt-6'>
            <div class='space-y-3'>
                <label class='block text-lg font-medium'>👤 Profile avatar</label>
                <input type='file' accept='image/*' class='w-full text-sm cursor-pointer' onchange="uploadImage('{}', 'avatar', this)">
                <p class='text-xs text-gray-400'>Recommended size: 400x400px</p>
            </div>
            <div class='space-y-3'>
                <label class='block text-lg font-medium'>🖼️ Profile banner</label>
                <input type='file' accept='image/*' class='w-full text-sm cursor-pointer' onchange="uploadImage('{}', 'banner', this)">
                <p class='text-xs text-gray-400'>Recommended size: 1500x500px</p>
            </div>
        </div>
        <div id='upload-result' class='mt-4'></div>
        <a href='/accounts' class='block text-center w-full mt-6 py-2.5 border rounded-lg hover:bg-gray-50'>✔ Done</a>"#,
        avatar,
        escape_html(&account.username),
        escape_html(&account.email),
        banner,
        id,
        id
    )
}

// Uploads send the raw file bytes to the JSON API, then reload the panel
// so the stored data URI shows up.
const UPLOAD_SCRIPT: &str = r#"<script>
function uploadImage(accountId, slot, input) {
    var file = input.files[0];
    if (!file) return;
    file.arrayBuffer().then(function (buf) {
        return fetch('/api/accounts/' + accountId + '/' + slot, { method: 'POST', body: buf });
    }).then(function () {
        window.location.href = '/profile?account=' + accountId;
    });
}
</script>"#;

/// Profile page
pub async fn page_profile(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
    query: Query<HashMap<String, String>>,
) -> axum::response::Html<String> {
    let selected = query
        .get("account")
        .and_then(|id| state.registry.account(id));

    let panel = match &selected {
        Some(account) => render_profile_panel(account),
        None => render_account_picker(&state.registry.accounts(), "/profile"),
    };

    let inner_content = format!(
        r#"<div class='mb-6'><h2 class='text-2xl font-bold'>🖼️ Profile setup</h2><p class='text-gray-500'>Upload an avatar and banner for an account</p></div>
        <div class='max-w-2xl bg-white rounded-xl shadow-sm p-6'>{}</div>
        {}"#,
        panel, UPLOAD_SCRIPT
    );

    axum::response::Html(crate::page_response(
        &headers,
        "Profile",
        "/profile",
        &inner_content,
    ))
}
