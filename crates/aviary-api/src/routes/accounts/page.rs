//! Accounts page rendering - Full page and table fragment

use crate::{status_badge, AppState};
use aviary_core::Account;
use aviary_utils::{escape_html, format_number};

/// Render the account table fragment
pub fn render_accounts_table(accounts: &[Account]) -> String {
    if accounts.is_empty() {
        return r#"<div class='text-center py-10 text-gray-500'>No accounts yet. Add one manually or run a bulk registration.</div>"#
            .to_string();
    }

    let rows: Vec<String> = accounts
        .iter()
        .map(|account| {
            let (badge_class, badge_label) = status_badge(account.status);
            let avatar = match &account.avatar {
                Some(uri) => format!(
                    r#"<img src='{}' alt='avatar' class='w-8 h-8 rounded-full border-2 border-sky-200 object-cover'>"#,
                    uri
                ),
                None => String::from(
                    r#"<span class='w-8 h-8 rounded-full bg-gray-100 flex items-center justify-center text-gray-400'>👤</span>"#,
                ),
            };
            let id = urlencoding::encode(&account.id);
            format!(
                r#"<tr class='hover:bg-gray-50 border-b last:border-0'>
                    <td class='px-3 py-2 font-medium'><div class='flex items-center gap-2'>{}{}</div></td>
                    <td class='px-3 py-2 text-gray-500'>{}</td>
                    <td class='px-3 py-2'><span class='text-xs px-2 py-1 rounded-full border {}'>{}</span></td>
                    <td class='px-3 py-2 text-center font-semibold text-pink-600'>{}</td>
                    <td class='px-3 py-2 text-center font-semibold text-indigo-600'>{}</td>
                    <td class='px-3 py-2 text-right'>
                        <a href='/profile?account={}' class='px-2 py-1 rounded hover:bg-sky-50' title='Profile'>🖼️</a>
                        <a href='/posting?account={}' class='px-2 py-1 rounded hover:bg-sky-50' title='Post'>✉️</a>
                        <button hx-post='/accounts/{}/delete' hx-target='#accounts-table' class='px-2 py-1 rounded hover:bg-red-50' title='Delete'>🗑️</button>
                    </td>
                </tr>"#,
                avatar,
                escape_html(&account.username),
                escape_html(&account.email),
                badge_class,
                badge_label,
                format_number(account.followers),
                account.tweets,
                id,
                id,
                id
            )
        })
        .collect();

    format!(
        r#"<div class='rounded-lg border overflow-hidden'>
        <table class='w-full text-sm'>
            <thead><tr class='bg-gray-50 text-left text-gray-600'>
                <th class='px-3 py-2 font-medium'>Username</th>
                <th class='px-3 py-2 font-medium'>Email</th>
                <th class='px-3 py-2 font-medium'>Status</th>
                <th class='px-3 py-2 font-medium text-center'>Followers</th>
                <th class='px-3 py-2 font-medium text-center'>Tweets</th>
                <th class='px-3 py-2 font-medium text-right'>Actions</th>
            </tr></thead>
            <tbody>{}</tbody>
        </table>
        </div>"#,
        rows.join("")
    )
}

/// Accounts page: add-account form plus the live table
pub async fn page_accounts(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    let table = render_accounts_table(&state.registry.accounts());

    let inner_content = format!(
        r#"<div class='mb-6'><h2 class='text-2xl font-bold'>Accounts</h2><p class='text-gray-500'>All registered Twitter accounts</p></div>
        <div class='grid grid-cols-1 lg:grid-cols-3 gap-6'>
            <div class='lg:col-span-2 bg-white rounded-xl shadow-sm p-6'>
                <h3 class='text-lg font-semibold mb-4'>Account list</h3>
                <div id='accounts-table' hx-get='/accounts/list' hx-trigger='every 2s' hx-swap='innerHTML'>{}</div>
            </div>
            <div class='bg-white rounded-xl shadow-sm p-6'>
                <h3 class='text-lg font-semibold mb-4'>➕ Add account</h3>
                <form hx-post='/accounts' hx-target='#add-account-result' hx-swap='innerHTML' class='space-y-4'>
                    <div>
                        <label class='block text-sm font-medium mb-1' for='username'>@ Username</label>
                        <input id='username' name='username' placeholder='@username' class='w-full px-3 py-2 border rounded-lg bg-gray-50 focus:border-sky-400 focus:outline-none'>
                    </div>
                    <div>
                        <label class='block text-sm font-medium mb-1' for='email'>✉️ Email</label>
                        <input id='email' name='email' type='email' placeholder='email@example.com' class='w-full px-3 py-2 border rounded-lg bg-gray-50 focus:border-sky-400 focus:outline-none'>
                    </div>
                    <div>
                        <label class='block text-sm font-medium mb-1' for='token'>🔑 API Token</label>
                        <input id='token' name='token' type='password' placeholder='Bearer xxxxxxxxxx...' class='w-full px-3 py-2 border rounded-lg bg-gray-50 font-mono focus:border-sky-400 focus:outline-none'>
                    </div>
                    <button type='submit' class='w-full py-2.5 bg-sky-600 text-white rounded-lg font-semibold hover:bg-sky-700'>Add account</button>
                </form>
                <div id='add-account-result' class='mt-4'></div>
            </div>
        </div>"#,
        table
    );

    axum::response::Html(crate::page_response(
        &headers,
        "Accounts",
        "/accounts",
        &inner_content,
    ))
}
