//! HTTP API server with HTMX support
//!
//! Routes are organized into modules, one per dashboard tab:
//! - routes::accounts: Account table, manual add, delete
//! - routes::bulk: Simulated batch registration
//! - routes::profile: Avatar and banner uploads
//! - routes::posting: Post composer
//! - routes::export: JSON snapshot download

pub mod error;
pub mod routes;

use aviary_config::Config;
use aviary_core::{AccountStatus, CoreError, Registry, RegistryOperations};
use axum::{
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
    pub config: Config,
}

// ==================== Notifications ====================

/// Notification severity shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// One toast-style notification; emitted for every operation outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn success(title: &str, description: String) -> Self {
        Self {
            title: title.to_string(),
            description,
            severity: Severity::Success,
        }
    }

    pub fn warning(title: &str, description: String) -> Self {
        Self {
            title: title.to_string(),
            description,
            severity: Severity::Warning,
        }
    }

    /// Notification for a rejected operation
    pub fn from_error(error: &CoreError) -> Self {
        Self {
            title: "Validation failed".to_string(),
            description: error.to_string(),
            severity: Severity::Warning,
        }
    }

    /// Render as a toast card fragment
    pub fn toast_html(&self) -> String {
        let (card, accent, icon) = match self.severity {
            Severity::Success => ("bg-green-50 border-green-200", "text-green-700", "✓"),
            Severity::Warning => ("bg-yellow-50 border-yellow-200", "text-yellow-700", "⚠"),
            Severity::Error => ("bg-red-50 border-red-200", "text-red-700", "✗"),
        };
        format!(
            r#"<div class='border rounded-lg p-4 {}'><div class='flex items-center gap-2'><span class='{}'>{}</span><span class='font-medium {}'>{}</span></div><p class='text-sm text-gray-600 mt-1'>{}</p></div>"#,
            card,
            accent,
            icon,
            accent,
            aviary_utils::escape_html(&self.title),
            aviary_utils::escape_html(&self.description)
        )
    }
}

/// JSON envelope for mutating endpoints
#[derive(Debug, Serialize)]
pub struct OperationResponse {
    pub success: bool,
    pub notification: Notification,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl OperationResponse {
    pub fn ok(notification: Notification, data: Option<serde_json::Value>) -> String {
        serde_json::to_string(&Self {
            success: true,
            notification,
            data,
        })
        .unwrap_or_default()
    }

    pub fn rejected(notification: Notification) -> String {
        serde_json::to_string(&Self {
            success: false,
            notification,
            data: None,
        })
        .unwrap_or_default()
    }
}

// ==================== Shared Rendering ====================

/// Badge classes and label for an account status
///
/// Green for active, yellow pending, red suspended, pulsing blue while
/// registering, purple configuring.
pub fn status_badge(status: AccountStatus) -> (&'static str, &'static str) {
    match status {
        AccountStatus::Active => ("bg-green-50 text-green-600 border-green-200", "Active"),
        AccountStatus::Pending => ("bg-yellow-50 text-yellow-600 border-yellow-200", "Pending"),
        AccountStatus::Suspended => ("bg-red-50 text-red-600 border-red-200", "Suspended"),
        AccountStatus::Registering => (
            "bg-blue-50 text-blue-600 border-blue-200 animate-pulse",
            "Registering...",
        ),
        AccountStatus::Configuring => (
            "bg-purple-50 text-purple-600 border-purple-200",
            "Configuring",
        ),
    }
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    // Import route handlers
    use routes::accounts::{
        api_account_detail, api_accounts, api_create_account, api_delete_account,
        htmx_account_delete, htmx_account_store, htmx_accounts_list, page_accounts,
    };
    use routes::bulk::{api_bulk_register, htmx_bulk_run, htmx_bulk_status, page_bulk};
    use routes::export::{api_export, page_export};
    use routes::posting::{api_post_tweet, htmx_post_store, page_posting};
    use routes::profile::{api_upload_avatar, api_upload_banner, page_profile};

    Router::new()
        // API endpoints
        .route("/api/health", get(health_check))
        .route("/api/accounts", get(api_accounts).post(api_create_account))
        .route("/api/accounts/bulk", post(api_bulk_register))
        .route(
            "/api/accounts/:id",
            get(api_account_detail).delete(api_delete_account),
        )
        .route("/api/accounts/:id/avatar", post(api_upload_avatar))
        .route("/api/accounts/:id/banner", post(api_upload_banner))
        .route("/api/accounts/:id/post", post(api_post_tweet))
        .route("/api/stats", get(api_stats))
        .route("/api/summary", get(api_summary))
        .route("/api/export", get(api_export))
        // HTMX page routes
        .route("/", get(index_page))
        .route("/accounts", get(page_accounts).post(htmx_account_store))
        .route("/bulk", get(page_bulk))
        .route("/profile", get(page_profile))
        .route("/posting", get(page_posting))
        .route("/export", get(page_export))
        // HTMX partial routes (for tab content)
        .route("/accounts/list", get(htmx_accounts_list))
        .route("/accounts/:id/delete", post(htmx_account_delete))
        .route("/bulk/run", post(htmx_bulk_run))
        .route("/bulk/status", get(htmx_bulk_status))
        .route("/posting/:id", post(htmx_post_store))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Get registry summary (JSON API)
async fn api_summary(state: axum::extract::State<AppState>) -> String {
    let summary = state.registry.summary();
    serde_json::to_string(&summary).unwrap_or_default()
}

/// Get derived statistics (JSON API)
async fn api_stats(state: axum::extract::State<AppState>) -> String {
    let stats = state.registry.stats();
    serde_json::to_string(&stats).unwrap_or_default()
}

// ==================== Template Functions ====================

/// Base HTML template
pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - Aviary</title>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
        .htmx-indicator {{ opacity: 0; transition: opacity 0.3s; }}
        .htmx-request .htmx-indicator {{ opacity: 1; }}
        .htmx-request.htmx-indicator {{ opacity: 1; }}
    </style>
</head>
<body class="bg-gray-50 text-gray-900">
    {}
</body>
</html>"#,
        title, content
    )
}

/// Tab navigation bar
pub fn nav_tabs(current_path: &str) -> String {
    let links = [
        ("/", "Dashboard", "🐦"),
        ("/accounts", "Accounts", "👥"),
        ("/bulk", "Bulk", "⚡"),
        ("/profile", "Profile", "🖼️"),
        ("/posting", "Posting", "✉️"),
        ("/export", "Export", "📥"),
    ];

    let mut nav = String::from(
        "<div class='bg-white border-b'><div class='max-w-6xl mx-auto px-4'><div class='flex items-center gap-3 py-4'><span class='text-2xl'>🐦</span><h1 class='text-xl font-bold text-sky-600'>Aviary</h1><span class='text-sm text-gray-400'>account &amp; token management</span></div><ul class='flex gap-1 -mb-px'>",
    );

    for (path, label, icon) in &links {
        let is_active = if *path == "/" {
            current_path == "/"
        } else {
            current_path.starts_with(path)
        };
        let active_class = if is_active {
            "border-sky-500 text-sky-600"
        } else {
            "border-transparent text-gray-500 hover:text-gray-700"
        };
        nav.push_str(&format!(
            r#"<li><a href='{}' class='flex items-center gap-2 px-4 py-2 border-b-2 {}'>{}<span>{}</span></a></li>"#,
            path, active_class, icon, label
        ));
    }
    nav.push_str("</ul></div></div>");
    nav
}

/// Check if request is from HTMX (partial page update)
fn is_htmx_request(headers: &axum::http::HeaderMap) -> bool {
    headers.get("hx-request").is_some()
}

/// Wrap content for full page or HTMX partial
pub fn page_response(
    headers: &axum::http::HeaderMap,
    title: &str,
    current_path: &str,
    inner_content: &str,
) -> String {
    if is_htmx_request(headers) {
        // HTMX partial - just the content area
        format!(
            r#"<main class='max-w-6xl mx-auto p-6'>{}</main>"#,
            inner_content
        )
    } else {
        base_html(
            title,
            &format!(
                r#"{}<main class='max-w-6xl mx-auto p-6'>{}</main>"#,
                nav_tabs(current_path),
                inner_content
            ),
        )
    }
}

/// Dashboard stat cards: totals, active count, follower progress, average
pub fn stat_cards(state: &AppState) -> String {
    let stats = state.registry.stats();
    let total_accounts = state.registry.account_count();
    let follower_progress = ((stats.total_followers as f64 / 10_000.0) * 100.0).min(100.0);

    format!(
        r#"<div class='grid grid-cols-1 md:grid-cols-3 gap-4 mb-6'>
            <div class='bg-white p-5 rounded-xl border-2 border-sky-100'>
                <p class='text-sm text-sky-600 flex items-center gap-2'>👥 Total accounts</p>
                <p class='text-4xl font-bold'>{}</p>
                <p class='text-sm text-gray-500 mt-2'>✅ {} active</p>
            </div>
            <div class='bg-white p-5 rounded-xl border-2 border-pink-100'>
                <p class='text-sm text-pink-600 flex items-center gap-2'>💗 Total followers</p>
                <p class='text-4xl font-bold'>{}</p>
                <div class='h-2 bg-gray-100 rounded-full mt-3'><div class='h-2 bg-pink-400 rounded-full' style='width: {:.0}%'></div></div>
            </div>
            <div class='bg-white p-5 rounded-xl border-2 border-indigo-100'>
                <p class='text-sm text-indigo-600 flex items-center gap-2'>💬 Total tweets</p>
                <p class='text-4xl font-bold'>{}</p>
                <p class='text-sm text-gray-500 mt-2'>📈 {} average</p>
            </div>
        </div>"#,
        total_accounts,
        stats.active_count,
        aviary_utils::format_number(stats.total_followers),
        follower_progress,
        aviary_utils::format_number(stats.total_tweets),
        stats.average_tweets
    )
}

/// Index page: stat cards plus the live account table
async fn index_page(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    let cards = stat_cards(&state);
    let inner_content = format!(
        r#"<div class='mb-6'><h2 class='text-2xl font-bold'>Dashboard</h2></div>
        {}
        <div class='bg-white rounded-xl shadow-sm p-6'>
            <h3 class='text-lg font-semibold mb-4'>Registered accounts</h3>
            <div id='accounts-table' hx-get='/accounts/list' hx-trigger='load, every 2s' hx-swap='innerHTML'></div>
        </div>"#,
        cards
    );

    axum::response::Html(page_response(&headers, "Dashboard", "/", &inner_content))
}

/// Start the HTTP server
///
/// This is the main entry point for the Aviary server.
/// It creates the router, binds to the address, and starts listening for
/// requests.
///
/// # Arguments
///
/// * `config` - The application configuration
/// * `registry` - The shared account registry
pub async fn start_server(config: Config, registry: Arc<Registry>) {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState { registry, config };

    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await.unwrap();
    eprintln!("[INFO] Starting Aviary server on http://{}", addr);
    eprintln!("[INFO] Available routes:");
    eprintln!("[INFO]   - / (Dashboard)");
    eprintln!("[INFO]   - /accounts (Account management)");
    eprintln!("[INFO]   - /bulk (Bulk registration)");
    eprintln!("[INFO]   - /profile (Profile images)");
    eprintln!("[INFO]   - /posting (Post composer)");
    eprintln!("[INFO]   - /export (JSON export)");
    eprintln!("[INFO]   - /api/* (JSON API endpoints)");

    match axum::serve(listener, router).await {
        Ok(_) => eprintln!("[INFO] Server stopped gracefully"),
        Err(e) => eprintln!("[ERROR] Server error: {}", e),
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_json_shape() {
        let notification = Notification::success("Account added", "Stored in registry".to_string());
        let json = serde_json::to_value(&notification).unwrap();
        assert_eq!(json["title"], "Account added");
        assert_eq!(json["description"], "Stored in registry");
        assert_eq!(json["severity"], "success");
    }

    #[test]
    fn test_notification_from_error_is_warning() {
        let error = CoreError::EmptyPost;
        let notification = Notification::from_error(&error);
        assert_eq!(notification.severity, Severity::Warning);
        assert_eq!(notification.title, "Validation failed");
    }

    #[test]
    fn test_toast_html_escapes_user_text() {
        let notification =
            Notification::success("Posted", "Tweet from <script>bad</script>".to_string());
        let html = notification.toast_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_status_badges() {
        let (classes, label) = status_badge(AccountStatus::Registering);
        assert!(classes.contains("animate-pulse"));
        assert_eq!(label, "Registering...");

        let (classes, label) = status_badge(AccountStatus::Active);
        assert!(classes.contains("green"));
        assert_eq!(label, "Active");
    }
}
