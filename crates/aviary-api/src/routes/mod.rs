//! Route modules for the API server
//!
//! All routes are organized into modules, one per dashboard tab:
//! - accounts: Account table, manual add, delete
//! - bulk: Simulated batch registration
//! - profile: Avatar and banner uploads
//! - posting: Post composer
//! - export: JSON snapshot download
//!
//! Each module follows a consistent structure:
//! - mod.rs: Module declaration and exports
//! - api.rs: JSON API and HTMX endpoints
//! - page.rs: Full page rendering

pub mod accounts;
pub mod bulk;
pub mod export;
pub mod posting;
pub mod profile;

use std::collections::HashMap;

/// Parse a urlencoded form body into key/value pairs
pub(crate) fn parse_form(body: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    for pair in body.split('&') {
        let parts: Vec<&str> = pair.split('=').collect();
        if parts.len() == 2 {
            let key = urlencoding::decode(parts[0]).unwrap_or_default().into_owned();
            let value = urlencoding::decode(&parts[1].replace('+', " "))
                .unwrap_or_default()
                .into_owned();
            params.insert(key, value);
        }
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_form() {
        let params = parse_form("username=%40alice&text=hello+world&empty=");
        assert_eq!(params.get("username").map(String::as_str), Some("@alice"));
        assert_eq!(params.get("text").map(String::as_str), Some("hello world"));
        // pairs without a value after '=' still parse
        assert_eq!(params.get("empty").map(String::as_str), Some(""));
    }
}
