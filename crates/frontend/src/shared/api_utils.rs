//! Helpers for talking to the mock JSON server.

/// Base URL of the mock collection server.
///
/// Derived from the current window location, with the server's port
/// 5000 substituted. Empty string when no window is available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:5000", protocol, hostname)
}

/// Build a full URL for a collection path.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
