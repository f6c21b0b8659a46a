//! API utilities for frontend-backend communication

/// Base URL for API requests.
///
/// Scheme and host are taken from the current window location;
/// the backend listens on port 8000.
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
    format!("{}//{}:8000", protocol, hostname)
}

/// Полный URL API из пути (путь начинается с "/api/").
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
