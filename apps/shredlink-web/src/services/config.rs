//! Configuration utilities for the web app.

/// Get the API base URL.
///
/// In development (trunk serve on port 3000), returns `http://localhost:8080`
/// since the API server runs separately. In production the API is
/// same-origin, so the page origin is used directly.
#[cfg(target_arch = "wasm32")]
pub fn api_base() -> String {
    use web_sys::window;

    let origin = window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();

    if origin.contains(":3000") {
        "http://localhost:8080".to_string()
    } else {
        origin
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn api_base() -> String {
    "http://localhost:8080".to_string()
}
