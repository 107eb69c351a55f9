/// Set to true when the site is deployed standalone, without the request
/// API; the form then acknowledges locally instead of posting.
pub const PREVIEW_ONLY: bool = false;

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production: same origin
}
