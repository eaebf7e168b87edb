//! Request URL assembly for the review-listing RPC.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

/// Ambient constants baked into every listing request.
///
/// The reference values were lifted from captured browser traffic against
/// the endpoint. They live here as plain fields rather than hidden literals
/// so callers can re-point the endpoint (the test suite does) or adjust the
/// locale constants without touching URL assembly.
#[derive(Debug, Clone)]
pub struct RequestConfig {
    /// Scheme and host the RPC path is appended to.
    pub endpoint_base: String,
    /// Interface language, sent as the `hl` query parameter.
    pub language: String,
    /// Region bias, sent as the `gl` query parameter.
    pub region: String,
    /// Session-correlation token embedded in the parameter blob. A stale
    /// token keeps working; the endpoint appears to use it only for request
    /// grouping.
    pub session_token: String,
    /// Reviews requested per page.
    pub page_size: u32,
    /// Pacing delay between successive page requests, in milliseconds.
    pub page_delay_ms: u64,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            endpoint_base: "https://www.google.com".to_owned(),
            language: "en".to_owned(),
            region: "in".to_owned(),
            session_token: "BnOwZvzePPfF4-EPy7LK0Ak".to_owned(),
            page_size: 10,
            page_delay_ms: 1000,
        }
    }
}

/// Builds the absolute RPC URL for one page of the review listing.
///
/// The `pb` blob is positional: every segment is always present, and an
/// absent cursor or search query encodes as an empty segment rather than
/// being omitted. The search query is the only caller-supplied free text in
/// the blob and is percent-encoded; place ids and cursors are
/// provider-issued tokens and are embedded verbatim.
pub(crate) fn listugcposts_url(
    config: &RequestConfig,
    place_id: &str,
    sort_code: u8,
    page_cursor: Option<&str>,
    search_query: &str,
) -> String {
    let query = utf8_percent_encode(search_query, NON_ALPHANUMERIC);
    let cursor = page_cursor.unwrap_or("");
    format!(
        "{base}/maps/rpc/listugcposts?authuser=0&hl={hl}&gl={gl}&pb=!1m7!1s{place_id}!3s{query}!6m4!4m1!1e1!4m1!1e3!2m2!1i{page_size}!2s{cursor}!5m2!1s{session}!7e81!8m5!1b1!2b1!3b1!5b1!7b1!11m6!1e3!2e1!3sen!4slk!6m1!1i2!13m1!1e{sort_code}",
        base = config.endpoint_base,
        hl = config.language,
        gl = config.region,
        page_size = config.page_size,
        session = config.session_token,
    )
}
