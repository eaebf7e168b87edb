//! Single-page HTTP fetch and payload decoding.
//!
//! The endpoint prepends a fixed non-JSON guard line to every response to
//! defeat naive cross-site script inclusion. Transport strips it and hands
//! back the untyped payload; retries, pacing, and accumulation are the
//! pagination loop's business, not this module's.

use serde_json::Value;

use crate::error::ScraperError;

/// Guard sequence emitted before every JSON payload.
pub(crate) const JSON_GUARD: &str = ")]}'";

/// One page of the review listing: a positional JSON array in which index 1
/// carries the continuation cursor and index 2 the raw review entries.
/// Pages are transient; they are consumed by the decoder or the pagination
/// accumulator immediately after the fetch.
#[derive(Debug, Clone)]
pub struct RawPage(Value);

impl RawPage {
    #[must_use]
    pub fn new(payload: Value) -> Self {
        Self(payload)
    }

    /// Continuation cursor for the next page, if the provider issued one.
    ///
    /// The provider wraps the token in literal quote characters; those are
    /// stripped here so the token can be forwarded verbatim on the next
    /// request.
    #[must_use]
    pub fn next_cursor(&self) -> Option<String> {
        let token = self.0.get(1)?.as_str()?.trim_matches('"');
        if token.is_empty() {
            None
        } else {
            Some(token.to_owned())
        }
    }

    /// Raw review entries on this page. `None` when the entries branch is
    /// absent or not an array, which the endpoint uses to signal "no more
    /// data".
    #[must_use]
    pub fn entries(&self) -> Option<&[Value]> {
        self.0.get(2)?.as_array().map(Vec::as_slice)
    }

    /// Consumes the page and returns its entries, empty when absent.
    #[must_use]
    pub fn into_entries(self) -> Vec<Value> {
        match self.0 {
            Value::Array(mut items) if items.len() > 2 => match items.swap_remove(2) {
                Value::Array(entries) => entries,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        }
    }
}

/// Fetches and decodes one page of the review listing.
///
/// A single GET with no retry: a non-success status or an undecodable body
/// is the caller's to handle.
///
/// # Errors
///
/// - [`ScraperError::Http`] — the request itself failed.
/// - [`ScraperError::HttpStatus`] — non-success status code.
/// - [`ScraperError::MalformedResponse`] — guard sequence absent, or the
///   remainder is not valid JSON.
pub(crate) async fn fetch_page(
    http: &reqwest::Client,
    url: &str,
) -> Result<RawPage, ScraperError> {
    let response = http.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ScraperError::HttpStatus {
            status: status.as_u16(),
            url: url.to_owned(),
        });
    }

    let body = response.text().await?;
    let payload = strip_guard(&body).ok_or_else(|| ScraperError::MalformedResponse {
        url: url.to_owned(),
        reason: format!("guard sequence {JSON_GUARD:?} not found"),
    })?;

    let value: Value =
        serde_json::from_str(payload).map_err(|e| ScraperError::MalformedResponse {
            url: url.to_owned(),
            reason: format!("payload is not valid JSON: {e}"),
        })?;

    Ok(RawPage::new(value))
}

/// Returns the body text after the first occurrence of the guard sequence.
fn strip_guard(body: &str) -> Option<&str> {
    let start = body.find(JSON_GUARD)? + JSON_GUARD.len();
    Some(&body[start..])
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn strip_guard_discards_through_first_occurrence() {
        assert_eq!(strip_guard(")]}'\n[1,2]"), Some("\n[1,2]"));
        assert_eq!(strip_guard("junk)]}'[1]"), Some("[1]"));
    }

    #[test]
    fn strip_guard_returns_none_when_guard_absent() {
        assert!(strip_guard("[1,2,3]").is_none());
        assert!(strip_guard("").is_none());
    }

    #[test]
    fn next_cursor_strips_embedded_quotes() {
        let page = RawPage::new(json!([null, "\"CAESBkVnSUlDZw==\"", []]));
        assert_eq!(page.next_cursor().as_deref(), Some("CAESBkVnSUlDZw=="));
    }

    #[test]
    fn next_cursor_passes_unquoted_tokens_through() {
        let page = RawPage::new(json!([null, "CAESBkVnSUlDZw==", []]));
        assert_eq!(page.next_cursor().as_deref(), Some("CAESBkVnSUlDZw=="));
    }

    #[test]
    fn next_cursor_absent_for_null_missing_or_empty() {
        assert!(RawPage::new(json!([null, null, []])).next_cursor().is_none());
        assert!(RawPage::new(json!([null])).next_cursor().is_none());
        assert!(RawPage::new(json!([null, "\"\"", []])).next_cursor().is_none());
    }

    #[test]
    fn entries_absent_when_branch_is_null_or_missing() {
        assert!(RawPage::new(json!([null, null, null])).entries().is_none());
        assert!(RawPage::new(json!([null, null])).entries().is_none());
    }

    #[test]
    fn into_entries_yields_owned_entries_or_empty() {
        let page = RawPage::new(json!([null, null, [{"a": 1}, {"b": 2}]]));
        assert_eq!(page.into_entries().len(), 2);
        assert!(RawPage::new(json!([null, null])).into_entries().is_empty());
        assert!(RawPage::new(json!(null)).into_entries().is_empty());
    }
}
