//! Sequential cursor-chained pagination over the review listing.
//!
//! Each request depends on the cursor returned by the previous one, so
//! there is nothing to parallelize: one loop, one owned accumulator, and
//! an explicit termination set (cursor absent, budget spent, or a request
//! failed).

use std::time::Duration;

use serde_json::Value;

use crate::options::{PageBudget, SortOrder};
use crate::request::{listugcposts_url, RequestConfig};
use crate::transport::{fetch_page, RawPage};

/// Per-scrape context threaded through page requests.
pub(crate) struct PageContext<'a> {
    pub place_id: &'a str,
    pub sort: SortOrder,
    pub search_query: &'a str,
}

/// Follows continuation cursors from an already-fetched first page,
/// accumulating raw entries until the cursor runs out, the budget is
/// spent, or a request fails.
///
/// Failures after the first page are swallowed: the loop ends and returns
/// everything accumulated so far rather than discarding fetched pages.
/// The inter-page delay is a fixed backpressure measure against provider
/// throttling, not a correctness mechanism.
pub(crate) async fn paginate_reviews(
    http: &reqwest::Client,
    config: &RequestConfig,
    ctx: &PageContext<'_>,
    budget: PageBudget,
    first_page: RawPage,
) -> Vec<Value> {
    let mut cursor = first_page.next_cursor();
    let mut entries = first_page.into_entries();
    let mut page: u32 = 2;

    while let Some(token) = cursor.take() {
        if !budget.allows(page) {
            break;
        }

        tracing::info!(page, "fetching review page");
        let url = listugcposts_url(
            config,
            ctx.place_id,
            ctx.sort.code(),
            Some(&token),
            ctx.search_query,
        );
        match fetch_page(http, &url).await {
            Ok(raw) => {
                if let Some(batch) = raw.entries() {
                    entries.extend(batch.iter().cloned());
                }
                cursor = raw.next_cursor();
            }
            Err(error) => {
                tracing::warn!(page, %error, "review page failed; keeping pages fetched so far");
                break;
            }
        }

        if cursor.is_some() && config.page_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(config.page_delay_ms)).await;
        }
        page += 1;
    }

    entries
}
