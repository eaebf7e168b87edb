//! Scrape facade: input validation, dispatch, and the no-result boundary.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::decode::parse_reviews;
use crate::error::ScraperError;
use crate::options::{OutputMode, PageBudget, SortOrder};
use crate::pagination::{paginate_reviews, PageContext};
use crate::place::extract_place_id;
use crate::request::{listugcposts_url, RequestConfig};
use crate::transport::fetch_page;
use crate::types::ScrapeOutput;

/// Host a shareable place URL must carry.
const PLACE_URL_HOST: &str = "www.google.com";
/// Path prefix of a shareable place page.
const PLACE_URL_PATH_PREFIX: &str = "/maps/place/";

const HTTP_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("gmaps-scraper/", env!("CARGO_PKG_VERSION"));

/// One scrape invocation: which place, in what order, how many pages, and
/// in which output shape.
#[derive(Debug, Clone)]
pub struct ScrapeRequest {
    /// Shareable place-page URL, e.g.
    /// `https://www.google.com/maps/place/...`.
    pub location_url: String,
    pub sort: SortOrder,
    /// Free text the provider filters reviews by; empty means no filter.
    pub search_query: String,
    pub pages: PageBudget,
    pub output: OutputMode,
}

impl ScrapeRequest {
    /// A request for every page of a place's reviews, most relevant first,
    /// in raw form.
    #[must_use]
    pub fn new(location_url: impl Into<String>) -> Self {
        Self {
            location_url: location_url.into(),
            sort: SortOrder::default(),
            search_query: String::new(),
            pages: PageBudget::default(),
            output: OutputMode::default(),
        }
    }

    /// Builds a request from untyped caller input, validating each field.
    ///
    /// # Errors
    ///
    /// [`ScraperError::InvalidSortOrder`], [`ScraperError::InvalidPageBudget`],
    /// or [`ScraperError::InvalidOutputMode`] when the corresponding argument
    /// does not parse.
    pub fn parse(
        location_url: impl Into<String>,
        sort: &str,
        search_query: impl Into<String>,
        pages: &str,
        output: &str,
    ) -> Result<Self, ScraperError> {
        Ok(Self {
            location_url: location_url.into(),
            sort: sort.parse()?,
            search_query: search_query.into(),
            pages: pages.parse()?,
            output: output.parse()?,
        })
    }
}

/// Client for the review-listing endpoint.
///
/// Owns the HTTP connection pool and the ambient request constants. Scrape
/// calls are self-contained: each owns its cursor and accumulator, so
/// concurrent calls on one client need no coordination.
pub struct ReviewsClient {
    http: Client,
    config: RequestConfig,
}

impl ReviewsClient {
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g. invalid TLS config).
    pub fn new(config: RequestConfig) -> Result<Self, ScraperError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { http, config })
    }

    /// Client with the reference request constants.
    ///
    /// # Errors
    ///
    /// See [`ReviewsClient::new`].
    pub fn with_defaults() -> Result<Self, ScraperError> {
        Self::new(RequestConfig::default())
    }

    /// Scrapes reviews, converting every failure into a logged "no result".
    ///
    /// This is the boundary the surrounding tooling calls: it never panics,
    /// and `None` is the terminal failure signal. Use [`Self::try_scrape`]
    /// to observe the underlying error instead.
    pub async fn scrape(&self, request: &ScrapeRequest) -> Option<ScrapeOutput> {
        match self.try_scrape(request).await {
            Ok(output) => Some(output),
            Err(error) => {
                tracing::error!(%error, url = request.location_url, "scrape failed");
                None
            }
        }
    }

    /// Typed scrape: validation and first-page failures surface as errors.
    ///
    /// Validation happens before any network activity. After a successful
    /// first page: no entries at all means the place has no matching
    /// reviews ([`ScrapeOutput::Empty`]); no continuation cursor, or a
    /// single-page budget, returns that page directly; anything else runs
    /// the pagination loop, whose mid-run failures degrade to partial
    /// results rather than errors.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidUrl`] — not a place-page URL, or no place
    ///   identifier in it.
    /// - [`ScraperError::Http`], [`ScraperError::HttpStatus`],
    ///   [`ScraperError::MalformedResponse`] — the first page could not be
    ///   fetched or decoded.
    pub async fn try_scrape(
        &self,
        request: &ScrapeRequest,
    ) -> Result<ScrapeOutput, ScraperError> {
        validate_place_url(&request.location_url)?;
        let place_id = extract_place_id(&request.location_url)?;

        let url = listugcposts_url(
            &self.config,
            &place_id,
            request.sort.code(),
            None,
            &request.search_query,
        );
        let first_page = fetch_page(&self.http, &url).await?;

        if first_page.entries().is_none_or(<[Value]>::is_empty) {
            return Ok(ScrapeOutput::Empty);
        }

        let entries = if first_page.next_cursor().is_none() || request.pages.is_single_page() {
            first_page.into_entries()
        } else {
            let ctx = PageContext {
                place_id: &place_id,
                sort: request.sort,
                search_query: &request.search_query,
            };
            paginate_reviews(&self.http, &self.config, &ctx, request.pages, first_page).await
        };

        Ok(match request.output {
            OutputMode::Raw => ScrapeOutput::Raw(entries),
            OutputMode::Normalized => ScrapeOutput::Normalized(parse_reviews(&entries)),
        })
    }
}

/// Checks that the URL is a shareable place page. Runs before any network
/// I/O.
fn validate_place_url(location_url: &str) -> Result<(), ScraperError> {
    let parsed = reqwest::Url::parse(location_url).map_err(|e| ScraperError::InvalidUrl {
        url: location_url.to_owned(),
        reason: e.to_string(),
    })?;

    if parsed.host_str() != Some(PLACE_URL_HOST) {
        return Err(ScraperError::InvalidUrl {
            url: location_url.to_owned(),
            reason: format!("host must be {PLACE_URL_HOST}"),
        });
    }
    if !parsed.path().starts_with(PLACE_URL_PATH_PREFIX) {
        return Err(ScraperError::InvalidUrl {
            url: location_url.to_owned(),
            reason: format!("path must start with {PLACE_URL_PATH_PREFIX}"),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
