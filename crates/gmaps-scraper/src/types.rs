//! Caller-visible domain types.

use serde::Serialize;
use serde_json::Value;

/// A fully decoded review.
///
/// Serializes to the stable record shape the surrounding tooling consumes:
/// every field except `review_id` is optional, and `images`/`response` are
/// `null` rather than empty when the underlying branches are absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewRecord {
    pub review_id: String,
    pub time: ReviewTime,
    pub author: ReviewAuthor,
    pub review: ReviewBody,
    /// `None` or non-empty, never an empty list.
    pub images: Option<Vec<ReviewImage>>,
    /// Label of the platform the review originated on.
    pub source: Option<String>,
    /// Present iff the raw entry carries a non-null owner-response branch.
    pub response: Option<OwnerResponse>,
}

/// Publish/edit timestamps as the endpoint reports them (epoch
/// microseconds), passed through undecoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReviewTime {
    pub published: Option<i64>,
    pub last_edited: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewAuthor {
    pub name: Option<String>,
    pub profile_url: Option<String>,
    pub url: Option<String>,
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewBody {
    pub rating: Option<f64>,
    pub text: Option<String>,
    /// Detected language of the review text.
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewImage {
    pub id: Option<String>,
    pub url: Option<String>,
    pub size: ImageSize,
    pub location: ImageLocation,
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageSize {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageLocation {
    /// Human-readable place name attached to the photo.
    pub friendly: Option<String>,
    pub lat: Option<f64>,
    pub long: Option<f64>,
}

/// The place owner's reply to a review.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OwnerResponse {
    pub text: Option<String>,
    pub time: ReviewTime,
}

/// What a scrape hands back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ScrapeOutput {
    /// The first page carried no review entries: the place has no reviews
    /// (or none matching the search query). Not an error.
    Empty,
    /// Raw entries exactly as the endpoint returned them.
    Raw(Vec<Value>),
    /// Entries decoded into normalized records.
    Normalized(Vec<ReviewRecord>),
}

impl ScrapeOutput {
    /// Number of entries or records carried.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Raw(entries) => entries.len(),
            Self::Normalized(records) => records.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
