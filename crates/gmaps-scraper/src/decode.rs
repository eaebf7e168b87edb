//! Positional decoding of raw review entries into [`ReviewRecord`]s.
//!
//! Index paths below are the reverse-engineered positions the listing
//! endpoint has used since at least mid-2024. Positions can shift silently
//! between API revisions, so every lookup is tolerant: a missing or
//! mis-shaped branch blanks the affected field and never aborts the
//! surrounding record or its siblings.

use serde_json::Value;

use crate::json_path::{pluck, pluck_f64, pluck_i64, pluck_non_empty, pluck_string, pluck_u32};
use crate::types::{
    ImageLocation, ImageSize, OwnerResponse, ReviewAuthor, ReviewBody, ReviewImage, ReviewRecord,
    ReviewTime,
};

/// Decodes a sequence of raw review entries, preserving input order.
///
/// Entries without a review body or identifier are dropped; decoding is
/// pure, so running it twice over the same entries yields identical
/// records.
#[must_use]
pub fn parse_reviews(entries: &[Value]) -> Vec<ReviewRecord> {
    entries.iter().filter_map(parse_review).collect()
}

fn parse_review(entry: &Value) -> Option<ReviewRecord> {
    // Element 0 of each entry wraps the review proper; the remaining
    // elements are listing chrome.
    let review = pluck(entry, &[0])?;

    let Some(review_id) = pluck_string(review, &[0]) else {
        tracing::debug!("dropping review entry without an identifier");
        return None;
    };

    Some(ReviewRecord {
        review_id,
        time: ReviewTime {
            published: pluck_i64(review, &[1, 2]),
            last_edited: pluck_i64(review, &[1, 3]),
        },
        author: ReviewAuthor {
            name: pluck_string(review, &[1, 4, 5, 0]),
            profile_url: pluck_string(review, &[1, 4, 5, 1]),
            url: pluck_string(review, &[1, 4, 5, 2, 0]),
            id: pluck_string(review, &[1, 4, 5, 3]),
        },
        review: ReviewBody {
            rating: pluck_f64(review, &[2, 0, 0]),
            text: pluck_non_empty(review, &[2, 15, 0, 0]),
            language: pluck_non_empty(review, &[2, 14, 0]),
        },
        images: parse_images(review),
        source: pluck_string(review, &[1, 13, 0]),
        response: parse_response(review),
    })
}

/// The owner-response subtree counts as present iff its text branch
/// resolves to a non-null value. Presence and content are separate
/// lookups: a response whose text collapses to empty still yields a
/// non-null `response` with `text: None`.
fn parse_response(review: &Value) -> Option<OwnerResponse> {
    pluck(review, &[3, 14, 0, 0])?;
    Some(OwnerResponse {
        text: pluck_non_empty(review, &[3, 14, 0, 0]),
        time: ReviewTime {
            published: pluck_i64(review, &[3, 1]),
            last_edited: pluck_i64(review, &[3, 2]),
        },
    })
}

/// Decodes the image branch. Every element is decoded independently with
/// the same tolerant lookups; an absent branch, or one that decodes to
/// zero elements, yields `None` rather than an empty list.
fn parse_images(review: &Value) -> Option<Vec<ReviewImage>> {
    let items = pluck(review, &[2, 2])?.as_array()?;
    let images: Vec<ReviewImage> = items.iter().map(parse_image).collect();
    if images.is_empty() {
        None
    } else {
        Some(images)
    }
}

fn parse_image(image: &Value) -> ReviewImage {
    ReviewImage {
        id: pluck_string(image, &[0]),
        url: pluck_string(image, &[1, 6, 0]),
        size: ImageSize {
            width: pluck_u32(image, &[1, 6, 2, 0]),
            height: pluck_u32(image, &[1, 6, 2, 1]),
        },
        location: ImageLocation {
            friendly: pluck_string(image, &[1, 21, 3, 7, 0]),
            lat: pluck_f64(image, &[1, 8, 0, 2]),
            long: pluck_f64(image, &[1, 8, 0, 1]),
        },
        caption: pluck_non_empty(image, &[1, 21, 3, 5, 0]),
    }
}

#[cfg(test)]
#[path = "decode_test.rs"]
mod tests;
