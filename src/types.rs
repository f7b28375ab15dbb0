//! Core types for pubplans
//!
//! Typed representations of the three catalog API response shapes (plan list,
//! book detail, extended book detail) plus the aggregated per-book record the
//! pipeline produces. Decoding is strict and option-typed: a missing or null
//! JSON field decodes to `None`, never to a default sentinel, so "no data" is
//! never conflated with "empty data".

use serde::{Deserialize, Deserializer};

/// One publisher's plan list: the books it has announced as forthcoming
///
/// Ephemeral — constructed from a single decoded response and consumed by the
/// aggregation pipeline.
#[derive(Clone, Debug, Deserialize)]
pub struct PublisherPlans {
    /// Publisher name as reported by the API
    #[serde(rename = "pub_name")]
    pub publisher: Option<String>,

    /// Ordered list of planned books
    #[serde(rename = "objects", default)]
    pub books: Vec<BookSummary>,
}

/// One planned book as it appears in a plan list
#[derive(Clone, Debug, Deserialize)]
pub struct BookSummary {
    /// Raw author string; may contain bracketed annotations
    /// (see [`crate::utils::clean_author_name`])
    #[serde(rename = "autors")]
    pub author: Option<String>,

    /// Free-text release date
    pub date: Option<String>,

    /// Edition identifier
    pub edition_id: Option<i64>,

    /// Book title
    #[serde(rename = "name")]
    pub title: Option<String>,

    /// Series name, often empty
    pub series: Option<String>,

    /// Link to the underlying work, when the catalog has one
    #[serde(rename = "the_only_work")]
    pub work: Option<WorkRef>,
}

impl BookSummary {
    /// The work identifier used for detail lookups, if the catalog has one
    ///
    /// Both the `the_only_work` object and its `work_id` field may be absent;
    /// either absence means no further detail is available for this book.
    pub fn work_id(&self) -> Option<i64> {
        self.work.as_ref().and_then(|w| w.work_id)
    }
}

/// Reference from a planned book to its catalog work entry
#[derive(Clone, Debug, Deserialize)]
pub struct WorkRef {
    /// Identifier of the work in the catalog
    pub work_id: Option<i64>,
}

/// Per-work detail fetched during aggregation (`GET /work/{workId}`)
#[derive(Clone, Debug, Deserialize)]
pub struct BookDetail {
    /// Full-size cover path fragment, relative to the image origin
    #[serde(rename = "image")]
    pub cover: Option<String>,

    /// Preview cover path fragment, relative to the image origin
    #[serde(rename = "image_preview")]
    pub preview_cover: Option<String>,

    /// Rating block, absent for unrated works
    pub rating: Option<Rating>,

    /// Work title
    pub title: Option<String>,

    /// Number of voters behind the rating
    #[serde(rename = "val_voters")]
    pub voters: Option<i64>,

    /// Work description
    #[serde(rename = "work_description")]
    pub description: Option<String>,
}

/// Rating block from the work detail response
///
/// The API serves the rating value as either a JSON string or a JSON number;
/// both decode to a string here (`0` and `"0"` become `"0"`, which downstream
/// display code treats as "unrated" — see [`crate::utils::display_rating`]).
#[derive(Clone, Debug, Deserialize)]
pub struct Rating {
    /// Normalized rating value
    #[serde(default, deserialize_with = "rating_value")]
    pub rating: Option<String>,
}

fn rating_value<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(serde_json::Number),
        Text(String),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Number(n) => n.to_string(),
        Raw::Text(s) => s,
    }))
}

/// Extended per-work detail used by the book detail screen
#[derive(Clone, Debug, Deserialize)]
pub struct BookDetailExtended {
    /// Cover path fragment, relative to the image origin
    #[serde(rename = "image")]
    pub cover: Option<String>,

    /// Work description
    #[serde(rename = "work_description")]
    pub description: Option<String>,

    /// Original (untranslated) title
    #[serde(rename = "work_name_orig")]
    pub original_title: Option<String>,
}

/// One fully aggregated book: the plan-list summary plus pipeline-filled detail
///
/// `rating_text` and `cover` stay `None` when the book has no work entry, when
/// the corresponding sub-fetch failed, or when the catalog simply has no data.
/// An unset cover means "show a placeholder", not an error.
#[derive(Clone, Debug)]
pub struct AggregatedBook {
    /// The plan-list summary this record was built from
    pub book: BookSummary,

    /// Raw rating text from the work detail, passed through unfiltered
    pub rating_text: Option<String>,

    /// Raw cover image bytes
    pub cover: Option<Vec<u8>>,
}
