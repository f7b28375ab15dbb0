//! Book detail page fetching
//!
//! One-shot fetch backing the book detail screen: extended work detail plus
//! one conditional cover-bytes fetch. Unlike the aggregation pipeline, a
//! failed detail fetch here propagates to the caller; only the cover fetch is
//! absorbed (a missing cover means "show a placeholder").

use tracing::debug;

use crate::error::Result;
use crate::pipeline::PlanAggregator;
use crate::types::BookDetailExtended;

/// Everything the detail screen needs for one work
#[derive(Clone, Debug)]
pub struct BookPage {
    /// Extended work detail (description, original title, cover path)
    pub details: BookDetailExtended,

    /// Raw cover image bytes, when the work has a resolvable cover
    pub cover: Option<Vec<u8>>,
}

impl PlanAggregator {
    /// Fetch the detail page for one work
    ///
    /// # Errors
    /// Propagates the extended-detail fetch failure. A cover fetch failure is
    /// absorbed and leaves `cover` unset.
    pub async fn fetch_book_page(&self, work_id: i64) -> Result<BookPage> {
        let url = self.client().work_url(work_id)?;
        let details: BookDetailExtended = self.client().fetch_decoded(url).await?;

        let cover = match details
            .cover
            .as_deref()
            .and_then(|fragment| self.client().resolve_cover_url(fragment))
        {
            Some(cover_url) => match self.client().fetch_bytes(cover_url).await {
                Ok(bytes) => Some(bytes),
                Err(error) => {
                    debug!(work_id, %error, "detail page cover fetch failed");
                    None
                }
            },
            None => None,
        };

        Ok(BookPage { details, cover })
    }
}
