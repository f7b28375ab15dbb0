//! Plan aggregation pipeline
//!
//! The three-stage fan-out at the heart of the crate: fetch a publisher's
//! plan list, then concurrently fetch per-book detail for every book that has
//! a work entry, and from inside each detail completion conditionally fetch
//! the preview cover bytes. All sub-fetches for one run are joined into a
//! single ordered collection.
//!
//! Failure policy: a failure at the plan-list stage collapses the whole run
//! to an empty result. Failures at the detail or cover stage are absorbed
//! locally — the affected book keeps its optional fields unset and sibling
//! sub-fetches are unaffected.

use futures::future;
use tracing::{debug, info, warn};

use crate::client::CatalogClient;
use crate::error::Result;
use crate::publishers::PublisherDirectory;
use crate::types::{AggregatedBook, BookDetail, BookSummary, PublisherPlans};

/// Orchestrates plan aggregation for a publisher
///
/// Holds an injected [`CatalogClient`] and [`PublisherDirectory`]; one
/// aggregator serves any number of sequential or concurrent runs.
#[derive(Clone, Debug)]
pub struct PlanAggregator {
    client: CatalogClient,
    directory: PublisherDirectory,
}

/// Detail fields one enrichment future produces for a single book
struct Enrichment {
    rating_text: Option<String>,
    cover: Option<Vec<u8>>,
}

impl Enrichment {
    const EMPTY: Enrichment = Enrichment {
        rating_text: None,
        cover: None,
    };
}

impl PlanAggregator {
    /// Create an aggregator from an injected client and registry
    pub fn new(client: CatalogClient, directory: PublisherDirectory) -> Self {
        Self { client, directory }
    }

    /// Create an aggregator against the real catalog origins
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn against_catalog() -> Result<Self> {
        Ok(Self::new(CatalogClient::new()?, PublisherDirectory::default()))
    }

    /// The fetch client this aggregator issues requests through
    pub fn client(&self) -> &CatalogClient {
        &self.client
    }

    /// The publisher registry this aggregator resolves names against
    pub fn directory(&self) -> &PublisherDirectory {
        &self.directory
    }

    /// Aggregate the publishing plan for a publisher, by display name
    ///
    /// Resolves the publisher's endpoint, fetches its plan list, fans out one
    /// concurrent detail fetch per book with a work entry (each of which may
    /// spawn one cover-bytes fetch), and resolves once every sub-fetch has
    /// completed or failed. The returned collection has exactly the length
    /// and order of the decoded plan list, regardless of sub-fetch completion
    /// order. Books without a work entry pass through with both detail fields
    /// unset and trigger no fetches.
    ///
    /// An unknown publisher name or a failed plan-list fetch degrades to an
    /// empty collection; no error is raised to the caller.
    ///
    /// No tasks are detached: dropping the returned future cancels every
    /// in-flight sub-fetch, so a caller superseding a run (the user switched
    /// publisher) simply drops it and can never observe a stale result. The
    /// value resolves on the caller's task; marshaling onto a UI context is
    /// the consumer's concern.
    pub async fn aggregate(&self, publisher_display_name: &str) -> Vec<AggregatedBook> {
        let Some(entry) = self.directory.resolve(publisher_display_name) else {
            warn!(publisher = publisher_display_name, "unknown publisher name");
            return Vec::new();
        };

        let plans: PublisherPlans = match self.client.fetch_decoded(entry.plans_url.clone()).await {
            Ok(plans) => plans,
            Err(error) => {
                warn!(
                    publisher = publisher_display_name,
                    %error,
                    "plan list fetch failed"
                );
                return Vec::new();
            }
        };

        info!(
            publisher = publisher_display_name,
            books = plans.books.len(),
            "plan list fetched, enriching"
        );

        // One future per book; join_all preserves input order, so positional
        // write-back reduces to zipping results with the plan list.
        let enrichments = future::join_all(plans.books.iter().map(|book| self.enrich(book))).await;

        plans
            .books
            .into_iter()
            .zip(enrichments)
            .map(|(book, enrichment)| AggregatedBook {
                book,
                rating_text: enrichment.rating_text,
                cover: enrichment.cover,
            })
            .collect()
    }

    /// Fetch detail and (conditionally) cover bytes for one book
    ///
    /// Never fails: any sub-fetch error leaves the corresponding field unset.
    async fn enrich(&self, book: &BookSummary) -> Enrichment {
        let Some(work_id) = book.work_id() else {
            return Enrichment::EMPTY;
        };

        let url = match self.client.work_url(work_id) {
            Ok(url) => url,
            Err(error) => {
                warn!(work_id, %error, "cannot compose work detail URL");
                return Enrichment::EMPTY;
            }
        };

        let detail: BookDetail = match self.client.fetch_decoded(url).await {
            Ok(detail) => detail,
            Err(error) => {
                debug!(work_id, %error, "detail fetch failed, leaving book bare");
                return Enrichment::EMPTY;
            }
        };

        let rating_text = detail.rating.and_then(|r| r.rating);
        let cover = self.fetch_cover(work_id, detail.preview_cover.as_deref()).await;

        Enrichment { rating_text, cover }
    }

    /// Resolve and fetch a preview cover, absorbing every failure
    async fn fetch_cover(&self, work_id: i64, fragment: Option<&str>) -> Option<Vec<u8>> {
        let url = self.client.resolve_cover_url(fragment?)?;
        match self.client.fetch_bytes(url).await {
            Ok(bytes) => Some(bytes),
            Err(error) => {
                debug!(work_id, %error, "cover fetch failed, leaving cover unset");
                None
            }
        }
    }
}
