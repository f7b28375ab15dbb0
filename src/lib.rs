//! # pubplans
//!
//! Async client library for publisher publishing plans from the FantLab
//! catalog API.
//!
//! Given a publisher, the crate fetches its plan of forthcoming books, then
//! concurrently enriches every book that has a catalog work entry with its
//! rating and preview cover bytes, and delivers one ordered collection once
//! every sub-fetch has finished or failed.
//!
//! ## Design Philosophy
//!
//! - **Library-first** - No CLI or UI, purely a Rust crate for embedding
//! - **Injected dependencies** - No global client; construct and pass
//! - **Structured concurrency** - Sub-fetches are joined futures, not
//!   detached tasks; dropping a run cancels it
//! - **Tolerant decoding** - Absent catalog fields decode to `None`, never
//!   to a decode failure or a default sentinel
//!
//! ## Quick Start
//!
//! ```no_run
//! use pubplans::PlanAggregator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let aggregator = PlanAggregator::against_catalog()?;
//!
//!     let books = aggregator.aggregate("Азбука").await;
//!     for entry in &books {
//!         println!(
//!             "{} — rating {:?}, cover: {} bytes",
//!             entry.book.title.as_deref().unwrap_or("(untitled)"),
//!             entry.rating_text,
//!             entry.cover.as_ref().map(Vec::len).unwrap_or(0),
//!         );
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Catalog fetch client
pub mod client;
/// Book detail page fetching
pub mod details;
/// Error types
pub mod error;
/// Plan aggregation pipeline
pub mod pipeline;
/// Publisher registry
pub mod publishers;
/// Core domain and wire types
pub mod types;
/// Display helpers
pub mod utils;

// Re-export commonly used types
pub use client::{CatalogClient, DEFAULT_IMAGE_ORIGIN};
pub use details::BookPage;
pub use error::{Error, Result};
pub use pipeline::PlanAggregator;
pub use publishers::{DEFAULT_API_ORIGIN, Publisher, PublisherDirectory, PublisherRef};
pub use types::{
    AggregatedBook, BookDetail, BookDetailExtended, BookSummary, PublisherPlans, Rating, WorkRef,
};
