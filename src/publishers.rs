//! Publisher registry
//!
//! A fixed, compiled-in table of the publishers whose publishing plans the
//! catalog API exposes. Each entry maps a display name (what the UI shows in
//! its segment control) to the publisher's catalog identifier and plan-list
//! endpoint. The endpoint URLs are composed once, at directory construction,
//! against a configurable API origin so tests can point the whole crate at a
//! mock server.

use crate::error::{Error, Result};
use url::Url;

/// Default origin of the catalog API
pub const DEFAULT_API_ORIGIN: &str = "https://api.fantlab.ru";

/// The publishers known to this crate
///
/// Iteration order of [`Publisher::ALL`] is the order the original
/// application presented them in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Publisher {
    /// Азбука
    Azbuka,
    /// АСТ
    Ast,
    /// Фанзон
    Fanzon,
    /// Эксмо
    Eksmo,
}

impl Publisher {
    /// All known publishers, in presentation order
    pub const ALL: [Publisher; 4] = [
        Publisher::Azbuka,
        Publisher::Ast,
        Publisher::Fanzon,
        Publisher::Eksmo,
    ];

    /// The publisher's identifier in the catalog API (`pub_id` query parameter)
    pub fn catalog_id(self) -> u32 {
        match self {
            Publisher::Azbuka => 1431,
            Publisher::Ast => 33,
            Publisher::Fanzon => 7193,
            Publisher::Eksmo => 324,
        }
    }

    /// Human-readable publisher name, as shown in the UI
    pub fn display_name(self) -> &'static str {
        match self {
            Publisher::Azbuka => "Азбука",
            Publisher::Ast => "АСТ",
            Publisher::Fanzon => "Фанзон",
            Publisher::Eksmo => "Эксмо",
        }
    }
}

impl std::fmt::Display for Publisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One resolved registry entry: a publisher plus its plan-list endpoint
#[derive(Clone, Debug)]
pub struct PublisherRef {
    /// The publisher this entry describes
    pub publisher: Publisher,
    /// Catalog identifier (`pub_id`)
    pub id: u32,
    /// Display name shown to the user
    pub display_name: &'static str,
    /// Fully composed plan-list endpoint URL
    pub plans_url: Url,
}

/// Static mapping from publisher display names to their catalog endpoints
///
/// Built once at startup; lookups are pure and have no failure mode beyond
/// "not found". An unrecognized display name is a caller contract violation
/// (the UI only ever passes names sourced from this same registry), so
/// [`PublisherDirectory::resolve`] returns `Option` rather than an error.
#[derive(Clone, Debug)]
pub struct PublisherDirectory {
    entries: Vec<PublisherRef>,
}

impl PublisherDirectory {
    /// Build the directory against the given API origin
    ///
    /// # Errors
    /// Returns an error if a plan-list URL cannot be composed from the origin,
    /// which only happens for origins that cannot serve as a base URL.
    pub fn new(api_origin: &Url) -> Result<Self> {
        let entries = Publisher::ALL
            .iter()
            .map(|&publisher| {
                let mut plans_url =
                    api_origin
                        .join("/pubplans")
                        .map_err(|source| Error::InvalidOrigin {
                            origin: api_origin.to_string(),
                            source,
                        })?;
                plans_url
                    .query_pairs_mut()
                    .append_pair("pub_id", &publisher.catalog_id().to_string());
                Ok(PublisherRef {
                    publisher,
                    id: publisher.catalog_id(),
                    display_name: publisher.display_name(),
                    plans_url,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { entries })
    }

    /// Look up a publisher by its display name
    pub fn resolve(&self, display_name: &str) -> Option<&PublisherRef> {
        self.entries
            .iter()
            .find(|entry| entry.display_name == display_name)
    }

    /// All registry entries, in presentation order
    pub fn entries(&self) -> &[PublisherRef] {
        &self.entries
    }
}

impl Default for PublisherDirectory {
    fn default() -> Self {
        // The default origin is a compile-time constant and always parses.
        #[allow(clippy::expect_used)]
        let origin = Url::parse(DEFAULT_API_ORIGIN).expect("default API origin is a valid URL");
        #[allow(clippy::expect_used)]
        Self::new(&origin).expect("default API origin is a valid base URL")
    }
}
