//! Sitemap XML codec for navigation lists.
//!
//! Converts a [`NavigationList`] to and from a sitemap document.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <priority>0.5</priority>
//!   </url>
//! </urlset>
//! ```
//!
//! # Round Trip
//!
//! Only `url` survives `decode(encode(list))`. Names, descriptions and the list
//! identifier have no place in the format, and positions are re-derived from
//! document order on decode:
//!
//! ```text
//! NavigationList ──encode──► <urlset> ──decode──► NavigationList
//!   position, name,            loc,                 position = index + 1,
//!   description, url           priority = 0.5       url = loc
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let bytes = sitemap::encode(&list)?;
//! let codec = SitemapCodec::new(FsStore);
//! codec.to_sitemap_file(&list, "public/sitemap.xml")?;
//! let loaded = codec.from_sitemap_file("public/sitemap.xml")?;
//! ```

mod error;
mod store;
mod xml;

pub use error::{ParseError, SitemapError};
pub use store::{FILE_MODE, FileStore, FsStore, create_parent_dirs};
pub use xml::{DEFAULT_PRIORITY, SITEMAP_NS, UrlEntry, UrlSet};

use crate::navigation::{NavigationItem, NavigationList};
use std::path::Path;

// ============================================================================
// Pure conversion
// ============================================================================

impl UrlSet {
    /// Build the wire document for a list of items, in list order.
    pub fn from_items(items: &[NavigationItem]) -> Self {
        let urls = items
            .iter()
            .map(|item| UrlEntry {
                loc: item.url.clone(),
                priority: Some(DEFAULT_PRIORITY.to_owned()),
            })
            .collect();

        Self {
            urls,
            ..Default::default()
        }
    }

    /// Map entries back to navigation items. Only `loc` is kept.
    pub fn into_navigation_list(self) -> NavigationList {
        let mut list = NavigationList {
            items: Some(Vec::with_capacity(self.urls.len())),
            ..Default::default()
        };
        list.ensure_defaults();

        for (entry, position) in self.urls.into_iter().zip(1..) {
            list.push(NavigationItem {
                position,
                url: entry.loc,
                ..Default::default()
            });
        }
        list
    }
}

/// Encode `list` as sitemap XML.
///
/// Fails with [`SitemapError::EmptyModel`] when the list has no item
/// collection at all; an empty collection produces a `<urlset>` without
/// `<url>` children.
pub fn encode(list: &NavigationList) -> Result<Vec<u8>, SitemapError> {
    let items = list.items().ok_or(SitemapError::EmptyModel)?;
    UrlSet::from_items(items)
        .to_xml()
        .map_err(SitemapError::Marshal)
}

/// Decode sitemap XML into a fresh navigation list.
pub fn decode(content: &[u8]) -> Result<NavigationList, SitemapError> {
    let urlset = UrlSet::parse(content)?;
    Ok(urlset.into_navigation_list())
}

// ============================================================================
// File codec
// ============================================================================

/// Sitemap reader/writer over an injected [`FileStore`].
#[derive(Debug, Clone, Default)]
pub struct SitemapCodec<S = FsStore> {
    store: S,
}

impl<S: FileStore> SitemapCodec<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    /// Encode `list` and write it to `path` with mode `0644`.
    ///
    /// Nothing is written if encoding fails.
    pub fn to_sitemap_file(
        &self,
        list: &NavigationList,
        path: impl AsRef<Path>,
    ) -> Result<(), SitemapError> {
        let path = path.as_ref();
        let xml = encode(list)?;

        self.store
            .write(path, &xml, FILE_MODE)
            .map_err(|source| SitemapError::Write {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Read and decode the sitemap at `path`.
    ///
    /// The handle is always closed. A close failure is reported only when the
    /// read itself succeeded.
    pub fn from_sitemap_file(&self, path: impl AsRef<Path>) -> Result<NavigationList, SitemapError> {
        let path = path.as_ref();

        let reader = self.store.open(path).map_err(|source| SitemapError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let (read, close) = store::read_all(&self.store, reader);
        let content = read.map_err(|source| SitemapError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        close.map_err(|source| SitemapError::Close {
            path: path.to_path_buf(),
            source,
        })?;

        decode(&content)
    }
}

// ============================================================================
// Tests
// ============================================================================
