//! Site navigation model.
//!
//! `NavigationList` is the canonical in-memory form of a site's navigation
//! structure. It is rendered as a Schema.org `ItemList` of
//! `SiteNavigationElement` entries and converted to/from sitemap XML by
//! [`crate::sitemap`].
//!
//! # Example
//!
//! ```
//! use teseo::navigation::{NavigationLink, NavigationList, items_from_links};
//!
//! let links = [
//!     NavigationLink::new("Home", "https://www.example.com", "Go to homepage"),
//!     NavigationLink::new("About", "https://www.example.com/about", "About us"),
//! ];
//! let list = NavigationList::new(Some("main"), items_from_links(&links));
//!
//! assert_eq!(list.len(), 2);
//! assert_eq!(list.items().unwrap()[1].position, 2);
//! ```
//!
//! # JSON-LD Output
//!
//! ```json
//! {
//!   "@context": "https://schema.org",
//!   "@type": "ItemList",
//!   "identifier": "main",
//!   "itemListElement": [
//!     { "@type": "SiteNavigationElement", "position": 1, "name": "Home", "url": "https://www.example.com" }
//!   ]
//! }
//! ```

use crate::{
    render::ToJsonLd,
    schemaorg::{SchemaValidator, defaults},
    sitemap::{FsStore, SitemapCodec, SitemapError},
};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// Navigation Item
// ============================================================================

/// A single entry of a navigation menu (`SiteNavigationElement`).
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(rename_all = "camelCase")]
pub struct NavigationItem {
    #[serde(rename = "@type")]
    #[educe(Default = defaults::site_navigation_element())]
    pub kind: String,

    /// 1-based rank within the list. `0` means unset.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub position: u32,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Not part of the sitemap wire format.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
}

impl NavigationItem {
    /// Create an item with every field set explicitly. No validation.
    pub fn new(
        position: u32,
        name: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            position,
            name: name.into(),
            description: description.into(),
            url: url.into(),
            ..Default::default()
        }
    }

    /// Create an item without a description.
    pub fn simple(position: u32, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(position, name, "", url)
    }

    fn ensure_defaults(&mut self) {
        if self.kind.is_empty() {
            self.kind = defaults::site_navigation_element();
        }
    }
}

fn is_zero(n: &u32) -> bool {
    *n == 0
}

// ============================================================================
// Navigation Link
// ============================================================================

/// A `(name, url, description)` triple used to build navigation items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavigationLink {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
}

impl NavigationLink {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            description: description.into(),
        }
    }
}

/// Build navigation items from links, assigning positions `1..=n` in input order.
pub fn items_from_links(links: &[NavigationLink]) -> Vec<NavigationItem> {
    links
        .iter()
        .zip(1..)
        .map(|(link, position)| {
            NavigationItem::new(position, &link.name, &link.description, &link.url)
        })
        .collect()
}

// ============================================================================
// Navigation List
// ============================================================================

/// An ordered navigation structure (`ItemList` of `SiteNavigationElement`).
///
/// `items` is `None` when no collection was ever supplied. The sitemap encoder
/// rejects that state, while `Some(vec![])` is a valid, empty list.
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
pub struct NavigationList {
    #[serde(rename = "@context")]
    #[educe(Default = defaults::context())]
    pub context: String,

    #[serde(rename = "@type")]
    #[educe(Default = defaults::item_list())]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    #[serde(
        rename = "itemListElement",
        default,
        skip_serializing_if = "is_none_or_empty"
    )]
    pub items: Option<Vec<NavigationItem>>,
}

fn is_none_or_empty(items: &Option<Vec<NavigationItem>>) -> bool {
    items.as_ref().is_none_or(Vec::is_empty)
}

impl NavigationList {
    /// Wrap the given items. Does not validate.
    pub fn new(identifier: Option<&str>, items: Vec<NavigationItem>) -> Self {
        Self {
            identifier: identifier.map(str::to_owned),
            items: Some(items),
            ..Default::default()
        }
    }

    /// Items in position order, or `None` if no collection was supplied.
    pub fn items(&self) -> Option<&[NavigationItem]> {
        self.items.as_deref()
    }

    pub fn len(&self) -> usize {
        self.items.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append an item, creating the collection if needed.
    pub fn push(&mut self, item: NavigationItem) {
        self.items.get_or_insert_with(Vec::new).push(item);
    }

    /// Fill in empty `@context` / `@type` fields on the list and its items.
    pub fn ensure_defaults(&mut self) {
        if self.context.is_empty() {
            self.context = defaults::context();
        }
        if self.kind.is_empty() {
            self.kind = defaults::item_list();
        }
        for item in self.items.iter_mut().flatten() {
            item.ensure_defaults();
        }
    }

    // ------------------------------------------------------------------------
    // Sitemap conversion
    // ------------------------------------------------------------------------

    /// Write a sitemap XML file using the local filesystem.
    pub fn to_sitemap_file(&self, path: impl AsRef<Path>) -> Result<(), SitemapError> {
        SitemapCodec::new(FsStore).to_sitemap_file(self, path)
    }

    /// Load a list from a sitemap XML file on the local filesystem.
    ///
    /// Only URLs survive; names, descriptions and the identifier are not part
    /// of the sitemap format.
    pub fn from_sitemap_file(path: impl AsRef<Path>) -> Result<Self, SitemapError> {
        SitemapCodec::new(FsStore).from_sitemap_file(path)
    }
}

// ============================================================================
// Schema.org integration
// ============================================================================

impl SchemaValidator for NavigationList {
    fn validate(&self) -> Vec<String> {
        let items = self.items().unwrap_or_default();
        if items.is_empty() {
            return vec!["ItemList should contain at least one item".to_owned()];
        }

        let mut warnings = Vec::new();
        for (index, item) in items.iter().enumerate() {
            if item.name.is_empty() {
                warnings.push(format!(
                    "missing name in ItemListElement at position {}",
                    index + 1
                ));
            }
            if item.url.is_empty() {
                warnings.push(format!(
                    "missing url in ItemListElement at position {}",
                    index + 1
                ));
            }
            if item.position == 0 {
                warnings.push(format!(
                    "missing position in ItemListElement at index {index}"
                ));
            }
        }
        warnings
    }
}

impl ToJsonLd for NavigationList {
    fn id_prefix(&self) -> &'static str {
        "siteNavItemList"
    }

    fn script_id(&self, json: &str) -> String {
        match self.identifier.as_deref() {
            Some(identifier) if !identifier.is_empty() => {
                format!("{}-{identifier}", self.id_prefix())
            }
            _ => format!("{}-{}", self.id_prefix(), crate::render::unique_key(json)),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_list() -> NavigationList {
        NavigationList::new(
            Some("main"),
            vec![
                NavigationItem::new(1, "Home", "Go to homepage", "https://www.example.com"),
                NavigationItem::new(2, "About", "About us", "https://www.example.com/about"),
            ],
        )
    }

    #[test]
    fn test_new_list_sets_defaults() {
        let list = sample_list();
        assert_eq!(list.context, "https://schema.org");
        assert_eq!(list.kind, "ItemList");
        assert_eq!(list.identifier.as_deref(), Some("main"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_default_list_has_no_items() {
        let list = NavigationList::default();
        assert!(list.items().is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn test_new_item_sets_type() {
        let item = NavigationItem::simple(3, "Blog", "https://www.example.com/blog");
        assert_eq!(item.kind, "SiteNavigationElement");
        assert_eq!(item.position, 3);
        assert!(item.description.is_empty());
    }

    #[test]
    fn test_items_from_links_assigns_positions() {
        let links = [
            NavigationLink::new("Home", "/", "Start"),
            NavigationLink::new("Docs", "/docs", ""),
            NavigationLink::new("Blog", "/blog", ""),
        ];
        let items = items_from_links(&links);

        let positions: Vec<u32> = items.iter().map(|i| i.position).collect();
        assert_eq!(positions, [1, 2, 3]);
        assert_eq!(items[0].description, "Start");
        assert_eq!(items[2].url, "/blog");
    }

    #[test]
    fn test_items_from_links_empty() {
        assert!(items_from_links(&[]).is_empty());
    }

    #[test]
    fn test_push_creates_collection() {
        let mut list = NavigationList::default();
        list.push(NavigationItem::simple(1, "Home", "/"));
        assert_eq!(list.items().map(<[_]>::len), Some(1));
    }

    #[test]
    fn test_ensure_defaults_fills_empty_types() {
        let mut list = NavigationList {
            context: String::new(),
            kind: String::new(),
            identifier: None,
            items: Some(vec![NavigationItem {
                kind: String::new(),
                ..NavigationItem::simple(1, "Home", "/")
            }]),
        };
        list.ensure_defaults();

        assert_eq!(list.context, "https://schema.org");
        assert_eq!(list.kind, "ItemList");
        assert_eq!(list.items().unwrap()[0].kind, "SiteNavigationElement");
    }

    #[test]
    fn test_validate_valid_list() {
        assert!(sample_list().validate().is_empty());
    }

    #[test]
    fn test_validate_empty_list() {
        let warnings = NavigationList::new(None, vec![]).validate();
        assert_eq!(warnings, ["ItemList should contain at least one item"]);
    }

    #[test]
    fn test_validate_missing_fields() {
        let list = NavigationList::new(None, vec![NavigationItem::new(0, "", "", "")]);
        let warnings = list.validate();

        assert_eq!(warnings.len(), 3);
        assert!(warnings.contains(&"missing name in ItemListElement at position 1".to_owned()));
        assert!(warnings.contains(&"missing url in ItemListElement at position 1".to_owned()));
        assert!(warnings.contains(&"missing position in ItemListElement at index 0".to_owned()));
    }

    #[test]
    fn test_json_ld_shape() {
        let value = serde_json::to_value(sample_list()).unwrap();

        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "ItemList");
        assert_eq!(value["identifier"], "main");
        assert_eq!(value["itemListElement"][0]["@type"], "SiteNavigationElement");
        assert_eq!(value["itemListElement"][1]["position"], 2);
        assert_eq!(value["itemListElement"][1]["description"], "About us");
    }

    #[test]
    fn test_json_ld_omits_empty_fields() {
        let list = NavigationList::new(None, vec![NavigationItem::new(1, "", "", "/")]);
        let value = serde_json::to_value(list).unwrap();

        assert!(value.get("identifier").is_none());
        assert!(value["itemListElement"][0].get("name").is_none());
        assert!(value["itemListElement"][0].get("description").is_none());
    }

    #[test]
    fn test_script_id_uses_identifier() {
        let html = sample_list().to_json_ld().unwrap();
        assert!(html.starts_with(r#"<script id="siteNavItemList-main" type="application/ld+json">"#));
    }

    #[test]
    fn test_script_id_without_identifier_is_stable() {
        let list = NavigationList::new(None, vec![NavigationItem::simple(1, "Home", "/")]);
        let first = list.to_json_ld().unwrap();
        let second = list.to_json_ld().unwrap();

        assert!(first.contains(r#"id="siteNavItemList-"#));
        assert_eq!(first, second);
    }
}
