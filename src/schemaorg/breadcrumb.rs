//! `BreadcrumbList` entity and URL-derived breadcrumbs.
//!
//! # Deriving From a URL
//!
//! | URL                                   | Breadcrumbs                          |
//! |---------------------------------------|--------------------------------------|
//! | `https://example.com`                 | Home                                 |
//! | `https://example.com/about/team`      | Home › About › Team                  |
//! | `https://example.com:8080/docs/?q=1`  | Home (`https://example.com:8080`) › Docs |

use super::{ListItem, SchemaValidator, defaults};
use crate::render::ToJsonLd;
use educe::Educe;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Name of the first breadcrumb.
const HOME: &str = "Home";

#[derive(Debug, Error)]
pub enum BreadcrumbError {
    #[error("invalid URL `{url}`")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("URL `{0}` has no host")]
    MissingHost(String),
}

/// <https://schema.org/BreadcrumbList>
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
pub struct BreadcrumbList {
    #[serde(rename = "@context")]
    #[educe(Default = defaults::context())]
    pub context: String,

    #[serde(rename = "@type")]
    #[educe(Default = defaults::breadcrumb_list())]
    pub kind: String,

    #[serde(rename = "itemListElement", default)]
    pub items: Vec<ListItem>,
}

impl BreadcrumbList {
    /// Wrap `items`, filling in missing `ListItem` types.
    pub fn new(items: Vec<ListItem>) -> Self {
        let mut list = Self {
            items,
            ..Default::default()
        };
        list.ensure_defaults();
        list
    }

    /// Derive breadcrumbs from the path segments of `raw`.
    ///
    /// The first item is always `Home`, pointing at `scheme://host[:port]`.
    /// Each non-empty path segment adds an item named after the percent-decoded
    /// segment with its first character title-cased. Hrefs stay encoded.
    /// Query and fragment are ignored.
    pub fn from_url(raw: &str) -> Result<Self, BreadcrumbError> {
        let url = Url::parse(raw).map_err(|source| BreadcrumbError::InvalidUrl {
            url: raw.to_owned(),
            source,
        })?;
        let Some(host) = url.host_str() else {
            return Err(BreadcrumbError::MissingHost(raw.to_owned()));
        };

        let mut base = format!("{}://{host}", url.scheme());
        if let Some(port) = url.port() {
            base.push_str(&format!(":{port}"));
        }
        let segments: Vec<&str> = url
            .path_segments()
            .map(|segments| segments.filter(|s| !s.is_empty()).collect())
            .unwrap_or_default();

        let mut items = Vec::with_capacity(segments.len() + 1);
        items.push(ListItem::new(1, HOME, base.as_str()));

        let mut href = base;
        for (segment, position) in segments.iter().zip(2..) {
            href.push('/');
            href.push_str(segment);
            items.push(ListItem::new(position, segment_name(segment), href.as_str()));
        }

        Ok(Self::new(items))
    }

    fn ensure_defaults(&mut self) {
        if self.context.is_empty() {
            self.context = defaults::context();
        }
        if self.kind.is_empty() {
            self.kind = defaults::breadcrumb_list();
        }
        for item in &mut self.items {
            item.ensure_defaults();
        }
    }
}

impl SchemaValidator for BreadcrumbList {
    fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.items.is_empty() {
            warnings.push("BreadcrumbList should contain at least one item".to_owned());
        }

        for (item, position) in self.items.iter().zip(1..) {
            if item.name.is_empty() {
                warnings.push(format!("ListItem at position {position} is missing a name"));
            }
            if item.item.is_empty() {
                warnings.push(format!("ListItem at position {position} is missing a URL"));
            }
            if item.position == 0 {
                warnings.push(format!(
                    "ListItem at position {position} is missing a valid position"
                ));
            }
        }

        warnings
    }
}

impl ToJsonLd for BreadcrumbList {
    fn id_prefix(&self) -> &'static str {
        "breadcrumbList"
    }
}

/// Display name of an encoded path segment (`"my%20page"` → `"My page"`).
///
/// Invalid UTF-8 after decoding is replaced, not rejected.
fn segment_name(segment: &str) -> String {
    let decoded = urlencoding::decode_binary(segment.as_bytes());
    to_title(&String::from_utf8_lossy(&decoded))
}

/// Title-case the first character only (`"über-uns"` → `"Über-uns"`).
fn to_title(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &BreadcrumbList) -> Vec<&str> {
        list.items.iter().map(|i| i.name.as_str()).collect()
    }

    fn hrefs(list: &BreadcrumbList) -> Vec<&str> {
        list.items.iter().map(|i| i.item.as_str()).collect()
    }

    #[test]
    fn test_new_sets_defaults() {
        let list = BreadcrumbList::new(vec![ListItem {
            kind: String::new(),
            ..ListItem::new(1, "Home", "https://example.com")
        }]);

        assert_eq!(list.context, "https://schema.org");
        assert_eq!(list.kind, "BreadcrumbList");
        assert_eq!(list.items[0].kind, "ListItem");
    }

    #[test]
    fn test_from_url_nested_path() {
        let list = BreadcrumbList::from_url("https://example.com/about/team").unwrap();

        assert_eq!(names(&list), ["Home", "About", "Team"]);
        assert_eq!(
            hrefs(&list),
            [
                "https://example.com",
                "https://example.com/about",
                "https://example.com/about/team"
            ]
        );
        let positions: Vec<u32> = list.items.iter().map(|i| i.position).collect();
        assert_eq!(positions, [1, 2, 3]);
    }

    #[test]
    fn test_from_url_root_only() {
        for url in ["https://example.com", "https://example.com/"] {
            let list = BreadcrumbList::from_url(url).unwrap();
            assert_eq!(names(&list), ["Home"]);
            assert_eq!(hrefs(&list), ["https://example.com"]);
        }
    }

    #[test]
    fn test_from_url_keeps_port_ignores_query() {
        let list = BreadcrumbList::from_url("http://localhost:8080/docs/?page=2#top").unwrap();

        assert_eq!(names(&list), ["Home", "Docs"]);
        assert_eq!(hrefs(&list), ["http://localhost:8080", "http://localhost:8080/docs"]);
    }

    #[test]
    fn test_from_url_decodes_segment_names() {
        let list = BreadcrumbList::from_url("https://example.com/my%20page/caf%C3%A9").unwrap();

        assert_eq!(names(&list), ["Home", "My page", "Café"]);
        assert_eq!(
            hrefs(&list)[2],
            "https://example.com/my%20page/caf%C3%A9"
        );
    }

    #[test]
    fn test_segment_name_invalid_utf8() {
        assert_eq!(segment_name("%FFabc"), "\u{FFFD}abc");
        assert_eq!(segment_name("plain"), "Plain");
    }

    #[test]
    fn test_from_url_invalid() {
        let err = BreadcrumbList::from_url("http://[::1]:namedport").unwrap_err();
        assert!(matches!(err, BreadcrumbError::InvalidUrl { .. }));
    }

    #[test]
    fn test_from_url_relative_is_invalid() {
        assert!(BreadcrumbList::from_url("/about/team").is_err());
    }

    #[test]
    fn test_from_url_without_host() {
        let err = BreadcrumbList::from_url("mailto:someone@example.com").unwrap_err();
        assert!(matches!(err, BreadcrumbError::MissingHost(_)));
    }

    #[test]
    fn test_validate() {
        let valid = BreadcrumbList::new(vec![ListItem::new(1, "Home", "https://example.com")]);
        assert!(valid.validate().is_empty());

        let empty = BreadcrumbList::new(vec![]);
        assert_eq!(empty.validate(), ["BreadcrumbList should contain at least one item"]);

        let broken = BreadcrumbList::new(vec![ListItem::new(0, "", "")]);
        assert_eq!(
            broken.validate(),
            [
                "ListItem at position 1 is missing a name",
                "ListItem at position 1 is missing a URL",
                "ListItem at position 1 is missing a valid position",
            ]
        );
    }

    #[test]
    fn test_to_title() {
        assert_eq!(to_title("hello"), "Hello");
        assert_eq!(to_title("Hello"), "Hello");
        assert_eq!(to_title("über-uns"), "Über-uns");
        assert_eq!(to_title("123abc"), "123abc");
        assert_eq!(to_title(""), "");
    }

    #[test]
    fn test_json_ld_output() {
        let html = BreadcrumbList::from_url("https://example.com/blog")
            .unwrap()
            .to_json_ld()
            .unwrap();

        assert!(html.starts_with(r#"<script id="breadcrumbList-"#));
        assert!(html.contains(r#""@type":"BreadcrumbList""#));
        assert!(html.contains(r#""name":"Blog""#));
        assert!(html.contains(r#""item":"https://example.com/blog""#));
    }
}
