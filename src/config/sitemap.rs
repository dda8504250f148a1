//! `[sitemap]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[sitemap]` section in teseo.toml.
///
/// # Example
/// ```toml
/// [sitemap]
/// enable = true
/// path = "public/sitemap.xml"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SitemapConfig {
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Output file, relative to the project root.
    #[serde(default = "defaults::sitemap::path")]
    #[educe(Default = defaults::sitemap::path())]
    pub path: PathBuf,
}
