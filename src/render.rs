//! HTML fragment rendering for meta tags and JSON-LD blocks.
//!
//! Every entity in [`crate::opengraph`], [`crate::twittercard`] and
//! [`crate::schemaorg`] renders through one of the two traits here:
//!
//! - [`ToMetaTags`]: a flat list of `<meta property=".." content=".."/>` tags
//! - [`ToJsonLd`]: a single `<script type="application/ld+json">` block

use quick_xml::{
    Writer,
    escape::escape,
    events::{BytesStart, Event},
};
use serde::Serialize;
use std::io;
use thiserror::Error;

/// Number of hex characters in generated script ids.
const KEY_LEN: usize = 16;

/// Errors raised while rendering HTML fragments.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write meta tags")]
    Io(#[from] io::Error),

    #[error("failed to serialize JSON-LD")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Meta Tags
// ============================================================================

/// A single `<meta>` property/content pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub property: &'static str,
    pub content: String,
}

impl MetaTag {
    pub fn new(property: &'static str, content: impl Into<String>) -> Self {
        Self {
            property,
            content: content.into(),
        }
    }
}

/// Entities rendered as a sequence of `<meta>` tags.
pub trait ToMetaTags {
    /// All tags in output order, including ones with empty content.
    fn meta_tags(&self) -> Vec<MetaTag>;

    /// Render tags with non-empty content as HTML.
    fn to_meta_tags(&self) -> Result<String, RenderError> {
        render_meta_tags(&self.meta_tags())
    }
}

/// Render `<meta property=".." content=".."/>` for every tag with content.
///
/// Attribute values are XML-escaped.
pub fn render_meta_tags(tags: &[MetaTag]) -> Result<String, RenderError> {
    let mut writer = Writer::new(Vec::new());
    for tag in tags.iter().filter(|tag| !tag.content.is_empty()) {
        write_meta_tag(&mut writer, tag.property, &tag.content)?;
    }
    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}

/// Write a meta tag
#[inline]
pub fn write_meta_tag(writer: &mut Writer<Vec<u8>>, property: &str, content: &str) -> io::Result<()> {
    let mut elem = BytesStart::new("meta");
    elem.push_attribute(("property", property));
    elem.push_attribute(("content", content));
    writer.write_event(Event::Empty(elem))
}

// ============================================================================
// JSON-LD
// ============================================================================

/// Entities rendered as a `<script type="application/ld+json">` block.
pub trait ToJsonLd: Serialize {
    /// Prefix of the script element id, e.g. `"article"`.
    fn id_prefix(&self) -> &'static str;

    /// Script element id for the serialized `json`.
    fn script_id(&self, json: &str) -> String {
        format!("{}-{}", self.id_prefix(), unique_key(json))
    }

    fn to_json_ld(&self) -> Result<String, RenderError> {
        let json = serde_json::to_string(self)?;
        let id = self.script_id(&json);
        Ok(json_ld_script(&id, &json))
    }
}

/// Wrap serialized JSON in a JSON-LD script element.
///
/// `<`, `>` and `&` are emitted as unicode escapes so the payload can never
/// close the script element early.
pub fn json_ld_script(id: &str, json: &str) -> String {
    let json = json
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026");
    format!(
        r#"<script id="{}" type="application/ld+json">{json}</script>"#,
        escape(id)
    )
}

/// Deterministic short key derived from `content`.
pub fn unique_key(content: impl AsRef<[u8]>) -> String {
    let hash = blake3::hash(content.as_ref());
    let mut key = hex::encode(hash.as_bytes());
    key.truncate(KEY_LEN);
    key
}

// ============================================================================
// Tests
// ============================================================================
