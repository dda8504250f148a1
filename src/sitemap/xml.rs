//! Sitemap wire format: `<urlset>` documents.

use super::ParseError;
use quick_xml::{
    Reader, Writer,
    escape::unescape,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use std::io;

/// XML namespace for sitemap
pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Priority written for every entry.
pub const DEFAULT_PRIORITY: &str = "0.5";

/// Spaces per nesting level in generated XML.
const INDENT: usize = 2;

/// Root `<urlset>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlSet {
    /// Value of the `xmlns` attribute.
    pub xmlns: String,
    pub urls: Vec<UrlEntry>,
}

/// Single `<url>` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlEntry {
    pub loc: String,
    /// Optional on read, always written by this crate.
    pub priority: Option<String>,
}

/// Child element of `<url>` whose text is being collected.
#[derive(Debug, Clone, Copy)]
enum Field {
    Loc,
    Priority,
}

impl Default for UrlSet {
    fn default() -> Self {
        Self {
            xmlns: SITEMAP_NS.to_owned(),
            urls: Vec::new(),
        }
    }
}

impl UrlSet {
    /// Serialize with an XML declaration and two-space indentation.
    pub fn to_xml(&self) -> io::Result<Vec<u8>> {
        let mut writer = Writer::new_with_indent(Vec::with_capacity(4096), b' ', INDENT);

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut root = BytesStart::new("urlset");
        root.push_attribute(("xmlns", self.xmlns.as_str()));
        writer.write_event(Event::Start(root))?;

        for entry in &self.urls {
            writer.write_event(Event::Start(BytesStart::new("url")))?;
            write_text_element(&mut writer, "loc", &entry.loc)?;
            if let Some(priority) = &entry.priority {
                write_text_element(&mut writer, "priority", priority)?;
            }
            writer.write_event(Event::End(BytesEnd::new("url")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("urlset")))?;

        let mut xml = writer.into_inner();
        xml.push(b'\n');
        Ok(xml)
    }

    /// Parse a `<urlset>` document.
    ///
    /// Unknown elements are skipped. A `<url>` without `<loc>` yields an entry
    /// with an empty `loc`.
    pub fn parse(content: &[u8]) -> Result<Self, ParseError> {
        let mut reader = Reader::from_reader(content);
        reader.config_mut().trim_text(true);

        let mut urlset: Option<UrlSet> = None;
        let mut depth = 0usize;
        let mut entry: Option<UrlEntry> = None;
        let mut field: Option<Field> = None;
        let mut text = String::new();

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    depth += 1;
                    match depth {
                        1 => urlset = Some(start_urlset(&reader, &e)?),
                        2 if e.local_name().as_ref() == b"url" => {
                            entry = Some(UrlEntry::default());
                        }
                        3 if entry.is_some() => {
                            field = match e.local_name().as_ref() {
                                b"loc" => Some(Field::Loc),
                                b"priority" => Some(Field::Priority),
                                _ => None,
                            };
                            text.clear();
                        }
                        _ => {}
                    }
                }
                Event::Empty(e) => match depth {
                    // `<urlset/>`: a valid, empty document
                    0 => urlset = Some(start_urlset(&reader, &e)?),
                    1 if e.local_name().as_ref() == b"url" => {
                        if let Some(set) = urlset.as_mut() {
                            set.urls.push(UrlEntry::default());
                        }
                    }
                    _ => {}
                },
                Event::Text(e) if field.is_some() => {
                    text.push_str(&reader.decoder().decode(&e)?);
                }
                Event::CData(e) if field.is_some() => {
                    text.push_str(&reader.decoder().decode(&e)?);
                }
                Event::GeneralRef(e) if field.is_some() => {
                    let name = reader.decoder().decode(&e)?;
                    text.push_str(&unescape(&format!("&{name};"))?);
                }
                Event::End(_) => {
                    match depth {
                        3 => {
                            if let (Some(current), Some(field)) = (entry.as_mut(), field.take()) {
                                let value = text.trim().to_owned();
                                match field {
                                    Field::Loc => current.loc = value,
                                    Field::Priority => current.priority = Some(value),
                                }
                            }
                        }
                        2 => {
                            if let (Some(set), Some(done)) = (urlset.as_mut(), entry.take()) {
                                set.urls.push(done);
                            }
                        }
                        _ => {}
                    }
                    depth = depth.saturating_sub(1);
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if depth != 0 {
            return Err(ParseError::UnexpectedEof);
        }
        urlset.ok_or(ParseError::MissingRoot)
    }
}

/// Validate the root element name and read its `xmlns` attribute.
fn start_urlset(reader: &Reader<&[u8]>, elem: &BytesStart<'_>) -> Result<UrlSet, ParseError> {
    let name = elem.local_name();
    if name.as_ref() != b"urlset" {
        return Err(ParseError::UnexpectedRoot(
            reader.decoder().decode(name.as_ref())?.into_owned(),
        ));
    }

    let xmlns = elem
        .attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == b"xmlns")
        .map(|attr| reader.decoder().decode(&attr.value).map(|v| v.into_owned()))
        .transpose()?
        .unwrap_or_default();

    Ok(UrlSet {
        xmlns,
        urls: Vec::new(),
    })
}

/// Write a simple text element (e.g., <loc>text</loc>)
#[inline]
fn write_text_element(writer: &mut Writer<Vec<u8>>, tag: &str, text: &str) -> io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
