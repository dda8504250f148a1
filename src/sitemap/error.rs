//! Sitemap codec error types.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors produced while encoding or decoding a sitemap.
///
/// Each failure point has its own variant so callers can tell bad input data
/// (`EmptyModel`, `Parse`) from bad files (`Open`, `Read`, `Close`) and bad
/// disks (`Write`).
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("item list is nil, cannot generate sitemap")]
    EmptyModel,

    #[error("error marshaling sitemap XML")]
    Marshal(#[source] io::Error),

    #[error("failed to write sitemap file `{}`", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to open sitemap XML file `{}`", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read XML file `{}`", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to close file `{}`", .path.display())]
    Close {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not unmarshal XML content")]
    Parse(#[from] ParseError),
}

/// Reasons a byte sequence is not a valid sitemap document.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed XML")]
    Xml(#[from] quick_xml::Error),

    #[error("invalid text encoding")]
    Encoding(#[from] quick_xml::encoding::EncodingError),

    #[error("invalid entity reference")]
    Escape(#[from] quick_xml::escape::EscapeError),

    #[error("document has no <urlset> root element")]
    MissingRoot,

    #[error("expected element type <urlset> but have <{0}>")]
    UnexpectedRoot(String),

    #[error("unexpected end of document")]
    UnexpectedEof,
}
