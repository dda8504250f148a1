//! Command implementations driven by [`SiteConfig`](crate::config::SiteConfig).
//!
//! Each function returns the generated markup (or output path) and leaves
//! printing to the binary.

pub mod head;
pub mod sitemap;
