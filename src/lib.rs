//! Teseo - SEO metadata and navigation sitemaps.
//!
//! - [`navigation`]: the site menu model (`ItemList` of `SiteNavigationElement`)
//! - [`sitemap`]: sitemap XML codec for navigation lists
//! - [`schemaorg`], [`opengraph`], [`twittercard`]: `<head>` metadata entities
//! - [`render`]: shared meta tag and JSON-LD rendering

pub mod cli;
pub mod config;
pub mod generator;
pub mod navigation;
pub mod opengraph;
pub mod render;
pub mod schemaorg;
pub mod sitemap;
pub mod twittercard;
pub mod utils;
