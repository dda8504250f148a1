//! Sitemap generation and inspection.
//!
//! The sitemap lists the configured navigation links:
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

use crate::{
    config::SiteConfig,
    log,
    navigation::NavigationList,
    render::ToJsonLd,
    sitemap::{FileStore, FsStore, SitemapCodec, create_parent_dirs},
};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

// ============================================================================
// Public API
// ============================================================================

/// Write the navigation sitemap to `output` or `[sitemap.path]`.
///
/// Returns the written path, or `None` when the sitemap is disabled and no
/// explicit output was given.
pub fn build_sitemap(config: &SiteConfig, output: Option<&Path>) -> Result<Option<PathBuf>> {
    build_sitemap_with(&SitemapCodec::new(FsStore), config, output)
}

/// Decode the sitemap at `path` and render it as ItemList JSON-LD.
pub fn read_sitemap(path: &Path) -> Result<String> {
    let list = NavigationList::from_sitemap_file(path)
        .with_context(|| format!("Failed to read sitemap {}", path.display()))?;

    log!("sitemap"; "{} urls in {}", list.len(), path.display());
    Ok(list.to_json_ld()?)
}

// ============================================================================
// Helper Functions
// ============================================================================

fn build_sitemap_with<S: FileStore>(
    codec: &SitemapCodec<S>,
    config: &SiteConfig,
    output: Option<&Path>,
) -> Result<Option<PathBuf>> {
    let path = match output {
        Some(path) => path.to_path_buf(),
        None if config.sitemap.enable => config.sitemap.path.clone(),
        None => {
            log!("sitemap"; "disabled in config, skipping");
            return Ok(None);
        }
    };

    let list = config.navigation_list();
    if list.is_empty() {
        log!("sitemap"; "no navigation links configured");
    }

    create_parent_dirs(&path)
        .with_context(|| format!("Failed to create directory for {}", path.display()))?;
    codec
        .to_sitemap_file(&list, &path)
        .with_context(|| format!("Failed to write sitemap to {}", path.display()))?;

    log!("sitemap"; "{} urls -> {}", list.len(), path.display());
    Ok(Some(path))
}

// ============================================================================
// Tests
// ============================================================================
