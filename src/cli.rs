//! Command-line interface definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SEO metadata and navigation sitemap toolkit
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Config file name, relative to root
    #[arg(short = 'C', long, default_value = "teseo.toml")]
    pub config: PathBuf,

    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write the sitemap for the configured navigation
    Sitemap {
        /// Output path, overrides [sitemap.path]
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decode a sitemap file and print it as ItemList JSON-LD
    Read {
        /// Sitemap file to read
        path: PathBuf,
    },

    /// Print BreadcrumbList JSON-LD derived from a URL
    Breadcrumb {
        /// Absolute page URL
        url: String,
    },

    /// Print OpenGraph, Twitter card and JSON-LD head markup for the site
    Head,
}
