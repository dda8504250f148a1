//! Teseo - SEO metadata and navigation sitemap toolkit.

use anyhow::Result;
use clap::Parser;
use teseo::{
    cli::{Cli, Commands},
    config::SiteConfig,
    generator::{
        head::{render_breadcrumb, render_head},
        sitemap::{build_sitemap, read_sitemap},
    },
    log,
};

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        log!("error"; "{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Sitemap { output } => {
            let config = load_config(cli)?;
            build_sitemap(&config, output.as_deref())?;
        }
        Commands::Read { path } => println!("{}", read_sitemap(path)?),
        Commands::Breadcrumb { url } => println!("{}", render_breadcrumb(url)?),
        Commands::Head => {
            let config = load_config(cli)?;
            println!("{}", render_head(&config)?);
        }
    }
    Ok(())
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let config = SiteConfig::load(cli)?;
    config.validate()?;
    Ok(config)
}
