mod build;
mod config;
mod extract;
mod parser;
mod records;
mod stats;

use std::path::Path;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "catalog_scraper", about = "Static catalog extractor and product list builder")]
struct Cli {
    /// Site root containing public_html/ and scripts/
    #[arg(long, default_value = ".")]
    root: std::path::PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape product literals out of the catalog pages into scripts/products.json
    Extract,
    /// Generate public_html/js/products.js from scripts/products.json
    Build,
    /// Extract + build in one pipeline
    Run,
    /// Show catalog statistics
    Stats,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract => run_extract(&cli.root),
        Commands::Build => run_build(&cli.root),
        Commands::Run => {
            run_extract(&cli.root)?;
            run_build(&cli.root)
        }
        Commands::Stats => {
            let stats = stats::collect(&config::merged_json_path(&cli.root))?;
            stats::print(&stats);
            Ok(())
        }
    }
}

fn run_extract(root: &Path) -> anyhow::Result<()> {
    let products = extract::extract_catalog(&config::pages_dir(root), config::SOURCE_PAGES)?;
    let out = config::merged_json_path(root);
    extract::write_json(&products, &out)?;
    println!("Extracted {} products to {}", products.len(), out.display());
    Ok(())
}

fn run_build(root: &Path) -> anyhow::Result<()> {
    let raw = build::load_raw(&config::merged_json_path(root))?;
    let catalog = build::build_catalog(&raw);
    let out = config::site_script_path(root);
    build::write_script(&catalog, &out)?;
    println!("Wrote {} products to {}", catalog.len(), out.display());
    Ok(())
}
