//! wilaya-site - Main Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wilaya_page::{Catalog, PageConfig};
use wilaya_site::{Cli, Command, RunOptions, run_page};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout carries the page, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)))
        .with_writer(std::io::stderr)
        .init();

    let catalog = Catalog::algeria();
    match cli.command {
        Some(Command::List { query }) => {
            let matches = catalog.filter(&query);
            println!("{}", serde_json::to_string_pretty(&matches)?);
        }
        Some(Command::Lookup { name }) => {
            let wilaya = catalog
                .find_by_name(&name)
                .with_context(|| format!("wilaya '{name}' not found"))?;
            println!("{}", wilaya.ranking_path());
        }
        None => {
            let config = match &cli.config {
                Some(path) => PageConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
                None => PageConfig::default(),
            };
            let options = RunOptions {
                query: cli.query,
                scroll: cli.scroll,
                click: cli.click,
                realtime: cli.realtime,
                date: cli.date,
            };
            tracing::info!("Starting wilaya rankings page...");
            let doc = run_page(config, &options)?;
            println!("{}", doc.to_html(cli.pretty));
        }
    }

    Ok(())
}
