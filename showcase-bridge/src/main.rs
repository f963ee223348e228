use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use showcase_bridge::html::render_page;
use showcase_bridge::{App, Message, update, view};
use showcase_core::ShowcaseConfig;
use showcase_core::loader::{load_catalog, source_for};

/// Render the sample catalog to a static page.
#[derive(Debug, Parser)]
#[command(name = "showcase", version, about)]
struct Cli {
    /// JSON config file; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Catalog location: a file path or an http(s) URL.
    #[arg(long)]
    data: Option<String>,

    /// Asset directory prefix for badges and screenshots.
    #[arg(long)]
    assets: Option<String>,

    /// Write the page here instead of stdout.
    #[arg(long, short)]
    out: Option<PathBuf>,

    /// Preselect a framework filter button.
    #[arg(long)]
    framework: Option<String>,

    /// Preselect a version filter button (`--version` is taken by clap).
    #[arg(long = "platform")]
    platform: Option<String>,

    /// Prefill the search box.
    #[arg(long)]
    search: Option<String>,

    /// Page title.
    #[arg(long, default_value = "Samples")]
    title: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ShowcaseConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ShowcaseConfig::default(),
    };
    if let Some(data) = cli.data {
        config.data = data;
    }
    if let Some(assets) = cli.assets {
        config.assets_dir = assets;
    }

    let source = source_for(&config);
    let mut app = App::new(config);

    // A failed load is shown on the page, not returned.
    let loaded = load_catalog(source.as_ref()).await;
    update(&mut app, Message::CatalogLoaded(loaded));

    if let Some(framework) = cli.framework {
        update(&mut app, Message::FrameworkSelected(framework));
    }
    if let Some(platform) = cli.platform {
        update(&mut app, Message::VersionSelected(platform));
    }
    if let Some(search) = cli.search {
        update(&mut app, Message::SearchChanged(search));
    }

    let page = render_page(&view(&app), &cli.title);

    match &cli.out {
        Some(path) => {
            std::fs::write(path, page)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => println!("{}", page),
    }

    Ok(())
}
