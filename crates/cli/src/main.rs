use std::path::PathBuf;

use anyhow::Context;

use catalog_cli::report;
use catalog_loader::{LoaderConfig, load_from_json_file};

fn main() -> anyhow::Result<()> {
    catalog_observability::init();

    let data_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| LoaderConfig::from_env().data_path);

    tracing::info!(path = %data_path.display(), "loading catalog");
    let categories = load_from_json_file(&data_path)
        .with_context(|| format!("failed to load catalog from {}", data_path.display()))?;

    print!("{}", report::render(&categories, catalog_products::snapshot()));
    Ok(())
}
