use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gened_catalog::{
    CatalogSession, CatalogSource, FileCatalogSource, HttpCatalogSource, HttpSourceConfig,
};

/// Dev harness: loads the catalog, optionally restores a URL fragment passed
/// as the first argument, and prints the resulting page as JSON.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "gened_catalog=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let source: Arc<dyn CatalogSource> = match std::env::var("GENED_DATA_DIR") {
        Ok(dir) => Arc::new(FileCatalogSource::new(dir)),
        Err(_) => Arc::new(HttpCatalogSource::new(HttpSourceConfig::new_from_env()?)?),
    };

    let page_size = std::env::var("GENED_PAGE_SIZE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(10);

    let mut session = CatalogSession::new(source, page_size);

    // Restoring before load exercises the parked-request replay path, the
    // same way a browser restores the fragment before data arrives.
    if let Some(fragment) = std::env::args().nth(1) {
        session.restore_fragment(&fragment);
    }

    session.load().await?;

    if let Some(view) = session.current_view() {
        info!(
            "Page {}/{} ({} matching courses), fragment: {:?}",
            view.page,
            view.total_pages,
            view.total_items,
            session.fragment()
        );
        println!("{}", serde_json::to_string_pretty(&view)?);
    }

    Ok(())
}
