use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use ecotravel::{EcoTravelConfig, TravelCatalog, web};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ecotravel=info")),
        )
        .init();

    let config = EcoTravelConfig::load()?;
    let catalog = Arc::new(TravelCatalog::demo());

    web::run(&config, catalog).await
}
