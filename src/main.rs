//! Billedy API Server
//!
//! Run with: cargo run --bin billedy
//!
//! # Configuration
//!
//! Settings come from a TOML file (see `billedy-cli config`) with
//! environment overrides:
//! - `BILLEDY_API_HOST` / `BILLEDY_API_PORT`: bind address (default: 0.0.0.0:8082)
//! - `CLOUDINARY_URL`: `cloudinary://<api_key>:<api_secret>@<cloud_name>`
//! - `CLOUDINARY_CLOUD_NAME`, `CLOUDINARY_API_KEY`, `CLOUDINARY_API_SECRET`
//! - `BILLEDY_ASSETS_DRY_RUN`: keep uploads in memory
//! - `RUST_LOG`: Log filter (default: billedy=info,tower_http=debug)

use billedy::api::{serve, ApiConfig, AppState};
use billedy::assets::{AssetStore, CloudinaryClient, MemoryAssetStore};
use billedy::config::{Config, LoggingConfig};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "billedy")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Billedy dashboard API server")]
struct Args {
    /// Config file (default: search the standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Keep uploaded images in memory instead of calling Cloudinary
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if args.dry_run {
        config.cloudinary.dry_run = true;
    }

    init_tracing(&config.logging);

    tracing::info!("Starting Billedy API server v{}", env!("CARGO_PKG_VERSION"));

    let assets: Arc<dyn AssetStore> = if config.cloudinary.dry_run {
        tracing::warn!("Asset dry run enabled: images are kept in memory only");
        Arc::new(MemoryAssetStore::new())
    } else {
        let client_config = config.cloudinary.client_config()?;
        tracing::info!("Cloudinary cloud: {}", client_config.cloud_name);

        let client = CloudinaryClient::new(client_config)?;
        match client.health_check().await {
            Ok(_) => tracing::info!("Cloudinary connection verified"),
            Err(e) => tracing::warn!("Cloudinary not reachable: {} (uploads will fail)", e),
        }
        Arc::new(client)
    };

    let api_config = ApiConfig::from(&config.api);
    let state = AppState::new(assets, api_config.clone());

    tracing::info!("Starting server on {}", api_config.addr());
    serve(state, &api_config).await?;

    tracing::info!("Billedy API server stopped");
    Ok(())
}

/// Initialize tracing from the logging section, letting `RUST_LOG` win
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.filter_directive().into());

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
