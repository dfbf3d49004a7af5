//! # Billedy
//!
//! Backend for the Billedy personal finance dashboard (accounts, budgets,
//! categories, billing cycles, savings, templates, transactions).
//!
//! ## Features
//!
//! - **Entity images**: upload data URLs to Cloudinary as 128x128 thumbnails
//! - **Safe deletes**: destroy by stored public id, or derive it from the URL
//! - **REST API**: Axum server used by the dashboard's mutation handlers
//!
//! ## Modules
//!
//! - [`assets`]: Image asset client and the [`assets::AssetStore`] seam
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use billedy::assets::{AssetStore, CloudinaryClient, CloudinaryConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CloudinaryClient::new(CloudinaryConfig::new("demo", "key", "secret"))?;
//!
//!     // Upload into billedy/accounts
//!     let image = client
//!         .upload("data:image/png;base64,iVBORw0KGgo=", Some("accounts"))
//!         .await?;
//!     println!("Stored {} at {}", image.public_id, image.url);
//!
//!     // Later, remove it again
//!     client.delete_by_id(&image.public_id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod assets;
pub mod config;

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use assets::{
    AssetError, AssetStore, CloudinaryClient, CloudinaryConfig, DeleteOutcome, ImageRef,
    MemoryAssetStore, Transformation,
};

pub use config::{
    ApiConfig as ConfigApiConfig, CloudinaryConfig as ConfigCloudinaryConfig, Config,
    ConfigError, LoggingConfig,
};
