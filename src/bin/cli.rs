//! Billedy CLI
//!
//! Command-line interface for Billedy operations:
//! - Upload entity images
//! - Delete images by URL or public id
//! - Check server status
//! - Generate a config file

use anyhow::{bail, Context};
use billedy::api::dto::{
    DeleteImageRequest, DeleteImageResponse, UploadImageRequest, UploadImageResponse,
};
use billedy::assets::{encode_data_url, mime_for_path};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "billedy-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Manage Billedy entity images from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:8082", global = true)]
    pub api_url: String,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upload an image file
    Upload {
        /// Path to the image
        path: PathBuf,
        /// Folder under billedy/ (default: entities)
        #[arg(short = 'F', long)]
        folder: Option<String>,
    },

    /// Delete an uploaded image
    Delete {
        /// Image URL as returned by upload
        url: Option<String>,
        /// Stored public id (preferred over the URL)
        #[arg(long)]
        public_id: Option<String>,
    },

    /// Show server status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let api_url = cli.api_url.trim_end_matches('/');

    match cli.command {
        Commands::Upload { path, folder } => {
            let mime = mime_for_path(&path)
                .with_context(|| format!("Unsupported image type: {}", path.display()))?;
            let bytes = std::fs::read(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;

            let body = UploadImageRequest {
                data: encode_data_url(mime, &bytes),
                folder,
            };

            let response = client
                .post(format!("{}/api/v1/images", api_url))
                .json(&body)
                .send()
                .await
                .with_context(|| format!("Cannot connect to Billedy API at {}", api_url))?;

            if !response.status().is_success() {
                let status = response.status();
                let text = response.text().await.unwrap_or_default();
                bail!("Upload failed ({}): {}", status, text);
            }

            let image: UploadImageResponse = response.json().await?;
            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&image)?);
            } else {
                println!("Uploaded {}", path.display());
                println!("  URL:       {}", image.url);
                println!("  Public id: {}", image.public_id);
            }
        }

        Commands::Delete { url, public_id } => {
            if url.is_none() && public_id.is_none() {
                bail!("Pass an image URL or --public-id");
            }

            let body = DeleteImageRequest { url, public_id };
            let response = client
                .delete(format!("{}/api/v1/images", api_url))
                .json(&body)
                .send()
                .await
                .with_context(|| format!("Cannot connect to Billedy API at {}", api_url))?;

            if !response.status().is_success() {
                let status = response.status();
                let text = response.text().await.unwrap_or_default();
                bail!("Delete failed ({}): {}", status, text);
            }

            let deleted: DeleteImageResponse = response.json().await?;
            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&deleted)?);
            } else {
                println!("Delete result: {}", deleted.result);
            }
        }

        Commands::Status => {
            let response = client
                .get(format!("{}/health", api_url))
                .send()
                .await
                .with_context(|| {
                    format!(
                        "Cannot connect to Billedy API at {}\n\nMake sure the server is running:\n  cargo run --bin billedy",
                        api_url
                    )
                })?;

            if !response.status().is_success() {
                bail!("API returned error: {}", response.status());
            }

            let health: serde_json::Value = response.json().await?;
            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&health)?);
                return Ok(());
            }

            println!("Billedy v{}", env!("CARGO_PKG_VERSION"));
            println!();
            println!(
                "API Status:  {}",
                health["status"].as_str().unwrap_or("unknown")
            );
            println!(
                "Asset store: {} ({})",
                health["asset_store"].as_str().unwrap_or("unknown"),
                health["asset_store_status"].as_str().unwrap_or("unknown")
            );
            if let Some(uptime) = health["uptime_seconds"].as_u64() {
                println!("Uptime:      {}", format_duration(uptime));
            }
        }

        Commands::Config { output } => {
            let content = billedy::config::generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Wrote config to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Format seconds as a compact duration (e.g. "2d 3h 4m")
fn format_duration(secs: u64) -> String {
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let minutes = (secs % 3_600) / 60;

    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs % 60)
    } else {
        format!("{}s", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(42), "42s");
        assert_eq!(format_duration(125), "2m 5s");
        assert_eq!(format_duration(3_720), "1h 2m");
        assert_eq!(format_duration(90_061), "1d 1h 1m");
    }

    #[test]
    fn test_cli_parses_upload() {
        let cli = Cli::parse_from(["billedy-cli", "upload", "logo.png", "--folder", "accounts"]);
        match cli.command {
            Commands::Upload { path, folder } => {
                assert_eq!(path, PathBuf::from("logo.png"));
                assert_eq!(folder.as_deref(), Some("accounts"));
            }
            _ => panic!("expected upload"),
        }
    }
}
