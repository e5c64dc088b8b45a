#![allow(clippy::doc_markdown)]
//! `SWPlanet` Server - REST API for the planet catalog.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use swplanet_core::{StorageMode, SwPlanetConfig};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use swplanet_server::{app, AppState};

/// SWPlanet Server - A planet catalog with template filtering
#[derive(Parser, Debug)]
#[command(name = "swplanet-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file
    #[arg(short, long, default_value = "swplanet.toml", env = "SWPLANET_CONFIG")]
    config: PathBuf,

    /// Data directory for persistent storage (overrides config)
    #[arg(short, long, env = "SWPLANET_DATA_DIR")]
    data_dir: Option<String>,

    /// Host address to bind to (overrides config)
    #[arg(long, env = "SWPLANET_HOST")]
    host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(short, long, env = "SWPLANET_PORT")]
    port: Option<u16>,

    /// Keep planets in memory only
    #[arg(long)]
    memory: bool,
}

impl Args {
    fn apply(self, config: &mut SwPlanetConfig) {
        if let Some(data_dir) = self.data_dir {
            config.storage.data_dir = data_dir;
        }
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if self.memory {
            config.storage.storage_mode = StorageMode::Memory;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();
    let mut config = SwPlanetConfig::load_from_path(&args.config)?;
    args.apply(&mut config);
    config.validate()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| format!("{},tower_http=debug", config.logging.level)),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting SWPlanet server...");
    tracing::info!(
        storage_mode = ?config.storage.storage_mode,
        data_dir = %config.storage.data_dir,
        "Storage configured"
    );

    let state = Arc::new(AppState::from_config(&config)?);

    let mut router = app(state).layer(TraceLayer::new_for_http());
    if config.server.cors_enabled {
        router = router.layer(CorsLayer::permissive());
    }

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("SWPlanet server listening on http://{}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
