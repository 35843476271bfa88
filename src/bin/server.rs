//! geoquery Server Binary
//!
//! Opens the geo database, binds the listening endpoint, and runs the
//! request/reply loop until killed.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use geoquery::geo::MaxMindProvider;
use geoquery::network::Server;
use geoquery::{Config, LookupService};

/// geoquery Server
#[derive(Parser, Debug)]
#[command(name = "geoquery-server")]
#[command(about = "IP geolocation lookup service")]
#[command(version)]
struct Args {
    /// Path to the GeoIP2/GeoLite2 City database (.mmdb)
    #[arg(short, long, default_value = "./GeoLite2-City.mmdb")]
    db: PathBuf,

    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:5555")]
    listen: String,

    /// Cap on request/reply payload length in bytes
    #[arg(short = 'm', long, default_value = "250")]
    max_message: usize,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,geoquery=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let args = Args::parse();

    tracing::info!("geoquery Server v{}", geoquery::VERSION);
    tracing::info!("Database: {}", args.db.display());
    tracing::info!("Listen address: {}", args.listen);

    // Build config from args
    let config = Config::builder()
        .db_path(&args.db)
        .listen_addr(&args.listen)
        .max_message(args.max_message)
        .build();

    // Open the geo database; failure here is fatal, before the loop starts
    let provider = match MaxMindProvider::open(&config.db_path) {
        Ok(p) => Arc::new(p),
        Err(e) => {
            tracing::error!("Failed to open geo database: {}", e);
            std::process::exit(1);
        }
    };

    let service = Arc::new(LookupService::new(config.clone(), provider));

    // Bind and serve; bind failure is equally fatal
    let server = match Server::bind(config, service) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to bind: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
