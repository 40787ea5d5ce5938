//! vehicled - User vehicle lookup daemon
//!
//! Serves plain-text vehicle details per user over REST.
//!
//! Usage:
//!   vehicled [config.toml]
//!
//! If no config file is provided, serves a built-in demo registry.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use serde::Deserialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vehicle_api::{create_router, AppState};
use vehicle_store::config::{StoreConfig, UserEntry, VehicleEntry};
use vehicle_store::StaticVehicleService;

/// Parsed command-line arguments
struct Args {
    /// Server config file (TOML)
    config_path: Option<String>,
}

fn parse_args() -> Args {
    let mut result = Args { config_path: None };

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            arg if !arg.starts_with('-') => {
                // Positional argument = config file
                result.config_path = Some(arg.to_string());
            }
            _ => {
                tracing::warn!("Unknown argument: {}", arg);
            }
        }
    }

    result
}

fn print_help() {
    eprintln!(
        r#"vehicled - User vehicle lookup daemon

Usage: vehicled [OPTIONS] [config.toml]

Options:
  -h, --help    Print this help message

Examples:
  # Run with the built-in demo registry
  vehicled

  # Run with a registry config file
  vehicled config.toml
"#
    );
}

/// Daemon configuration (TOML)
#[derive(Debug, Deserialize)]
struct DaemonConfig {
    /// Address to listen on
    #[serde(default = "default_listen")]
    listen: SocketAddr,
    /// User id -> VIN assignments
    #[serde(default)]
    users: Vec<UserEntry>,
    /// Vehicle records keyed by VIN
    #[serde(default)]
    vehicles: Vec<VehicleEntry>,
}

fn default_listen() -> SocketAddr {
    ([127, 0, 0, 1], 8080).into()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vehicled=info,vehicle_api=info,vehicle_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = parse_args();

    let (listen, service) = match args.config_path {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path))?;
            let config: DaemonConfig = toml::from_str(&raw)
                .with_context(|| format!("Failed to parse config file: {}", path))?;
            let store = StoreConfig {
                users: config.users,
                vehicles: config.vehicles,
            };
            (config.listen, StaticVehicleService::from_config(store)?)
        }
        None => {
            tracing::info!("No config file given, serving the built-in demo registry");
            (default_listen(), StaticVehicleService::demo())
        }
    };

    let state = AppState::new(Arc::new(service));
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .with_context(|| format!("Failed to bind {}", listen))?;
    tracing::info!(%listen, "vehicled listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
