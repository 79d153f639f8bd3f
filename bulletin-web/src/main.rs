//! Binary entry point for the climate bulletin dashboard server.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use bulletin_core::{OpenWeatherGateway, Settings};
use clap::Parser;
use tokio::{net::TcpListener, signal};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use bulletin_web::{routes, state::AppState, view};

#[derive(Debug, Parser)]
#[command(name = "bulletin-web", version, about = "Climate bulletin dashboard server")]
struct Args {
    /// Optional TOML file overriding stations and bind address.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Bind address, overriding the configured one.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bulletin_web=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer().compact())
        .init();

    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        settings.bind_addr = bind;
    }

    info!(
        bind_addr = %settings.bind_addr,
        stations = settings.stations.len(),
        "configuration loaded"
    );

    let gateway = OpenWeatherGateway::new(settings.api_key.clone());
    let templates = view::templates().context("Failed to compile page templates")?;

    let bind_addr = settings.bind_addr.clone();
    let state = AppState {
        settings: Arc::new(settings),
        gateway: Arc::new(gateway),
        templates: Arc::new(templates),
    };

    let app = routes::create_router(state);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {bind_addr}"))?;
    info!("server listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server shutdown complete");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM so axum can drain connections.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received Ctrl+C, shutting down"),
        () = terminate => info!("received SIGTERM, shutting down"),
    }
}
