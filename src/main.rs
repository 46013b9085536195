mod config;
mod routes;

use std::process::ExitCode;

use leptos::prelude::get_configuration;
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, HostConfig};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "medsupply host failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let host = HostConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| StartupError::Leptos(e.to_string()))?;
    let mut leptos_options = conf.leptos_options;
    if let Some(site_root) = &host.site_root {
        leptos_options.site_root = site_root.to_string_lossy().into_owned().into();
    }

    let addr = host.socket_addr();
    let app = routes::app(leptos_options);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "medsupply listening");
    axum::serve(listener, app).await?;
    Ok(())
}
