use anyhow::Context;
use clap::Args;

use crate::auth::JwtAuth;
use crate::config::AppConfig;
use crate::state::AppState;

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    #[arg(long, help = "Port to listen on (overrides PORT)")]
    pub port: Option<u16>,
}

pub async fn handle(args: ServeArgs, config: &AppConfig) -> anyhow::Result<()> {
    let jwt = JwtAuth::new(&config.security.jwt_secret, config.security.jwt_expiry_hours)
        .context("JWT_SECRET must be set")?;
    if config.is_development() && std::env::var("JWT_SECRET").is_err() {
        tracing::warn!("JWT_SECRET not set; using the development default");
    }

    let store = crate::cli::open_store(config).await?;
    let app = crate::server::app(AppState::new(store, jwt), config);

    let port = args.port.unwrap_or(config.api.port);
    let bind_addr = format!("{}:{}", config.api.bind_address, port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Contacts API listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
