use anyhow::Context;
use ld_core::config::DigestConfig;
use ld_server::{app_with_state, state::AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

const CONFIG_ENV: &str = "LOG_DIGEST_CONFIG";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match std::env::var(CONFIG_ENV) {
        Ok(path) => DigestConfig::load(&path).with_context(|| format!("loading config {path}"))?,
        Err(_) => DigestConfig::default(),
    };
    config.validate()?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, root = %config.source.allowed_root.display(), "log digest server listening");

    axum::serve(listener, app_with_state(AppState::new(config))).await?;
    Ok(())
}
