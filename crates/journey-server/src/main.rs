use anyhow::Result;
use journey_server::{app, AppState, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "journey_server=debug,journey_core=info,tower_http=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    let state = AppState::from_config(&config);

    let report = state.service.health();
    if report.healthy {
        tracing::info!("   Data root: {}", config.data_dir.display());
    } else {
        tracing::warn!(
            "   Data root {} is incomplete; affected endpoints will fail until it is populated",
            config.data_dir.display()
        );
    }
    tracing::info!("   Cache freshness window: {}s", config.cache_ttl.as_secs());

    let addr = config.bind_addr();
    tracing::info!("Journey API starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
