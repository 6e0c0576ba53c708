use clap::Parser;
use std::sync::Arc;

use loghub_server::analytics::AnalyticsClient;
use loghub_server::api::create_router;
use loghub_server::config::{AppConfig, Credentials};
use loghub_server::state::AppState;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = AppConfig::load(&args.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.logging.level.clone())),
        )
        .init();

    tracing::info!("Starting LogHub gateway with config: {}", args.config);

    // 凭证只从环境变量注入，缺失时直接拒绝启动
    let credentials = Credentials::from_env()?;
    let analytics = Arc::new(AnalyticsClient::new(
        config.analytics.base_url.clone(),
        credentials,
    ));
    let state = AppState::new(analytics);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("LogHub gateway listening on {}", addr);

    axum::serve(listener, create_router(state)).await?;

    Ok(())
}
