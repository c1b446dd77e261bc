use std::net::SocketAddr;
use std::sync::Arc;

use inflation_proxy::utils::{logger, validation::Validate};
use inflation_proxy::{CliConfig, InflationForwarder};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::load();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting inflation-proxy server");
    if config.verbose {
        tracing::debug!(
            host = %config.host,
            port = config.port,
            endpoint = %config.endpoint,
            bearer_auth = config.bearer_auth,
            timeout_secs = config.timeout_secs,
            "CLI config"
        );
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // 金鑰只記錄有無,不記錄內容
    if config.api_key.is_some() {
        tracing::info!("Using API key: Present");
    } else {
        tracing::warn!("Using API key: Missing (unregistered BLS quota applies)");
    }

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    let forwarder = Arc::new(InflationForwarder::new(config)?);
    let app = inflation_proxy::server::router(forwarder);

    tracing::info!("✅ Proxy server running on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
