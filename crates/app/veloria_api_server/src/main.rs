//! Veloria API server binary.
//!
//! Serves `POST /api/chat/` (also `/api/chat`, `/chat`, `/chat/`) and
//! `GET /api/hello`. Configuration comes from flags, the environment and an
//! optional `.env` file; see `ApiConfig::from_env`.

use clap::Parser;
use tracing::{info, warn};
use veloria_api::AppState;
use veloria_api::config::ApiConfig;

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "veloria_api_server", about = "Veloria health chat API server")]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:8000")]
    bind: String,

    /// Outbound request timeout in seconds (must be at least 1).
    #[arg(
        long,
        env = "VELORIA_TIMEOUT_SECS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,veloria_api=debug,veloria_core=debug,tower_http=info".into()),
        )
        .init();

    let args = Args::parse();

    let mut config = ApiConfig::from_env();
    config.bind_addr = args.bind;
    if let Some(secs) = args.timeout_secs {
        config.completion.timeout = std::time::Duration::from_secs(secs);
    }

    if !config.completion.has_api_key() {
        warn!("HF_API_KEY is not set; model replies will fail with 503");
    }

    info!(
        bind_addr = %config.bind_addr,
        model_url = %config.completion.model_url,
        timeout_secs = config.completion.timeout.as_secs(),
        "starting veloria_api_server"
    );

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;

    let state = AppState::from_config(config)?;
    let app = veloria_api::router(state);

    info!(addr = %local_addr, "REST API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Args;

    #[test]
    fn timeout_flag_is_parsed() {
        let args = Args::try_parse_from(["veloria_api_server", "--timeout-secs", "15"]).unwrap();
        assert_eq!(args.timeout_secs, Some(15));
    }

    #[test]
    fn zero_timeout_flag_is_rejected() {
        let result = Args::try_parse_from(["veloria_api_server", "--timeout-secs", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn bind_flag_is_parsed() {
        let args = Args::try_parse_from(["veloria_api_server", "--bind", "0.0.0.0:9000"]).unwrap();
        assert_eq!(args.bind, "0.0.0.0:9000");
    }
}
