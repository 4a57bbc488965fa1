use std::env;
use std::process::ExitCode;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use digestor::{create_router, AppState, Config};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    init_tracing();

    // Refuse to start without a usable backend configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.worker_threads)
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to start async runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(serve(config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Server terminated: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "digestor=debug,tower_http=debug,axum::rejection=trace".into());

    let json = env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .init();
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    tracing::info!("Starting Digestor summary service");
    tracing::info!("Max file size: {}MB", config.max_file_size_mb);
    tracing::info!("Max concurrent requests: {}", config.max_concurrent_requests);
    tracing::info!("Model: {}", config.google.model);

    let addr = format!("{}:{}", config.server_host, config.server_port);

    let state = AppState::from_config(config)?;
    let app = create_router(state);

    tracing::info!("Server listening on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
