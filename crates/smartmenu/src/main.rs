mod app;
mod config;
mod handlers;
mod state;
mod storage;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use smartmenu_core::storage::CatalogRepository;

use crate::{app::create_app, config::Config, state::AppState, storage::InMemoryRepository};

/// Storage backend serving the catalog.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum StorageBackend {
    /// DynamoDB single table (see `DYNAMODB_TABLE_NAME`)
    Dynamodb,
    /// In-memory store pre-loaded with the demo catalog
    Memory,
}

/// SmartMenu - Digital menu catalog API for restaurant branches
#[derive(Parser, Debug)]
#[command(name = "smartmenu")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3000", env = "PORT")]
    port: u16,

    /// Storage backend
    #[arg(long, value_enum, default_value_t = StorageBackend::Dynamodb, env = "STORAGE")]
    storage: StorageBackend,

    /// Country code of the demo catalog (memory storage only)
    #[arg(long, default_value = "US", env = "DEMO_COUNTRY_CODE")]
    demo_country_code: String,

    /// Branch id of the demo catalog (memory storage only)
    #[arg(long, default_value = "01FHZXHK8PTP9FVK99Z66GXQTX", env = "DEMO_BRANCH_ID")]
    demo_branch_id: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "smartmenu=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // The store client is built once and shared by every request.
    let catalog = build_repository(&cli).await?;
    let app = create_app(AppState::new(catalog));

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn build_repository(cli: &Cli) -> Result<Arc<dyn CatalogRepository>> {
    match cli.storage {
        StorageBackend::Memory => {
            tracing::info!(
                country_code = %cli.demo_country_code,
                branch_id = %cli.demo_branch_id,
                "Using in-memory storage with demo catalog"
            );
            Ok(Arc::new(InMemoryRepository::with_demo_data(
                &cli.demo_country_code,
                &cli.demo_branch_id,
            )))
        }
        StorageBackend::Dynamodb => build_dynamodb_repository(Config::from_env()).await,
    }
}

#[cfg(feature = "dynamodb")]
async fn build_dynamodb_repository(config: Config) -> Result<Arc<dyn CatalogRepository>> {
    let repository = storage::DynamoDbRepository::from_config(&config).await;
    tracing::info!(
        table = repository.table_name(),
        region = %config.region,
        endpoint = ?config.endpoint_url,
        "Using DynamoDB storage"
    );
    Ok(Arc::new(repository))
}

#[cfg(not(feature = "dynamodb"))]
async fn build_dynamodb_repository(_config: Config) -> Result<Arc<dyn CatalogRepository>> {
    anyhow::bail!("DynamoDB storage requires the `dynamodb` feature; use --storage memory")
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
