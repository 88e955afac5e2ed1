use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use otimiza_api::{app, cors_layer, AppState};
use otimiza_catalog::Catalog;
use otimiza_core::CalculationRepository;
use otimiza_store::{app_config::Config, DbClient, InMemoryCalculationRepository, PostgresCalculationRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "otimiza_api=debug,otimiza_core=debug,otimiza_store=debug,tower_http=debug,axum::rejection=trace".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting OtimizaVenda API on port {}", config.server.port);

    let db = DbClient::from_config(&config.database)
        .await
        .context("Failed to connect to database")?;

    let repo: Arc<dyn CalculationRepository> = match &db {
        Some(db) => {
            tracing::info!("Calculation history stored in Postgres");
            Arc::new(PostgresCalculationRepository::new(db.pool.clone()))
        }
        None => {
            tracing::warn!("No database URL configured, calculation history kept in memory");
            Arc::new(InMemoryCalculationRepository::new())
        }
    };

    let cors = cors_layer(&config.server.cors_origins).context("Invalid CORS origin")?;
    let app = app(AppState::new(repo, Catalog::seeded()), cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    if let Some(db) = db {
        db.close().await;
    }
    tracing::info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
