mod auth;
mod config;
mod errors;
mod extractors;
mod repositories;
mod routes;
mod services;
mod state;
mod structs;

use std::sync::Arc;

use anyhow::Context;
use config::Config;
use repositories::{MemoryStore, PgStore, Store};
use state::AppState;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shift_leave_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    let store = connect_store(&config).await?;
    let app = routes::app(AppState::new(store, &config.jwt_secret), &config);

    // run it with hyper
    let listener = TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr()))?;
    tracing::debug!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn connect_store(config: &Config) -> anyhow::Result<Arc<dyn Store>> {
    let Some(db_uri) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL 未設定, 使用 in-memory store");
        return Ok(Arc::new(MemoryStore::new()));
    };

    let store = PgStore::connect(db_uri, config.database_max_connections)
        .await
        .context("can't connect to database")?;
    store
        .ensure_schema()
        .await
        .context("failed to create tables")?;
    tracing::info!("connected to postgres");

    Ok(Arc::new(store))
}

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
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutting down");
}
