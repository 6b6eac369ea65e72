use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use message_board::application::ports::MessageRepository;
use message_board::application::services::MessageService;
use message_board::infrastructure::observability::init_tracing;
use message_board::infrastructure::persistence::{
    InMemoryMessageRepository, SqliteMessageRepository, create_pool, ensure_schema,
};
use message_board::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("load settings")?;

    init_tracing(&settings.tracing_config(environment), settings.server.port);

    let repository = build_repository(&settings).await?;
    let message_service = Arc::new(MessageService::new(repository));

    if settings.database.seed_default {
        message_service
            .seed_if_empty()
            .await
            .context("seed default message")?;
    }

    let router = create_router(AppState::new(message_service));

    let addr = settings.address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Message board stopped");
    Ok(())
}

async fn build_repository(settings: &Settings) -> anyhow::Result<Arc<dyn MessageRepository>> {
    if settings.uses_in_memory_store() {
        tracing::warn!("Using in-memory message store; data is lost on shutdown");
        return Ok(Arc::new(InMemoryMessageRepository::new()));
    }

    tracing::info!(url = %settings.database.url, "Opening SQLite database");
    let pool = create_pool(&settings.database.url, settings.database.max_connections)
        .await
        .context("connect to sqlite")?;
    ensure_schema(&pool).await.context("create messages table")?;

    Ok(Arc::new(SqliteMessageRepository::new(pool)))
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl-C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => tracing::warn!(error = %e, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("Shutdown signal received, draining connections");
}
