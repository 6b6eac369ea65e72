use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::{info, instrument, warn};

use crate::application::ports::RepositoryError;

#[instrument(skip(url))]
pub async fn create_pool(url: &str, max_connections: u32) -> Result<SqlitePool, RepositoryError> {
    let options = SqliteConnectOptions::from_str(url)
        .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?
        .create_if_missing(true);

    // An in-memory database lives and dies with its connection.
    let pool_options = if is_in_memory(url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections)
    };

    let mut retries = 5;
    let mut delay = Duration::from_millis(500);

    loop {
        match pool_options.clone().connect_with(options.clone()).await {
            Ok(pool) => {
                info!("SQLite connection pool established");
                return Ok(pool);
            }
            Err(e) if retries > 0 => {
                retries -= 1;
                warn!(
                    error = %e,
                    retries_left = retries,
                    delay_ms = delay.as_millis(),
                    "SQLite connection failed, retrying"
                );
                tokio::time::sleep(delay).await;
                delay *= 2;
            }
            Err(e) => {
                return Err(RepositoryError::ConnectionFailed(e.to_string()));
            }
        }
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
