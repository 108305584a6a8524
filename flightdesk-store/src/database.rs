use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::time::Duration;
use tracing::{info, warn};

use crate::app_config::DatabaseConfig;

#[derive(Clone)]
pub struct DbClient {
    pub pool: Pool<Postgres>,
}

impl DbClient {
    pub async fn new(
        connection_string: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect(connection_string)
            .await?;

        Ok(Self { pool })
    }

    /// Connects and pings the database, retrying a fixed number of times.
    ///
    /// Only used at startup; the last error is returned once attempts run out.
    pub async fn connect_with_retry(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let url = config.connection_url();
        let attempts = config.connect_retries.max(1);
        let delay = Duration::from_secs(config.retry_delay_secs);
        let acquire_timeout = Duration::from_secs(config.acquire_timeout_secs);

        let mut attempt = 1;
        loop {
            match Self::try_connect(&url, config.max_connections, acquire_timeout).await {
                Ok(client) => {
                    info!("Connected to Postgres (attempt {})", attempt);
                    return Ok(client);
                }
                Err(e) if attempt < attempts => {
                    warn!("Database not ready (attempt {}/{}): {}", attempt, attempts, e);
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn try_connect(
        url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, sqlx::Error> {
        let client = Self::new(url, max_connections, acquire_timeout).await?;
        client.ping().await?;
        Ok(client)
    }

    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        info!("Running database migrations...");
        sqlx::migrate!("../migrations")
            .run(&self.pool)
            .await?;
        info!("Migrations completed successfully.");
        Ok(())
    }
}
