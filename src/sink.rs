//! Persistence sink
//!
//! Durably records each sample as one row in the `fitness_events` table.
//! Startup connection failures are retried forever with a fixed delay; once
//! connected, any insert failure propagates and is fatal to the process.
//!
//! Sink lifecycle: DISCONNECTED -> (retry loop) -> CONNECTED ->
//! (insert per tick) -> CLOSED.

use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use crate::types::Sample;
use sqlx::PgPool;
use std::time::Duration;
use tracing::{info, warn};

/// Fixed delay between connection attempts. Deliberately unbounded with no
/// backoff growth: the database is assumed eventually available.
pub const CONNECT_RETRY_DELAY: Duration = Duration::from_secs(2);

const CREATE_TABLE_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS fitness_events (
        ts TIMESTAMPTZ NOT NULL,
        activity TEXT NOT NULL,
        steps INTEGER NOT NULL,
        heart_rate INTEGER NOT NULL,
        calories DOUBLE PRECISION NOT NULL
    )
"#;

const INSERT_SQL: &str = r#"
    INSERT INTO fitness_events (ts, activity, steps, heart_rate, calories)
    VALUES ($1, $2, $3, $4, $5)
"#;

/// Append-only sink over a Postgres connection pool
pub struct EventSink {
    pool: PgPool,
}

impl EventSink {
    /// Connect to the database, retrying forever with a fixed delay.
    ///
    /// Each failed attempt is logged at WARN; this path is never fatal.
    pub async fn connect_with_retry(config: &GeneratorConfig) -> Self {
        let url = config.database_url();
        loop {
            match PgPool::connect(&url).await {
                Ok(pool) => {
                    info!(
                        host = %config.db_host,
                        port = config.db_port,
                        database = %config.db_name,
                        "connected to database"
                    );
                    return Self { pool };
                }
                Err(e) => {
                    warn!(error = %e, "database not ready yet, retrying in 2s");
                    tokio::time::sleep(CONNECT_RETRY_DELAY).await;
                }
            }
        }
    }

    /// Create the `fitness_events` table if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns a database error when the DDL statement fails.
    pub async fn ensure_schema(&self) -> Result<(), GeneratorError> {
        sqlx::query(CREATE_TABLE_SQL).execute(&self.pool).await?;
        Ok(())
    }

    /// Insert one sample as a single autocommitted row.
    ///
    /// # Errors
    ///
    /// Any insert failure propagates to the caller; the steady-state loop
    /// treats it as fatal.
    pub async fn insert(&self, sample: &Sample) -> Result<(), GeneratorError> {
        sqlx::query(INSERT_SQL)
            .bind(sample.ts)
            .bind(sample.activity.as_str())
            .bind(i32::try_from(sample.steps).unwrap_or(i32::MAX))
            .bind(sample.heart_rate)
            .bind(sample.calories)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Release the connection pool on the shutdown path
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_targets_the_event_table() {
        assert!(INSERT_SQL.contains("INSERT INTO fitness_events"));
        for column in ["ts", "activity", "steps", "heart_rate", "calories"] {
            assert!(INSERT_SQL.contains(column), "missing column {}", column);
            assert!(CREATE_TABLE_SQL.contains(column), "schema missing {}", column);
        }
    }

    #[test]
    fn test_schema_is_idempotent() {
        assert!(CREATE_TABLE_SQL.contains("IF NOT EXISTS"));
    }

    #[test]
    fn test_retry_delay_is_fixed_at_two_seconds() {
        assert_eq!(CONNECT_RETRY_DELAY, Duration::from_secs(2));
    }
}
