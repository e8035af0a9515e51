use std::future::Future;
use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::core::config::DatabaseConfig;
use crate::core::error::{AppError, Result};

/// How often, and how patiently, to retry the initial database connection
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &DatabaseConfig) -> Self {
        Self {
            max_attempts: config.connect_retries.max(1),
            delay: config.retry_delay(),
        }
    }

    /// Run `operation` until it succeeds or `max_attempts` is reached.
    ///
    /// Every failure is logged; the last one is returned as `StorageUnavailable`.
    pub async fn run<T, E, F, Fut>(&self, what: &str, mut operation: F) -> Result<T>
    where
        E: std::fmt::Display,
        F: FnMut() -> Fut,
        Fut: Future<Output = std::result::Result<T, E>>,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            match operation().await {
                Ok(value) => {
                    if attempt > 1 {
                        tracing::info!("{} succeeded on attempt {}/{}", what, attempt, max_attempts);
                    }
                    return Ok(value);
                }
                Err(e) if attempt < max_attempts => {
                    tracing::warn!(
                        attempt,
                        max_attempts,
                        error = %e,
                        "{} failed, retrying in {:?}",
                        what,
                        self.delay
                    );
                    tokio::time::sleep(self.delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    tracing::error!(
                        attempt,
                        max_attempts,
                        error = %e,
                        "{} failed, giving up",
                        what
                    );
                    return Err(AppError::StorageUnavailable(format!(
                        "{} failed after {} attempts: {}",
                        what, attempt, e
                    )));
                }
            }
        }
    }
}

/// Create the pool and prove it can run a query, retrying per the configured policy.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    let options = config
        .connect_options()
        .map_err(|e| AppError::StorageUnavailable(format!("Invalid database settings: {}", e)))?;

    tracing::info!(
        "Connecting to database at {} (max_connections={})",
        config.redacted_target(),
        config.max_connections
    );

    RetryPolicy::from_config(config)
        .run("Database connection", move || {
            let options = options.clone();
            async move {
                let pool = PgPoolOptions::new()
                    .max_connections(config.max_connections)
                    .min_connections(config.min_connections)
                    .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
                    .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
                    .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
                    .connect_with(options)
                    .await?;
                sqlx::query("SELECT 1").execute(&pool).await?;
                Ok::<_, sqlx::Error>(pool)
            }
        })
        .await
}

/// Close every pooled connection; waits for checked-out connections to return.
pub async fn close_pool(pool: &PgPool) {
    pool.close().await;
    tracing::info!("Database connection pool closed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            delay: Duration::ZERO,
        }
    }

    #[tokio::test]
    async fn test_retry_succeeds_after_failures() {
        let calls = AtomicU32::new(0);
        let counter = &calls;

        let value = policy(5)
            .run("flaky", move || async move {
                let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
                if n < 3 {
                    Err(format!("attempt {} refused", n))
                } else {
                    Ok(n)
                }
            })
            .await
            .unwrap();

        assert_eq!(value, 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_retry_gives_up_with_storage_unavailable() {
        let calls = AtomicU32::new(0);
        let counter = &calls;

        let err = policy(4)
            .run("always down", move || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err::<(), _>("connection refused")
            })
            .await
            .unwrap_err();

        assert_eq!(calls.load(Ordering::SeqCst), 4);
        match err {
            AppError::StorageUnavailable(msg) => {
                assert!(msg.contains("after 4 attempts"));
                assert!(msg.contains("connection refused"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_zero_attempts_still_tries_once() {
        let calls = AtomicU32::new(0);
        let counter = &calls;

        let _ = policy(0)
            .run("once", move || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err::<(), _>("nope")
            })
            .await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
