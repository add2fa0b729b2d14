//! The single PostgreSQL connection pool shared by every request.
//!
//! Startup opens it once with [`DbPool::new`]. When the database does not
//! answer at that point the service still starts, on a pool made with
//! [`DbPool::new_lazy`]: nothing reopens or replaces the handle afterwards,
//! and each checkout dials the database itself, so requests fail with
//! [`PoolError::Checkout`] until PostgreSQL is reachable.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};

const DEFAULT_MAX_SIZE: u32 = 10;
const DEFAULT_CHECKOUT_TIMEOUT: Duration = Duration::from_secs(30);

/// Failure to open the pool or to hand out a connection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// No connection could be handed to a request.
    #[error("no database connection available: {message}")]
    Checkout { message: String },

    /// The database did not answer when the pool was opened.
    #[error("database unreachable when opening pool: {message}")]
    Build { message: String },
}

impl PoolError {
    /// Checkout failure carrying the driver's message.
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }
}

/// Where the pool connects and how many connections it may hold.
///
/// # Examples
/// ```
/// use staffing::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("postgres://staffing@localhost/staffing").with_max_size(4);
/// # let _ = config;
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    url: String,
    max_size: u32,
    checkout_timeout: Duration,
}

impl PoolConfig {
    /// Pool of up to ten connections to `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_size: DEFAULT_MAX_SIZE,
            checkout_timeout: DEFAULT_CHECKOUT_TIMEOUT,
        }
    }

    /// Cap the number of open connections.
    #[must_use]
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    #[cfg(test)]
    fn with_checkout_timeout(mut self, timeout: Duration) -> Self {
        self.checkout_timeout = timeout;
        self
    }

    fn manager(&self) -> AsyncDieselConnectionManager<AsyncPgConnection> {
        AsyncDieselConnectionManager::new(&self.url)
    }
}

/// Cloneable handle to the process-wide pool.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncPgConnection>,
}

impl DbPool {
    /// Open the pool and wait for one live connection.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Build`] when no connection is established within
    /// the checkout timeout.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let inner = Pool::builder()
            .max_size(config.max_size)
            .min_idle(Some(1))
            .connection_timeout(config.checkout_timeout)
            .build(config.manager())
            .await
            .map_err(|err| PoolError::Build {
                message: err.to_string(),
            })?;
        Ok(Self { inner })
    }

    /// Create the pool without touching the database.
    ///
    /// No idle connections are kept, so an unreachable database costs one
    /// failed dial per checkout and nothing in the background.
    pub fn new_lazy(config: PoolConfig) -> Self {
        let inner = Pool::builder()
            .max_size(config.max_size)
            .min_idle(None)
            .connection_timeout(config.checkout_timeout)
            .build_unchecked(config.manager());
        Self { inner }
    }

    /// Borrow a connection for one repository call.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Checkout`] when no connection is available within
    /// the checkout timeout.
    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.inner
            .get()
            .await
            .map_err(|err| PoolError::checkout(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    // Port 1 refuses connections immediately.
    const UNREACHABLE: &str = "postgres://staffing@127.0.0.1:1/staffing";

    #[fixture]
    fn unreachable() -> PoolConfig {
        PoolConfig::new(UNREACHABLE).with_checkout_timeout(Duration::from_millis(200))
    }

    #[rstest]
    #[tokio::test]
    async fn startup_open_fails_when_database_is_down(unreachable: PoolConfig) {
        let err = DbPool::new(unreachable).await.err().expect("open should fail");

        assert!(matches!(err, PoolError::Build { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn fallback_pool_holds_no_connections(unreachable: PoolConfig) {
        let pool = DbPool::new_lazy(unreachable);

        assert_eq!(pool.inner.state().connections, 0);
    }

    #[rstest]
    #[tokio::test]
    async fn fallback_pool_keeps_failing_checkouts_on_the_same_handle(unreachable: PoolConfig) {
        let pool = DbPool::new_lazy(unreachable);
        let shared = pool.clone();

        for handle in [&pool, &shared] {
            let err = handle.get().await.err().expect("checkout should fail");
            assert!(matches!(err, PoolError::Checkout { .. }));
        }
        assert_eq!(shared.inner.state().connections, 0);
    }

    #[rstest]
    fn config_defaults_to_ten_connections() {
        let config = PoolConfig::new(UNREACHABLE);

        assert_eq!(config.max_size, DEFAULT_MAX_SIZE);
        assert_eq!(config.with_max_size(3).max_size, 3);
    }
}
