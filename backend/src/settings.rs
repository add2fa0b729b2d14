//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `STAFFING_*` environment variables or an
//! optional configuration file. CLI flags take precedence over the
//! environment, which takes precedence over the file.
//!
//! Deployments configured with bare `CONNECTION_STRING` and `PORT` variables
//! (typically from a `.env` file) still work: see
//! [`AppSettings::with_unprefixed_fallback`].

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use tracing::warn;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;
const DEFAULT_RUN_MIGRATIONS: bool = true;

/// Unprefixed variable consulted when `connection_string` is unset.
pub const UNPREFIXED_CONNECTION_STRING: &str = "CONNECTION_STRING";
/// Unprefixed variable consulted when `port` is unset.
pub const UNPREFIXED_PORT: &str = "PORT";

/// Failures raised when settings cannot be turned into a listener address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid listener host {host:?}: {message}")]
pub struct BindAddrError {
    host: String,
    message: String,
}

/// Runtime configuration for the staffing service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "STAFFING")]
pub struct AppSettings {
    /// PostgreSQL connection URL. Without one the service keeps records in
    /// memory.
    pub connection_string: Option<String>,
    /// Listener host; defaults to all interfaces.
    pub host: Option<String>,
    /// Listener port.
    pub port: Option<u16>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Apply embedded migrations before serving. Defaults to `true`.
    pub run_migrations: Option<bool>,
}

impl AppSettings {
    /// Return the configured connection string, treating a blank value as
    /// absent.
    pub fn connection_string(&self) -> Option<&str> {
        self.connection_string
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Return the configured port, falling back to the default.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Return the configured pool size, falling back to the default.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    /// Whether embedded migrations run at startup.
    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(DEFAULT_RUN_MIGRATIONS)
    }

    /// Fill `connection_string` and `port` from the unprefixed
    /// `CONNECTION_STRING` and `PORT` variables when the prefixed settings
    /// left them unset. `lookup` reads a variable by name.
    ///
    /// An unparsable `PORT` is logged and ignored.
    #[must_use]
    pub fn with_unprefixed_fallback(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if self.connection_string().is_none() {
            if let Some(url) = lookup(UNPREFIXED_CONNECTION_STRING) {
                self.connection_string = Some(url);
            }
        }
        if self.port.is_none() {
            if let Some(raw) = lookup(UNPREFIXED_PORT) {
                match raw.trim().parse::<u16>() {
                    Ok(port) => self.port = Some(port),
                    Err(err) => warn!(value = %raw, error = %err, "ignoring unparsable PORT"),
                }
            }
        }
        self
    }

    /// Resolve the socket address the server binds to.
    ///
    /// # Errors
    ///
    /// Returns [`BindAddrError`] when `host` is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, BindAddrError> {
        let host = match self.host.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_HOST,
            Some(raw) => raw.parse::<IpAddr>().map_err(|err| BindAddrError {
                host: raw.to_owned(),
                message: err.to_string(),
            })?,
        };
        Ok(SocketAddr::new(host, self.port()))
    }
}
