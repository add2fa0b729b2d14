//! Backend entry-point: loads settings, opens the record store and serves the
//! REST API.

mod server;

use std::ffi::OsString;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server, drain_on_signal};
use staffing::inbound::http::health::HealthState;
use staffing::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use staffing::settings::AppSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            warn!(error = %e, "ignoring unreadable .env file");
        }
    }

    let settings = load_settings(std::env::args_os(), |name| std::env::var(name).ok())?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;

    let mut config = ServerConfig::new(bind_addr);
    match settings.connection_string() {
        Some(url) => {
            config = config.with_db_pool(open_pool(&settings, url).await);
        }
        None => {
            warn!("no connection string configured; keeping records in memory");
        }
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    actix_web::rt::spawn(drain_on_signal(
        health_state.clone(),
        server.handle(),
        async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!(error = %e, "failed to listen for shutdown signal");
                std::future::pending::<()>().await;
            }
        },
    ));
    info!(%bind_addr, "listening");
    health_state.mark_ready();
    server.await
}

/// Load settings from `args` and the `STAFFING_*` environment, then fill
/// gaps from the unprefixed variables read through `lookup`.
fn load_settings(
    args: impl IntoIterator<Item = OsString>,
    lookup: impl Fn(&str) -> Option<String>,
) -> std::io::Result<AppSettings> {
    let settings = AppSettings::load_from_iter(args)
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    Ok(settings.with_unprefixed_fallback(lookup))
}

/// Apply migrations when enabled and open the connection pool.
///
/// An unreachable database is logged and not retried; the pool is then
/// created lazily so requests fail until the database answers.
async fn open_pool(settings: &AppSettings, url: &str) -> DbPool {
    if settings.run_migrations() {
        let migration_url = url.to_owned();
        match tokio::task::spawn_blocking(move || run_pending_migrations(&migration_url)).await {
            Ok(Ok(applied)) => info!(applied, "database migrations complete"),
            Ok(Err(e)) => error!(error = %e, "database migrations failed"),
            Err(e) => error!(error = %e, "migration task aborted"),
        }
    }

    let pool_config = PoolConfig::new(url).with_max_size(settings.pool_max_size());
    match DbPool::new(pool_config.clone()).await {
        Ok(pool) => pool,
        Err(e) => {
            error!(error = %e, "database unreachable; requests will fail until it answers");
            DbPool::new_lazy(pool_config)
        }
    }
}
