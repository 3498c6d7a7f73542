//! Backend entry-point: reads configuration, prepares the database and serves
//! the purchases REST API.

mod server;

use std::net::SocketAddr;

use actix_web::web;
use color_eyre::eyre::WrapErr;
use mockable::DefaultEnv;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use purchases::config::AppConfig;
use purchases::inbound::http::health::HealthState;
use purchases::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use server::{ServerConfig, create_server};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing();

    let config = AppConfig::from_env(&DefaultEnv::new()).wrap_err("invalid configuration")?;
    let database_url = config.database.database_url()?;

    run_pending_migrations(&database_url)
        .await
        .wrap_err("database migrations failed")?;

    let pool = DbPool::new(
        PoolConfig::new(database_url).with_max_size(config.database.pool_max_size),
    )
    .await
    .wrap_err("database pool setup failed")?;

    let health_state = web::Data::new(HealthState::new());
    let bind_addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let server = create_server(health_state.clone(), ServerConfig::new(bind_addr, pool))
        .wrap_err_with(|| format!("failed to bind {bind_addr}"))?;

    server.await?;
    health_state.mark_unhealthy();
    info!("server stopped");
    Ok(())
}
