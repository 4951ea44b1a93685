//! userapi - HTTP user service entry point
//!
//! Startup order: load .env, init tracing, read config, connect the
//! pool, run migrations, serve until a shutdown signal arrives.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use userapi_server::config::ServerConfig;
use userapi_server::db;
use userapi_server::http::server::run_server;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional; real environments set variables directly
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = ServerConfig::from_env().context("invalid server configuration")?;

    let pool = db::create_pool(&config.database_url)
        .await
        .context("failed to connect to database")?;
    db::migrations::run(&pool).await.context("migrations failed")?;

    run_server(pool, config).await.context("server error")?;

    Ok(())
}
