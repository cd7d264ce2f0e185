//! HTTP server command
//!
//! Connects the pool, wraps it in a `PgUserStore` and runs the server until
//! Ctrl+C or SIGTERM.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use usercrud_server::db::{create_pool_with_options, PgUserStore, DEFAULT_MAX_CONNECTIONS};
use usercrud_server::http::{run_server, ServerConfig};

/// Connection string used when neither flag nor environment provides one
pub const DEFAULT_DATABASE_URL: &str = "postgres://postgres@127.0.0.1:5432/go_crud_api";

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "USERCRUD_BIND", default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Deadline for each database call, in seconds
    #[arg(long, default_value_t = 30)]
    pub query_timeout_secs: u64,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!(
        max_connections = args.max_connections,
        "Connecting to database"
    );

    let pool = create_pool_with_options(&args.database_url, args.max_connections)
        .await
        .context("Failed to create database pool")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        query_timeout: Duration::from_secs(args.query_timeout_secs),
    };

    // Run server (blocks until shutdown)
    run_server(Arc::new(PgUserStore::new(pool)), config)
        .await
        .context("Server error")?;

    Ok(())
}
