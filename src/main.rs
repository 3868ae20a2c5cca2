mod config;
mod crud;
mod error;
mod executor;
mod handler;
mod model;
mod route;
mod schema;

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use config::Config;
use crud::MatchRepository;
use executor::MySqlExecutor;
use route::create_router;
use sqlx::mysql;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub struct AppState {
    repo: MatchRepository,
    list_per_page: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // set up connection pool
    let pool = mysql::MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(3))
        .connect(&config.database_url)
        .await
        .context("can't connect to database")?;

    let state = Arc::new(AppState {
        repo: MatchRepository::new(Arc::new(MySqlExecutor::new(pool))),
        list_per_page: config.list_per_page,
    });

    let app = create_router(state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::debug!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
