use anyhow::Context;
use sqlx::postgres::PgPoolOptions;

mod app;
mod cards;
mod config;
mod error;
mod extract;
mod openapi;
mod password;
mod state;
#[cfg(test)]
mod testing;
mod users;

use crate::config::AppConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "cardboard=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = AppConfig::from_env()?;

    let db = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await
        .context("connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&db)
        .await
        .context("run migrations")?;

    let addr = config.bind_addr();
    let app = app::build_app(AppState::from_pool(db.clone()));
    let served = app::serve(app, &addr).await;

    db.close().await;
    tracing::info!("database pool closed");
    served
}
