use std::net::SocketAddr;

mod app;
mod auth;
mod config;
mod db;
mod error;
mod movies;
mod orders;
mod state;

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "filmbox=debug,axum=info,tower_http=info".to_string());
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

    let state = AppState::init().await?;

    let addr: SocketAddr = format!("{}:{}", state.config.host, state.config.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", addr);

    // Deferred schema bootstrap: the listener is already bound, so an
    // initialization failure is logged and the process keeps serving.
    // Requests that need the tables will fail at the persistence layer.
    let pool = state.db.clone();
    tokio::spawn(async move {
        if let Err(e) = db::init_schema(&pool).await {
            tracing::error!(error = %e, "schema initialization failed, continuing to serve");
        }
    });

    let app = app::build_app(state);
    axum::serve(listener, app).await?;

    Ok(())
}
