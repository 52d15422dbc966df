mod config;
mod error;
mod ledger;
mod models;
mod notify;
mod routes;
mod slots;

use std::sync::{Arc, Mutex};

use crate::{
    config::Config, ledger::Ledger, models::AppState, notify::LogNotifier, slots::SlotCalendar,
};

use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cfg = Config::from_env()?;

    let mut calendar = SlotCalendar::new(cfg.default_slots.clone());
    for date in &cfg.seed_dates {
        calendar.seed(date);
    }
    tracing::info!(
        slots = ?cfg.default_slots,
        seeded = cfg.seed_dates.len(),
        "slot calendar ready"
    );

    let state = AppState {
        ledger: Arc::new(Mutex::new(Ledger::new(calendar, Arc::new(LogNotifier)))),
    };

    // The browser frontend is served from a different origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    tracing::info!("Listening on http://{}", cfg.bind_addr);
    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
    }
}
