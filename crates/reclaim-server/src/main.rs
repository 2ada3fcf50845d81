mod cleanup;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use reclaim_api::{AppState, router};
use reclaim_auth::session::SessionStore;
use reclaim_store::Store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reclaim=debug,tower_http=debug".into()),
        )
        .init();

    // Config
    let host = std::env::var("RECLAIM_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("RECLAIM_PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()?;
    let sweep_interval_secs: u64 = std::env::var("RECLAIM_SWEEP_INTERVAL_SECS")
        .unwrap_or_else(|_| "3600".into())
        .parse()?;
    let seed_demo = std::env::var("RECLAIM_SEED_DEMO")
        .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
        .unwrap_or(true);

    // Shared state: one store and one session table per process
    let store = Arc::new(Store::new());
    if seed_demo {
        store.seed_demo_items();
    }
    let sessions = Arc::new(SessionStore::new());

    // Background sweep for stale claimed items
    tokio::spawn(cleanup::run_sweep_loop(
        store.clone(),
        sweep_interval_secs,
        reclaim_store::default_claim_retention(),
    ));

    let app = router(AppState::new(store, sessions))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Reclaim server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
