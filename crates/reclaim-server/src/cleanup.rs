use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::info;

use reclaim_store::Store;

/// Background task that prunes stale claimed items.
///
/// Runs on an interval and calls the store's sweep with the current clock;
/// the sweep itself is pure with respect to time, so tests drive it directly
/// with a simulated `now`.
pub async fn run_sweep_loop(store: Arc<Store>, interval_secs: u64, retention: chrono::Duration) {
    let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));

    loop {
        interval.tick().await;

        let removed = store.sweep_expired_claims(Utc::now(), retention);
        if removed > 0 {
            info!("Sweep: removed {} stale claimed item(s)", removed);
        }
    }
}
