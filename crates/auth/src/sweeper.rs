use crate::session::SessionRegistry;
use chrono::Utc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Start a background task that sweeps expired sessions every `period`.
///
/// One task does every sweep, so two sweeps never run at once; a tick that
/// comes due while a sweep is still running is skipped. Abort the returned
/// handle to stop it.
pub fn spawn_sweeper(registry: SessionRegistry, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        // The first tick fires immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let removed = registry.sweep(Utc::now()).await;
            if removed > 0 {
                let active = registry.len().await;
                tracing::debug!(
                    active = active,
                    "Session sweep: removed {} expired sessions",
                    removed
                );
            }
        }
    })
}
