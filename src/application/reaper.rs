//! Background task that physically removes expired links.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::time::MissedTickBehavior;

use crate::domain::repositories::{AliasStore, TagIndex};

/// Runs the expiry reaper on a fixed interval.
///
/// Each sweep lists records whose expiry has passed and deletes them one
/// by one, dropping their tags alongside. Reaping is best-effort and
/// idempotent: a code deleted by a foreground request in the meantime is
/// simply skipped, and a failed sweep is retried on the next tick.
/// Foreground resolution never waits on the reaper.
pub async fn run_reaper(store: Arc<dyn AliasStore>, tags: Arc<dyn TagIndex>, period: Duration) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        let codes = match store.list_expired_before(Utc::now()).await {
            Ok(codes) => codes,
            Err(e) => {
                tracing::warn!(error = %e, "reaper failed to list expired links");
                continue;
            }
        };

        let mut reaped = 0usize;
        for code in codes {
            match store.delete(&code).await {
                Ok(true) => {
                    if let Err(e) = tags.remove_all(&code).await {
                        tracing::warn!(error = %e, code, "failed to drop tags of reaped link");
                    }
                    reaped += 1;
                }
                // Already gone, someone else deleted it first.
                Ok(false) => {}
                Err(e) => {
                    tracing::warn!(error = %e, code, "failed to reap expired link");
                }
            }
        }

        if reaped > 0 {
            tracing::debug!(reaped, "reaped expired links");
        }
    }
}
