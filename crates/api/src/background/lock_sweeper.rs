//! Periodic hygiene for lapsed seat locks.
//!
//! Capacity accounting never depends on this task: counting queries filter
//! on status AND expiry, so an abandoned lock stops holding seats the
//! moment its `expires_at` passes. This loop only keeps the table tidy —
//! labelling lapsed rows as expired and purging old terminal rows.

use std::time::Duration;

use chrono::Utc;
use sqlx::PgPool;
use tokio_util::sync::CancellationToken;

use seatwise_db::repositories::SeatLockRepo;

/// Default retention for terminal lock rows: 7 days.
const DEFAULT_RETENTION_DAYS: i64 = 7;

/// How often the sweep runs.
const SWEEP_INTERVAL: Duration = Duration::from_secs(300); // 5 minutes

/// Run the seat-lock sweep loop.
///
/// Flips lapsed Active rows to Expired and deletes terminal rows older
/// than `retention_days` (defaults to 7, override via
/// `LOCK_RETENTION_DAYS`). Runs until `cancel` is triggered.
pub async fn run(pool: PgPool, cancel: CancellationToken) {
    let retention_days: i64 = std::env::var("LOCK_RETENTION_DAYS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_RETENTION_DAYS);

    tracing::info!(
        retention_days,
        interval_secs = SWEEP_INTERVAL.as_secs(),
        "Seat lock sweeper started"
    );

    let mut interval = tokio::time::interval(SWEEP_INTERVAL);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Seat lock sweeper stopping");
                break;
            }
            _ = interval.tick() => {
                match SeatLockRepo::sweep_expired(&pool).await {
                    Ok(flipped) if flipped > 0 => {
                        tracing::info!(flipped, "Seat lock sweep: labelled lapsed locks");
                    }
                    Ok(_) => {
                        tracing::debug!("Seat lock sweep: nothing lapsed");
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Seat lock sweep failed");
                    }
                }

                let cutoff = Utc::now() - chrono::Duration::days(retention_days);
                match SeatLockRepo::purge_terminal_older_than(&pool, cutoff).await {
                    Ok(purged) if purged > 0 => {
                        tracing::info!(purged, "Seat lock sweep: purged old terminal rows");
                    }
                    Ok(_) => {}
                    Err(e) => {
                        tracing::error!(error = %e, "Seat lock purge failed");
                    }
                }
            }
        }
    }
}
