//! Store health probe and pool diagnostics
//!
//! The probe runs `SELECT 1` under a one-second timeout. A failed or
//! timed-out probe is reported as a `down` status; it is never fatal to
//! the process. Restart decisions belong to whatever is watching the
//! health endpoint, not to this layer.

use std::time::Duration;

use serde::Serialize;
use sqlx::PgPool;

/// Upper bound on the connectivity probe.
const PROBE_TIMEOUT: Duration = Duration::from_secs(1);

/// Pool saturation fraction above which the report warns about load.
const SATURATION_WARN: f64 = 0.8;

/// Snapshot of store connectivity and pool usage
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    /// "up" or "down"
    pub status: &'static str,
    /// Human-readable summary or advisory
    pub message: String,
    pub open_connections: u32,
    pub in_use: u32,
    pub idle: u32,
    pub max_connections: u32,
}

impl HealthReport {
    pub fn is_up(&self) -> bool {
        self.status == "up"
    }
}

/// Probe the store and report pool statistics.
pub async fn probe(pool: &PgPool) -> HealthReport {
    let ping = tokio::time::timeout(
        PROBE_TIMEOUT,
        sqlx::query("SELECT 1").execute(pool),
    )
    .await;

    let open = pool.size();
    let idle = pool.num_idle() as u32;
    let in_use = open.saturating_sub(idle);
    let max = pool.options().get_max_connections();

    match ping {
        Ok(Ok(_)) => HealthReport {
            status: "up",
            message: advisory(in_use, max),
            open_connections: open,
            in_use,
            idle,
            max_connections: max,
        },
        Ok(Err(e)) => {
            tracing::error!("db down: {}", e);
            HealthReport {
                status: "down",
                message: format!("db down: {}", e),
                open_connections: open,
                in_use,
                idle,
                max_connections: max,
            }
        }
        Err(_) => {
            tracing::error!("db down: health probe timed out after {:?}", PROBE_TIMEOUT);
            HealthReport {
                status: "down",
                message: "db down: health probe timed out".to_string(),
                open_connections: open,
                in_use,
                idle,
                max_connections: max,
            }
        }
    }
}

/// Derive an advisory message from pool usage.
fn advisory(in_use: u32, max: u32) -> String {
    if max > 0 && f64::from(in_use) / f64::from(max) > SATURATION_WARN {
        "The database is experiencing heavy load.".to_string()
    } else {
        "It's healthy".to_string()
    }
}
