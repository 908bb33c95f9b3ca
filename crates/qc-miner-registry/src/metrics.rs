//! # Miner Registry Metrics
//!
//! Prometheus metrics for monitoring registry activity.
//!
//! ## Usage
//!
//! Enable with the `metrics` feature:
//! ```toml
//! qc-miner-registry = { path = "...", features = ["metrics"] }
//! ```
//!
//! The `qc-tests` crate enables it, so `cargo test --workspace` builds this
//! module with Prometheus; `cargo test -p qc-miner-registry --features metrics`
//! covers it in isolation.
//!
//! ## Metrics Exported
//!
//! - `miner_registry_joins_total` - Counter of successful joins
//! - `miner_registry_departures_total` - Counter of departures (by path)
//! - `miner_registry_rejections_total` - Counter of rejected operations (by reason)
//! - `miner_registry_members` - Gauge of current membership

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{
    register_int_counter, register_int_counter_vec, register_int_gauge, IntCounter,
    IntCounterVec, IntGauge,
};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Total successful joins
    pub static ref JOINS: IntCounter = register_int_counter!(
        "miner_registry_joins_total",
        "Total number of miners that joined"
    )
    .expect("Failed to create JOINS metric");

    /// Total departures, labeled by path
    pub static ref DEPARTURES: IntCounterVec = register_int_counter_vec!(
        "miner_registry_departures_total",
        "Total number of miners that left the registry",
        &["path"]
    )
    .expect("Failed to create DEPARTURES metric");

    /// Total rejected operations, labeled by reason
    pub static ref REJECTIONS: IntCounterVec = register_int_counter_vec!(
        "miner_registry_rejections_total",
        "Total number of rejected registry operations",
        &["reason"]
    )
    .expect("Failed to create REJECTIONS metric");

    /// Current number of registered miners
    pub static ref MEMBERS: IntGauge = register_int_gauge!(
        "miner_registry_members",
        "Number of currently registered miners"
    )
    .expect("Failed to create MEMBERS metric");
}

/// Record a successful join
#[cfg(feature = "metrics")]
pub fn record_join(member_count: usize) {
    JOINS.inc();
    MEMBERS.set(member_count as i64);
}

/// Record a departure with its path
#[cfg(feature = "metrics")]
pub fn record_departure(path: &str, member_count: usize) {
    DEPARTURES.with_label_values(&[path]).inc();
    MEMBERS.set(member_count as i64);
}

/// Record a rejected operation with reason
#[cfg(feature = "metrics")]
pub fn record_rejection(reason: &str) {
    REJECTIONS.with_label_values(&[reason]).inc();
}

// No-op implementations when metrics feature is disabled
#[cfg(not(feature = "metrics"))]
pub fn record_join(_member_count: usize) {}

#[cfg(not(feature = "metrics"))]
pub fn record_departure(_path: &str, _member_count: usize) {}

#[cfg(not(feature = "metrics"))]
pub fn record_rejection(_reason: &str) {}
