//! Pipeline diagnostics (reporting only).
//!
//! Aggregates over the full project set, not just schedulable jobs.
//! Nothing here affects scheduling, and nothing here fails: empty input
//! yields empty output.
//!
//! - [`find_bottlenecks`]: stage accumulation, program deadline risk,
//!   blocked backlog.
//! - [`location_efficiency`]: per-location cycle-time/overdue ranking.
//!
//! All checks take an explicit `as_of` date so results never depend on the
//! clock.

mod bottleneck;
mod efficiency;

pub use bottleneck::{find_bottlenecks, BottleneckThresholds, Finding, FindingKind, Severity};
pub use efficiency::{efficiency_score, location_efficiency, LocationEfficiency};
pub use crate::models::Project;
