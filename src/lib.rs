//! Crew scheduling for residential solar installations.
//!
//! Ranks a backlog of ready-to-build installation jobs by business priority
//! and greedily assigns each one to the earliest-available crew at its
//! location, producing a dated, business-day-aware proposal for human review.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Job`, `Crew`, `CrewRoster`, `Project`,
//!   `OptimizedEntry`, `ScheduleOutcome`, and the business-day `calendar`
//! - **`scoring`**: Preset-weighted priority scoring (`PriorityScorer`, `Preset`)
//! - **`scheduler`**: Greedy crew allocation (`generate`, `ScheduleGenerator`)
//!   and `ScheduleSummary`
//! - **`analysis`**: Pipeline bottleneck findings and location efficiency
//! - **`config`**: JSON roster configuration (`SchedulerConfig`)
//! - **`validation`**: Roster and job batch integrity checks
//!
//! # Example
//!
//! ```
//! use install_schedule::models::{Assignee, Crew, CrewRoster, Job};
//! use install_schedule::scheduler::{ScheduleGenerator, ScheduleOptions};
//!
//! let roster = CrewRoster::new()
//!     .with_crew("West", Crew::new("West Alpha"))
//!     .with_director("West", Assignee::new("u-1", "Dana"));
//! let jobs = vec![Job::new("J1", "West").with_install_days(2.0)];
//! let options = ScheduleOptions::new().with_start_date(jiff::civil::date(2024, 6, 10));
//!
//! let outcome = ScheduleGenerator::new(roster).generate(&jobs, &options);
//! assert_eq!(outcome.entries[0].end_date, jiff::civil::date(2024, 6, 11));
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"

pub mod analysis;
pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod scoring;
pub mod validation;

pub use config::{LocationConfig, SchedulerConfig};
pub use error::{Result, ScheduleError};
pub use scheduler::{generate, ScheduleGenerator, ScheduleOptions, ScheduleSummary};
pub use scoring::{Preset, PriorityScorer};
