//! Greedy crew scheduling and schedule summaries.
//!
//! # Algorithm
//!
//! [`ScheduleGenerator`] ranks the backlog with a
//! [`PriorityScorer`](crate::scoring::PriorityScorer) and feeds it, highest
//! score first, to a [`CrewAllocator`] that books each job on the
//! earliest-free crew of its location. Single pass, no backtracking: the
//! output is a proposal for a human to review, not a global optimum.
//!
//! # Summary
//!
//! [`ScheduleSummary`] reports counts, value, horizon and per-crew load.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies" (list scheduling)

mod allocator;
mod generator;
mod summary;

pub use allocator::{Allocation, CrewAllocator};
pub use generator::{generate, ScheduleGenerator, ScheduleOptions};
pub use summary::{CrewLoad, ScheduleSummary};
