//! Priority scoring for the install backlog.
//!
//! A job's score is a weighted sum of independent components plus a flat
//! stage bonus, floored at zero. The weights come from a [`Preset`].
//!
//! # Usage
//!
//! ```
//! use install_schedule::models::Job;
//! use install_schedule::scoring::{Preset, PriorityScorer};
//!
//! let job = Job::new("J1", "West")
//!     .with_amount(80_000.0)
//!     .with_high_priority_program(true)
//!     .with_days_to_install(-5);
//!
//! let scorer = PriorityScorer::new(Preset::Balanced);
//! assert!((scorer.score(&job) - 170.0).abs() < 1e-10);
//! ```
//!
//! # Score Convention
//! **Higher score = higher priority.** Jobs are ranked by descending score
//! with a stable sort, so equal scores keep their input order.

mod components;
mod preset;
mod scorer;

pub use components::{ProgramBonus, Revenue, Urgency};
pub use preset::{Preset, PresetWeights};
pub use scorer::{score, PriorityScorer, ScoredJob, STAGE_BONUS};

use crate::models::Job;
use std::fmt::Debug;

/// One additive term of the priority score.
pub trait ScoreComponent: Send + Sync + Debug {
    /// Component name (e.g. "revenue").
    fn name(&self) -> &'static str;

    /// Unweighted contribution of this component for a job.
    fn evaluate(&self, job: &Job) -> f64;

    /// Weight applied to this component under the given preset.
    fn weight(&self, weights: &PresetWeights) -> f64;

    /// Component description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
