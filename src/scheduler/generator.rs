//! Schedule generation: rank the backlog, then allocate crews greedily.
//!
//! # Algorithm
//!
//! 1. Score every job under the chosen preset.
//! 2. Stable-sort by descending score.
//! 3. Offer each job, in that order, to a fresh [`CrewAllocator`].
//! 4. Collect entries and skipped jobs, both in priority order.
//!
//! Entry start dates follow the packing, not the ranking: two crews advance
//! independently, so a later entry can start earlier than a previous one.
//!
//! # Complexity
//! O(n log n + n * c) where n = jobs, c = crews per location.

use jiff::civil::Date;
use jiff::Zoned;
use log::{info, warn};
use std::collections::HashMap;

use super::allocator::{Allocation, CrewAllocator};
use crate::config::SchedulerConfig;
use crate::models::calendar::{is_business_day, next_business_day};
use crate::models::{stage_matches, Assignee, Crew, CrewRoster, Job, ScheduleOutcome, READY_TO_BUILD};
use crate::scoring::{Preset, PriorityScorer};

/// Per-run options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduleOptions {
    /// Weighting preset (default: balanced).
    pub preset: Preset,
    /// Date crews become available. `None` = next business day after today.
    pub start_date: Option<Date>,
}

impl ScheduleOptions {
    /// Creates default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the preset.
    pub fn with_preset(mut self, preset: Preset) -> Self {
        self.preset = preset;
        self
    }

    /// Sets an explicit start date.
    pub fn with_start_date(mut self, start_date: Date) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// The configured start date, or the next business day after today.
    pub fn resolved_start_date(&self) -> Date {
        self.start_date
            .unwrap_or_else(|| next_business_day(Zoned::now().date()))
    }
}

/// Turns a job backlog into a crew-assigned schedule.
///
/// Holds only read-only configuration; each [`generate`](Self::generate)
/// call builds and discards its own allocator, so one generator can serve
/// concurrent runs.
///
/// # Example
///
/// ```
/// use install_schedule::models::{Assignee, Crew, CrewRoster, Job};
/// use install_schedule::scheduler::{ScheduleGenerator, ScheduleOptions};
/// use jiff::civil::date;
///
/// let roster = CrewRoster::new()
///     .with_crew("West", Crew::new("Alpha"))
///     .with_director("West", Assignee::new("u-1", "Dana"));
/// let jobs = vec![Job::new("J1", "West").with_install_days(3.0)];
///
/// let generator = ScheduleGenerator::new(roster);
/// let options = ScheduleOptions::new().with_start_date(date(2024, 6, 10));
/// let outcome = generator.generate(&jobs, &options);
///
/// assert_eq!(outcome.entries[0].end_date, date(2024, 6, 12));
/// assert!(outcome.skipped.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleGenerator {
    roster: CrewRoster,
    schedulable_stages: Vec<String>,
}

impl ScheduleGenerator {
    /// Creates a generator over a roster.
    pub fn new(roster: CrewRoster) -> Self {
        Self {
            roster,
            schedulable_stages: vec![READY_TO_BUILD.to_string()],
        }
    }

    /// Creates a generator from a configuration document.
    pub fn from_config(config: &SchedulerConfig) -> Self {
        Self {
            roster: config.roster(),
            schedulable_stages: config.schedulable_stages.clone(),
        }
    }

    /// Replaces the list of schedulable stages.
    pub fn with_schedulable_stages(mut self, stages: Vec<String>) -> Self {
        self.schedulable_stages = stages;
        self
    }

    /// The roster runs are allocated against.
    pub fn roster(&self) -> &CrewRoster {
        &self.roster
    }

    /// Whether a stage is eligible for crew assignment.
    pub fn is_schedulable(&self, stage: &str) -> bool {
        self.schedulable_stages
            .iter()
            .any(|s| stage_matches(stage, s))
    }

    /// Keeps the jobs whose stage is schedulable.
    pub fn schedulable(&self, jobs: impl IntoIterator<Item = Job>) -> Vec<Job> {
        jobs.into_iter()
            .filter(|job| self.is_schedulable(&job.stage))
            .collect()
    }

    /// Ranks and allocates a backlog.
    ///
    /// Every input job ends up in exactly one of `entries` or `skipped`.
    pub fn generate(&self, jobs: &[Job], options: &ScheduleOptions) -> ScheduleOutcome {
        let requested = options.resolved_start_date();
        if !is_business_day(requested) {
            warn!(
                "Start date {} is not a business day; crews start on the next one",
                requested
            );
        }

        let scorer = PriorityScorer::new(options.preset);
        let mut allocator = CrewAllocator::new(&self.roster, requested);
        let mut outcome = ScheduleOutcome::new();

        for scored in scorer.rank(jobs) {
            match allocator.assign_next(&jobs[scored.index], scored.score) {
                Allocation::Scheduled(entry) => outcome.entries.push(entry),
                Allocation::Skipped(skipped) => outcome.skipped.push(skipped),
            }
        }

        info!(
            "Generated schedule: preset={}, start={}, scheduled={}, skipped={}",
            options.preset,
            allocator.start_date(),
            outcome.entries.len(),
            outcome.skipped.len()
        );
        outcome
    }
}

/// Ranks and allocates a backlog against per-location maps.
pub fn generate(
    jobs: &[Job],
    crews_by_location: &HashMap<String, Vec<Crew>>,
    directors_by_location: &HashMap<String, Assignee>,
    timezones_by_location: &HashMap<String, String>,
    options: &ScheduleOptions,
) -> ScheduleOutcome {
    let roster = CrewRoster::from_maps(
        crews_by_location.clone(),
        directors_by_location.clone(),
        timezones_by_location.clone(),
    );
    ScheduleGenerator::new(roster).generate(jobs, options)
}
