//! Schedule quality summary.
//!
//! Aggregates a [`ScheduleOutcome`] into counts, value and per-crew load.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Horizon | Earliest start to latest end, in business days |
//! | Booked days | Business days a crew is assigned |
//! | Utilization | Booked days / horizon days |
//! | Skipped by reason | Count of manual-scheduling jobs per [`SkipReason`] |

use jiff::civil::Date;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::models::calendar::business_days_inclusive;
use crate::models::{ScheduleOutcome, SkipReason};

/// Workload of one crew within a schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrewLoad {
    pub crew: String,
    pub job_count: usize,
    pub booked_days: u32,
    pub first_start: Date,
    pub last_end: Date,
    /// Fraction of the schedule horizon the crew is booked (0.0..=1.0).
    pub utilization: f64,
}

/// Summary of one scheduling run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSummary {
    pub scheduled_count: usize,
    pub skipped_count: usize,
    /// Total contract value of scheduled jobs.
    pub scheduled_value: f64,
    /// Total contract value waiting on manual scheduling.
    pub skipped_value: f64,
    pub horizon_start: Option<Date>,
    pub horizon_end: Option<Date>,
    /// Business days from horizon start to end, inclusive.
    pub horizon_days: u32,
    /// Per-crew load, sorted by crew name. Crews without work are absent.
    pub crew_loads: Vec<CrewLoad>,
    /// Mean utilization over crews with work.
    pub avg_utilization: f64,
    pub skipped_by_reason: HashMap<SkipReason, usize>,
}

impl ScheduleSummary {
    /// Computes the summary of an outcome.
    pub fn calculate(outcome: &ScheduleOutcome) -> Self {
        let horizon_start = outcome.entries.iter().map(|e| e.start_date).min();
        let horizon_end = outcome.horizon_end();
        let horizon_days = match (horizon_start, horizon_end) {
            (Some(start), Some(end)) => business_days_inclusive(start, end),
            _ => 0,
        };

        let mut loads: BTreeMap<&str, CrewLoad> = BTreeMap::new();
        for entry in &outcome.entries {
            let load = loads.entry(entry.crew.as_str()).or_insert_with(|| CrewLoad {
                crew: entry.crew.clone(),
                job_count: 0,
                booked_days: 0,
                first_start: entry.start_date,
                last_end: entry.end_date,
                utilization: 0.0,
            });
            load.job_count += 1;
            load.booked_days += entry.days;
            load.first_start = load.first_start.min(entry.start_date);
            load.last_end = load.last_end.max(entry.end_date);
        }

        let crew_loads: Vec<CrewLoad> = loads
            .into_values()
            .map(|mut load| {
                if horizon_days > 0 {
                    load.utilization = load.booked_days as f64 / horizon_days as f64;
                }
                load
            })
            .collect();

        let avg_utilization = if crew_loads.is_empty() {
            0.0
        } else {
            crew_loads.iter().map(|l| l.utilization).sum::<f64>() / crew_loads.len() as f64
        };

        let mut skipped_by_reason = HashMap::new();
        for s in &outcome.skipped {
            *skipped_by_reason.entry(s.reason).or_insert(0) += 1;
        }

        Self {
            scheduled_count: outcome.entries.len(),
            skipped_count: outcome.skipped.len(),
            scheduled_value: outcome.entries.iter().map(|e| e.job.amount).sum(),
            skipped_value: outcome.skipped.iter().map(|s| s.job.amount).sum(),
            horizon_start,
            horizon_end,
            horizon_days,
            crew_loads,
            avg_utilization,
            skipped_by_reason,
        }
    }

    /// Load of a single crew.
    pub fn crew_load(&self, crew: &str) -> Option<&CrewLoad> {
        self.crew_loads.iter().find(|l| l.crew == crew)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Assignee, Job, OptimizedEntry, SkippedJob};
    use jiff::civil::date;

    fn entry(job_id: &str, crew: &str, amount: f64, start: Date, end: Date, days: u32) -> OptimizedEntry {
        OptimizedEntry {
            job: Job::new(job_id, "West").with_amount(amount),
            crew: crew.to_string(),
            crew_color: String::new(),
            start_date: start,
            end_date: end,
            days,
            score: 0.0,
            assignee: Assignee::new("u-1", "Dana"),
            timezone: "America/Denver".to_string(),
        }
    }

    fn sample_outcome() -> ScheduleOutcome {
        ScheduleOutcome {
            entries: vec![
                // Alpha: Mon-Wed, then Thu-Fri → fully booked for the week
                entry("J1", "Alpha", 80_000.0, date(2024, 6, 10), date(2024, 6, 12), 3),
                entry("J2", "Alpha", 20_000.0, date(2024, 6, 13), date(2024, 6, 14), 2),
                // Bravo: Monday only
                entry("J3", "Bravo", 10_000.0, date(2024, 6, 10), date(2024, 6, 10), 1),
            ],
            skipped: vec![
                SkippedJob {
                    job: Job::new("J4", "North").with_amount(5_000.0),
                    reason: SkipReason::UnknownLocation,
                    score: 35.0,
                },
                SkippedJob {
                    job: Job::new("J5", "North"),
                    reason: SkipReason::UnknownLocation,
                    score: 30.0,
                },
            ],
        }
    }

    #[test]
    fn test_summary_counts_and_value() {
        let s = ScheduleSummary::calculate(&sample_outcome());
        assert_eq!(s.scheduled_count, 3);
        assert_eq!(s.skipped_count, 2);
        assert!((s.scheduled_value - 110_000.0).abs() < 1e-10);
        assert!((s.skipped_value - 5_000.0).abs() < 1e-10);
        assert_eq!(s.skipped_by_reason[&SkipReason::UnknownLocation], 2);
    }

    #[test]
    fn test_summary_horizon() {
        let s = ScheduleSummary::calculate(&sample_outcome());
        assert_eq!(s.horizon_start, Some(date(2024, 6, 10)));
        assert_eq!(s.horizon_end, Some(date(2024, 6, 14)));
        assert_eq!(s.horizon_days, 5);
    }

    #[test]
    fn test_summary_crew_loads() {
        let s = ScheduleSummary::calculate(&sample_outcome());
        let names: Vec<&str> = s.crew_loads.iter().map(|l| l.crew.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Bravo"]);

        let alpha = s.crew_load("Alpha").unwrap();
        assert_eq!(alpha.job_count, 2);
        assert_eq!(alpha.booked_days, 5);
        assert_eq!(alpha.last_end, date(2024, 6, 14));
        assert!((alpha.utilization - 1.0).abs() < 1e-10);

        let bravo = s.crew_load("Bravo").unwrap();
        assert!((bravo.utilization - 0.2).abs() < 1e-10);
        assert!((s.avg_utilization - 0.6).abs() < 1e-10);
    }

    #[test]
    fn test_summary_empty() {
        let s = ScheduleSummary::calculate(&ScheduleOutcome::new());
        assert_eq!(s.scheduled_count, 0);
        assert_eq!(s.horizon_days, 0);
        assert!(s.crew_loads.is_empty());
        assert!((s.avg_utilization - 0.0).abs() < 1e-10);
    }
}
