//! Schedule (solution) model.
//!
//! The result of one scheduling run: entries in priority order, and the
//! jobs that could not be placed. Both lists are proposals; nothing here is
//! committed anywhere.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::calendar::BusinessSpan;
use super::{Assignee, Job};

/// A job with its assigned crew and dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedEntry {
    /// The scheduled job.
    pub job: Job,
    /// Assigned crew name.
    pub crew: String,
    /// Assigned crew display color.
    pub crew_color: String,
    /// First install day.
    pub start_date: Date,
    /// Last install day (inclusive).
    pub end_date: Date,
    /// Duration in business days.
    pub days: u32,
    /// Priority score the job was ranked with.
    pub score: f64,
    /// Director responsible for the job's location.
    pub assignee: Assignee,
    /// Display timezone label of the job's location.
    pub timezone: String,
}

impl OptimizedEntry {
    /// Business-day span occupied by this entry.
    pub fn span(&self) -> BusinessSpan {
        BusinessSpan {
            start: self.start_date,
            end: self.end_date,
            days: self.days,
        }
    }

    /// ID of the scheduled job.
    pub fn job_id(&self) -> &str {
        &self.job.id
    }
}

/// Why a job was not scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    /// The job's location has no crew list (or the location is empty).
    UnknownLocation,
    /// The location is configured but has zero crews.
    NoCrews,
    /// The location has no director.
    NoDirector,
    /// The install estimate is not a positive number of days.
    InvalidDuration,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::UnknownLocation => "no crews configured for location",
            SkipReason::NoCrews => "location has an empty crew pool",
            SkipReason::NoDirector => "no director configured for location",
            SkipReason::InvalidDuration => "install duration is not a positive number of days",
        };
        f.write_str(text)
    }
}

/// A job that needs manual scheduling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedJob {
    pub job: Job,
    pub reason: SkipReason,
    /// Score the job was ranked with.
    pub score: f64,
}

/// Entries and skipped jobs produced by one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// Scheduled jobs, highest priority first.
    pub entries: Vec<OptimizedEntry>,
    /// Jobs routed to manual scheduling, in priority order.
    pub skipped: Vec<SkippedJob>,
}

impl ScheduleOutcome {
    /// Creates an empty outcome.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether nothing was scheduled or skipped.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.skipped.is_empty()
    }

    /// Number of jobs accounted for (scheduled + skipped).
    pub fn len(&self) -> usize {
        self.entries.len() + self.skipped.len()
    }

    /// Finds the entry for a job.
    pub fn entry_for_job(&self, job_id: &str) -> Option<&OptimizedEntry> {
        self.entries.iter().find(|e| e.job.id == job_id)
    }

    /// Whether a job ended up in `skipped`.
    pub fn is_skipped(&self, job_id: &str) -> bool {
        self.skipped.iter().any(|s| s.job.id == job_id)
    }

    /// Entries assigned to a crew, in assignment order.
    pub fn entries_for_crew(&self, crew: &str) -> Vec<&OptimizedEntry> {
        self.entries.iter().filter(|e| e.crew == crew).collect()
    }

    /// Latest end date across all entries.
    pub fn horizon_end(&self) -> Option<Date> {
        self.entries.iter().map(|e| e.end_date).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    fn entry(job_id: &str, crew: &str, start: Date, end: Date) -> OptimizedEntry {
        OptimizedEntry {
            job: Job::new(job_id, "West"),
            crew: crew.to_string(),
            crew_color: String::new(),
            start_date: start,
            end_date: end,
            days: 1,
            score: 0.0,
            assignee: Assignee::new("u-1", "Dana"),
            timezone: "America/Denver".to_string(),
        }
    }

    fn sample_outcome() -> ScheduleOutcome {
        ScheduleOutcome {
            entries: vec![
                entry("J1", "Alpha", date(2024, 6, 10), date(2024, 6, 12)),
                entry("J2", "Bravo", date(2024, 6, 10), date(2024, 6, 10)),
                entry("J3", "Alpha", date(2024, 6, 13), date(2024, 6, 14)),
            ],
            skipped: vec![SkippedJob {
                job: Job::new("J4", "Nowhere"),
                reason: SkipReason::UnknownLocation,
                score: 30.0,
            }],
        }
    }

    #[test]
    fn test_outcome_queries() {
        let outcome = sample_outcome();
        assert_eq!(outcome.len(), 4);
        assert!(!outcome.is_empty());
        assert_eq!(outcome.entry_for_job("J2").unwrap().crew, "Bravo");
        assert!(outcome.entry_for_job("J4").is_none());
        assert!(outcome.is_skipped("J4"));
        assert!(!outcome.is_skipped("J1"));
    }

    #[test]
    fn test_entries_for_crew() {
        let outcome = sample_outcome();
        let alpha: Vec<&str> = outcome
            .entries_for_crew("Alpha")
            .iter()
            .map(|e| e.job_id())
            .collect();
        assert_eq!(alpha, vec!["J1", "J3"]);
    }

    #[test]
    fn test_horizon_end() {
        assert_eq!(sample_outcome().horizon_end(), Some(date(2024, 6, 14)));
        assert_eq!(ScheduleOutcome::new().horizon_end(), None);
    }

    #[test]
    fn test_skip_reason_display() {
        assert_eq!(
            SkipReason::NoDirector.to_string(),
            "no director configured for location"
        );
    }

    #[test]
    fn test_entry_serializes_dates() {
        let e = entry("J1", "Alpha", date(2024, 6, 10), date(2024, 6, 12));
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["startDate"], "2024-06-10");
        assert_eq!(json["endDate"], "2024-06-12");
        assert_eq!(json["assignee"]["name"], "Dana");
    }
}
