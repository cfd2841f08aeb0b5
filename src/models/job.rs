//! Job model.
//!
//! A job is one installation waiting for a crew. Raw records arrive from
//! the CRM side as loosely-typed [`JobRecord`]s and are validated once, at
//! the boundary, into [`Job`]s. Scoring and allocation only see `Job`.

use serde::{Deserialize, Serialize};

use super::project::READY_TO_BUILD;
use crate::error::{Result, ScheduleError};

/// Largest accepted install estimate, in days (one working year).
pub const MAX_INSTALL_DAYS: f64 = 260.0;

/// A schedulable installation job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Unique job identifier.
    pub id: String,
    /// Display name (usually the customer name).
    pub name: String,
    /// Site address.
    pub address: String,
    /// Operating location the job belongs to. Key into the crew roster.
    pub location: String,
    /// Contract value.
    pub amount: f64,
    /// Participates in the external incentive program ("PE").
    pub is_high_priority_program: bool,
    /// Current pipeline stage.
    pub stage: String,
    /// Estimated install duration in business days (may be fractional).
    pub install_days: f64,
    /// Days until the install deadline. Negative = overdue, `None` = unknown.
    pub days_to_install: Option<i64>,
}

impl Job {
    /// Creates a one-day, zero-value job at the given location.
    pub fn new(id: impl Into<String>, location: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            address: String::new(),
            location: location.into(),
            amount: 0.0,
            is_high_priority_program: false,
            stage: READY_TO_BUILD.to_string(),
            install_days: 1.0,
            days_to_install: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the site address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Sets the contract value.
    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }

    /// Marks program participation.
    pub fn with_high_priority_program(mut self, flag: bool) -> Self {
        self.is_high_priority_program = flag;
        self
    }

    /// Sets the pipeline stage.
    pub fn with_stage(mut self, stage: impl Into<String>) -> Self {
        self.stage = stage.into();
        self
    }

    /// Sets the estimated install duration (business days).
    pub fn with_install_days(mut self, days: f64) -> Self {
        self.install_days = days;
        self
    }

    /// Sets the signed number of days until the install deadline.
    pub fn with_days_to_install(mut self, days: i64) -> Self {
        self.days_to_install = Some(days);
        self
    }

    /// Install duration rounded up to whole business days.
    ///
    /// Returns `None` when the estimate is not a positive finite number or
    /// exceeds [`MAX_INSTALL_DAYS`].
    pub fn duration_days(&self) -> Option<u32> {
        let days = self.install_days;
        if !days.is_finite() || days <= 0.0 || days > MAX_INSTALL_DAYS {
            return None;
        }
        Some((days.ceil() as u32).max(1))
    }

    /// Whether the install deadline has already passed.
    pub fn is_overdue(&self) -> bool {
        self.days_to_install.is_some_and(|d| d < 0)
    }

    /// Validates a batch of raw records.
    ///
    /// Returns the accepted jobs in input order and one error per rejected
    /// record. A bad record never prevents the others from loading.
    pub fn from_records(records: Vec<JobRecord>) -> (Vec<Job>, Vec<ScheduleError>) {
        let mut jobs = Vec::with_capacity(records.len());
        let mut errors = Vec::new();
        for record in records {
            match Job::try_from(record) {
                Ok(job) => jobs.push(job),
                Err(e) => errors.push(e),
            }
        }
        (jobs, errors)
    }
}

/// A raw job record as supplied by the CRM integration.
///
/// Every field is optional here; [`Job::try_from`] decides which ones are
/// required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub location: Option<String>,
    pub amount: Option<f64>,
    #[serde(alias = "isPe")]
    pub is_high_priority_program: Option<bool>,
    pub stage: Option<String>,
    pub install_days: Option<f64>,
    pub days_to_install: Option<i64>,
}

impl JobRecord {
    /// Parses a JSON array of records.
    pub fn list_from_json(json: &str) -> Result<Vec<JobRecord>> {
        Ok(serde_json::from_str(json)?)
    }
}

impl TryFrom<JobRecord> for Job {
    type Error = ScheduleError;

    fn try_from(record: JobRecord) -> Result<Self> {
        let id = record
            .id
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ScheduleError::invalid_job("<missing>", "id", "is required"))?;

        let install_days = match record.install_days {
            None => return Err(ScheduleError::invalid_job(id, "installDays", "is required")),
            Some(d) if !d.is_finite() || d <= 0.0 => {
                return Err(ScheduleError::invalid_job(
                    id,
                    "installDays",
                    format!("must be a positive number, got {d}"),
                ))
            }
            Some(d) if d > MAX_INSTALL_DAYS => {
                return Err(ScheduleError::invalid_job(
                    id,
                    "installDays",
                    format!("must be at most {MAX_INSTALL_DAYS}, got {d}"),
                ))
            }
            Some(d) => d,
        };

        let amount = record.amount.unwrap_or(0.0);
        if !amount.is_finite() || amount < 0.0 {
            return Err(ScheduleError::invalid_job(
                id,
                "amount",
                format!("must be a non-negative number, got {amount}"),
            ));
        }

        Ok(Job {
            name: record.name.unwrap_or_else(|| id.clone()),
            id,
            address: record.address.unwrap_or_default(),
            location: record
                .location
                .map(|s| s.trim().to_string())
                .unwrap_or_default(),
            amount,
            is_high_priority_program: record.is_high_priority_program.unwrap_or(false),
            stage: record.stage.unwrap_or_default(),
            install_days,
            days_to_install: record.days_to_install,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, install_days: Option<f64>) -> JobRecord {
        JobRecord {
            id: Some(id.to_string()),
            location: Some("Westminster".to_string()),
            install_days,
            ..Default::default()
        }
    }

    #[test]
    fn test_job_builder() {
        let job = Job::new("J1", "West")
            .with_name("Smith Residence")
            .with_amount(42_000.0)
            .with_high_priority_program(true)
            .with_install_days(2.5)
            .with_days_to_install(-3);

        assert_eq!(job.id, "J1");
        assert_eq!(job.name, "Smith Residence");
        assert_eq!(job.location, "West");
        assert_eq!(job.stage, READY_TO_BUILD);
        assert!(job.is_high_priority_program);
        assert!(job.is_overdue());
    }

    #[test]
    fn test_duration_rounds_up() {
        assert_eq!(Job::new("J", "L").with_install_days(1.0).duration_days(), Some(1));
        assert_eq!(Job::new("J", "L").with_install_days(2.1).duration_days(), Some(3));
        assert_eq!(Job::new("J", "L").with_install_days(0.25).duration_days(), Some(1));
    }

    #[test]
    fn test_duration_invalid() {
        assert_eq!(Job::new("J", "L").with_install_days(0.0).duration_days(), None);
        assert_eq!(Job::new("J", "L").with_install_days(-1.0).duration_days(), None);
        assert_eq!(Job::new("J", "L").with_install_days(f64::NAN).duration_days(), None);
        assert_eq!(Job::new("J", "L").with_install_days(3_000_000.0).duration_days(), None);
    }

    #[test]
    fn test_duration_upper_bound() {
        let at_bound = Job::new("J", "L").with_install_days(MAX_INSTALL_DAYS);
        assert_eq!(at_bound.duration_days(), Some(260));
        let over = Job::new("J", "L").with_install_days(MAX_INSTALL_DAYS + 0.5);
        assert_eq!(over.duration_days(), None);
    }

    #[test]
    fn test_record_rejects_huge_estimate() {
        let err = Job::try_from(record("PROJ-9", Some(1e10))).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::InvalidJob { field: "installDays", .. }
        ));
        assert!(Job::try_from(record("PROJ-9", Some(MAX_INSTALL_DAYS))).is_ok());
    }

    #[test]
    fn test_record_conversion() {
        let mut r = record(" PROJ-7 ", Some(2.0));
        r.amount = Some(18_500.0);
        r.is_high_priority_program = Some(true);
        r.days_to_install = Some(4);

        let job = Job::try_from(r).unwrap();
        assert_eq!(job.id, "PROJ-7");
        assert_eq!(job.name, "PROJ-7");
        assert_eq!(job.location, "Westminster");
        assert!((job.amount - 18_500.0).abs() < 1e-10);
        assert_eq!(job.days_to_install, Some(4));
    }

    #[test]
    fn test_record_missing_id() {
        let r = JobRecord {
            install_days: Some(1.0),
            ..Default::default()
        };
        let err = Job::try_from(r).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidJob { field: "id", .. }));
    }

    #[test]
    fn test_record_bad_install_days() {
        for days in [None, Some(0.0), Some(-2.0), Some(f64::INFINITY)] {
            let err = Job::try_from(record("J1", days)).unwrap_err();
            assert!(matches!(
                err,
                ScheduleError::InvalidJob {
                    field: "installDays",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_record_negative_amount() {
        let mut r = record("J1", Some(1.0));
        r.amount = Some(-5.0);
        assert!(matches!(
            Job::try_from(r).unwrap_err(),
            ScheduleError::InvalidJob { field: "amount", .. }
        ));
    }

    #[test]
    fn test_from_records_partitions() {
        let records = vec![
            record("J1", Some(1.0)),
            record("J2", None),
            record("J3", Some(3.0)),
        ];
        let (jobs, errors) = Job::from_records(records);
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].id, "J1");
        assert_eq!(jobs[1].id, "J3");
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_records_from_json() {
        let json = r#"[
            {"id": "J1", "location": "Centennial", "amount": 31000, "isPe": true,
             "installDays": 2, "daysToInstall": -1},
            {"id": "J2", "installDays": 1}
        ]"#;
        let records = JobRecord::list_from_json(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].is_high_priority_program, Some(true));
        assert_eq!(records[1].location, None);
    }
}
