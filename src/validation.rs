//! Structural validation of scheduling inputs.
//!
//! Opt-in checks a caller can run before [`generate`](crate::scheduler::generate)
//! to surface configuration gaps up front instead of discovering them as
//! skipped jobs. Detects:
//! - Crew names shared by two crews (availability is keyed by crew name)
//! - Locations with no crews
//! - Locations with crews but no director
//! - Locations with crews but no explicit timezone label
//! - Duplicate job IDs
//!
//! Every check runs; all problems are reported together.

use crate::models::{CrewRoster, Job};
use std::collections::{BTreeSet, HashMap, HashSet};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two crews share a name, so they would share one availability date.
    DuplicateCrew,
    /// A location is configured but has no crews.
    EmptyCrewPool,
    /// A location has crews but no director; its jobs would be skipped.
    MissingDirector,
    /// A location has crews but relies on the default timezone label.
    MissingTimezone,
    /// Two jobs share the same ID.
    DuplicateJobId,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

fn into_result(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a crew roster.
///
/// Locations are checked in name order so the error list is stable.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(roster: &CrewRoster) -> ValidationResult {
    let mut errors = Vec::new();

    let locations: BTreeSet<&str> = roster
        .crews_by_location
        .keys()
        .chain(roster.directors_by_location.keys())
        .chain(roster.timezones_by_location.keys())
        .map(String::as_str)
        .collect();

    let mut crew_owner: HashMap<&str, &str> = HashMap::new();

    for location in locations {
        let crews = roster.crews(location);
        if crews.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyCrewPool,
                format!("Location '{location}' has no crews"),
            ));
            continue;
        }

        for crew in crews {
            if let Some(owner) = crew_owner.insert(crew.name.as_str(), location) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateCrew,
                    format!(
                        "Crew '{}' in '{location}' duplicates a crew in '{owner}'",
                        crew.name
                    ),
                ));
            }
        }

        if roster.director(location).is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingDirector,
                format!("Location '{location}' has no director"),
            ));
        }

        if !roster.timezones_by_location.contains_key(location) {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingTimezone,
                format!(
                    "Location '{location}' has no timezone label, '{}' will be used",
                    roster.default_timezone
                ),
            ));
        }
    }

    into_result(errors)
}

/// Validates a job batch.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_jobs(jobs: &[Job]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for job in jobs {
        if !seen.insert(job.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateJobId,
                format!("Duplicate job ID: {}", job.id),
            ));
        }
    }

    into_result(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Assignee, Crew};

    fn sample_roster() -> CrewRoster {
        CrewRoster::new()
            .with_crew("West", Crew::new("West Alpha"))
            .with_crew("West", Crew::new("West Bravo"))
            .with_director("West", Assignee::new("u-1", "Dana"))
            .with_timezone("West", "America/Denver")
    }

    fn kinds(errors: &[ValidationError]) -> Vec<ValidationErrorKind> {
        errors.iter().map(|e| e.kind.clone()).collect()
    }

    #[test]
    fn test_valid_roster() {
        assert!(validate_roster(&sample_roster()).is_ok());
    }

    #[test]
    fn test_duplicate_crew_across_locations() {
        let roster = sample_roster()
            .with_crew("South", Crew::new("West Alpha"))
            .with_director("South", Assignee::new("u-2", "Lee"))
            .with_timezone("South", "America/Los_Angeles");

        let errors = validate_roster(&roster).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::DuplicateCrew]);
        assert!(errors[0].message.contains("West Alpha"));
    }

    #[test]
    fn test_empty_crew_pool() {
        let mut roster = sample_roster();
        roster.crews_by_location.insert("North".into(), Vec::new());

        let errors = validate_roster(&roster).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::EmptyCrewPool]);
    }

    #[test]
    fn test_director_without_crews_is_empty_pool() {
        let roster = sample_roster().with_director("North", Assignee::new("u-3", "Sam"));
        let errors = validate_roster(&roster).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::EmptyCrewPool]);
    }

    #[test]
    fn test_missing_director_and_timezone() {
        let roster = CrewRoster::new().with_crew("West", Crew::new("West Alpha"));
        let errors = validate_roster(&roster).unwrap_err();
        assert_eq!(
            kinds(&errors),
            vec![
                ValidationErrorKind::MissingDirector,
                ValidationErrorKind::MissingTimezone
            ]
        );
    }

    #[test]
    fn test_empty_roster_is_valid() {
        assert!(validate_roster(&CrewRoster::new()).is_ok());
    }

    #[test]
    fn test_duplicate_job_id() {
        let jobs = vec![Job::new("J1", "West"), Job::new("J2", "West"), Job::new("J1", "South")];
        let errors = validate_jobs(&jobs).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateJobId);
        assert!(validate_jobs(&jobs[..2]).is_ok());
    }
}
