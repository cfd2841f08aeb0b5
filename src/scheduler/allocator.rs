//! Greedy crew allocator.
//!
//! # Algorithm
//!
//! 1. Resolve the job's location to its crew list and director. Missing
//!    configuration routes the job to `skipped` without touching state.
//! 2. Pick the crew with the earliest next-available date. Ties go to the
//!    crew declared first.
//! 3. Book `ceil(install_days)` business days starting on that date. A
//!    booking that would run off the end of the calendar is skipped.
//! 4. Advance the crew to the first business day after the booking.
//!
//! Assignments are never revisited.
//!
//! # Complexity
//! O(c) per job, where c = crews in the job's location.

use jiff::civil::Date;
use log::debug;
use std::collections::HashMap;

use crate::models::calendar::{first_business_day_on_or_after, BusinessSpan};
use crate::models::{Assignee, Crew, CrewRoster, Job, OptimizedEntry, SkipReason, SkippedJob};

/// Result of offering one job to the allocator.
#[derive(Debug, Clone, PartialEq)]
pub enum Allocation {
    Scheduled(OptimizedEntry),
    Skipped(SkippedJob),
}

/// Per-run crew availability state.
///
/// Construct one per scheduling run and drop it afterwards. The roster is
/// borrowed read-only; the only mutable state is the map from crew name to
/// the next date that crew is free.
#[derive(Debug, Clone)]
pub struct CrewAllocator<'r> {
    roster: &'r CrewRoster,
    start_date: Date,
    availability: HashMap<String, Date>,
}

impl<'r> CrewAllocator<'r> {
    /// Seeds every crew of every location as free on `start_date`.
    ///
    /// A weekend start date is rolled forward to the following Monday.
    pub fn new(roster: &'r CrewRoster, start_date: Date) -> Self {
        let start_date = first_business_day_on_or_after(start_date);
        let availability = roster
            .all_crews()
            .map(|(_, crew)| (crew.name.clone(), start_date))
            .collect();
        Self {
            roster,
            start_date,
            availability,
        }
    }

    /// First business day crews were seeded with.
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Next date a crew is free. `None` for crews not in the roster.
    pub fn next_available(&self, crew: &str) -> Option<Date> {
        self.availability.get(crew).copied()
    }

    /// Current availability of every crew.
    pub fn availability(&self) -> &HashMap<String, Date> {
        &self.availability
    }

    /// Assigns a job to the earliest-free crew of its location.
    pub fn assign_next(&mut self, job: &Job, score: f64) -> Allocation {
        let location = job.location.trim();
        let (crew, director) = match self.resolve(location) {
            Ok(found) => found,
            Err(reason) => return self.skip(job, score, reason),
        };
        let Some(days) = job.duration_days() else {
            return self.skip(job, score, SkipReason::InvalidDuration);
        };

        let available = self.next_available(&crew.name).unwrap_or(self.start_date);
        let Some(span) = BusinessSpan::starting(available, days) else {
            return self.skip(job, score, SkipReason::InvalidDuration);
        };
        self.availability
            .insert(crew.name.clone(), span.next_free_day());

        debug!(
            "Assigned job {} to crew {} ({} → {}, {} days, score {:.1})",
            job.id, crew.name, span.start, span.end, span.days, score
        );

        Allocation::Scheduled(OptimizedEntry {
            job: job.clone(),
            crew: crew.name.clone(),
            crew_color: crew.color.clone(),
            start_date: span.start,
            end_date: span.end,
            days: span.days,
            score,
            assignee: director.clone(),
            timezone: self.roster.timezone(location).to_string(),
        })
    }

    /// Earliest-free crew and the director of a location.
    fn resolve(&self, location: &str) -> Result<(&'r Crew, &'r Assignee), SkipReason> {
        let roster: &'r CrewRoster = self.roster;
        if location.is_empty() || !roster.crews_by_location.contains_key(location) {
            return Err(SkipReason::UnknownLocation);
        }

        let mut best: Option<(&'r Crew, Date)> = None;
        for crew in roster.crews(location) {
            let available = self.next_available(&crew.name).unwrap_or(self.start_date);
            match best {
                Some((_, best_date)) if available >= best_date => {}
                _ => best = Some((crew, available)),
            }
        }
        let (crew, _) = best.ok_or(SkipReason::NoCrews)?;
        let director = roster.director(location).ok_or(SkipReason::NoDirector)?;
        Ok((crew, director))
    }

    fn skip(&self, job: &Job, score: f64, reason: SkipReason) -> Allocation {
        debug!("Skipped job {} at '{}': {}", job.id, job.location, reason);
        Allocation::Skipped(SkippedJob {
            job: job.clone(),
            reason,
            score,
        })
    }
}
