//! Scheduling domain models.
//!
//! Provides the data types a scheduling run consumes and produces, plus
//! the business-day calendar they are dated with.
//!
//! # Domain Mappings
//!
//! | install-schedule | Classic scheduling |
//! |------------------|--------------------|
//! | Job | Task / job |
//! | Crew | Machine / resource |
//! | CrewRoster | Resource pool per shop |
//! | OptimizedEntry | Assignment |
//! | ScheduleOutcome | Schedule |

pub mod calendar;
mod crew;
mod job;
mod project;
mod schedule;

pub use calendar::BusinessSpan;
pub use crew::{Assignee, Crew, CrewCapacity, CrewRoster, DEFAULT_TIMEZONE};
pub use job::{Job, JobRecord, MAX_INSTALL_DAYS};
pub use project::{stage_matches, Project, BLOCKED_STAGES, READY_TO_BUILD};
pub use schedule::{OptimizedEntry, ScheduleOutcome, SkipReason, SkippedJob};
