//! Project model for pipeline-wide reporting.
//!
//! Unlike [`Job`](super::Job), a project can sit in any pipeline stage.
//! Projects feed the bottleneck and efficiency analysis only.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// The pipeline stage whose jobs are eligible for crew assignment.
pub const READY_TO_BUILD: &str = "Ready To Build";

/// Stages that count as blocked regardless of the project's blocked flag.
pub const BLOCKED_STAGES: [&str; 2] = ["Blocked", "On Hold"];

/// Case- and whitespace-insensitive stage comparison.
pub fn stage_matches(stage: &str, expected: &str) -> bool {
    stage.trim().eq_ignore_ascii_case(expected.trim())
}

/// A project in any pipeline stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub stage: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default, alias = "isPe")]
    pub is_high_priority_program: bool,
    /// Explicit blocked flag, independent of stage.
    #[serde(default)]
    pub is_blocked: bool,
    #[serde(default)]
    pub install_deadline: Option<Date>,
    #[serde(default)]
    pub inspection_deadline: Option<Date>,
    #[serde(default)]
    pub completion_deadline: Option<Date>,
    /// Days since the project entered its current stage.
    #[serde(default)]
    pub days_since_stage_entry: Option<i64>,
}

impl Project {
    /// Creates a project in the given location and stage.
    pub fn new(
        id: impl Into<String>,
        location: impl Into<String>,
        stage: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            location: location.into(),
            stage: stage.into(),
            amount: 0.0,
            is_high_priority_program: false,
            is_blocked: false,
            install_deadline: None,
            inspection_deadline: None,
            completion_deadline: None,
            days_since_stage_entry: None,
        }
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_high_priority_program(mut self, flag: bool) -> Self {
        self.is_high_priority_program = flag;
        self
    }

    pub fn with_blocked(mut self, blocked: bool) -> Self {
        self.is_blocked = blocked;
        self
    }

    pub fn with_install_deadline(mut self, deadline: Date) -> Self {
        self.install_deadline = Some(deadline);
        self
    }

    pub fn with_inspection_deadline(mut self, deadline: Date) -> Self {
        self.inspection_deadline = Some(deadline);
        self
    }

    pub fn with_completion_deadline(mut self, deadline: Date) -> Self {
        self.completion_deadline = Some(deadline);
        self
    }

    pub fn with_days_in_stage(mut self, days: i64) -> Self {
        self.days_since_stage_entry = Some(days);
        self
    }

    /// Whether any of the three deadlines is before `as_of`.
    pub fn is_overdue(&self, as_of: Date) -> bool {
        [
            self.install_deadline,
            self.inspection_deadline,
            self.completion_deadline,
        ]
        .into_iter()
        .flatten()
        .any(|d| d < as_of)
    }

    /// Whether the project is flagged blocked or sits in a blocked stage.
    pub fn counts_as_blocked(&self) -> bool {
        self.is_blocked || BLOCKED_STAGES.iter().any(|s| stage_matches(&self.stage, s))
    }

    /// Whether the project is ready for crew assignment.
    pub fn is_ready_to_build(&self) -> bool {
        stage_matches(&self.stage, READY_TO_BUILD)
    }
}
