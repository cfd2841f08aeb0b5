//! Pipeline bottleneck detection.
//!
//! Three checks over the full project set:
//!
//! | Check | Trigger | Severity |
//! |-------|---------|----------|
//! | Stage accumulation | more than 20 projects in one stage | medium, high above 50 |
//! | Program deadline risk | any program project past a deadline | high |
//! | Blocked backlog | more than 10 blocked projects | medium, high above 25 |

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::models::Project;

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Medium => "medium",
            Severity::High => "high",
        })
    }
}

/// Which check produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FindingKind {
    StageAccumulation,
    ProgramDeadlineRisk,
    BlockedBacklog,
}

/// One diagnostic about the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub kind: FindingKind,
    pub severity: Severity,
    /// Stage name for stage findings, empty otherwise.
    pub subject: String,
    pub message: String,
    /// Projects involved.
    pub count: usize,
    /// Aggregate contract value of the projects involved.
    pub total_value: f64,
}

/// Count thresholds for the accumulation checks. Counts must exceed a
/// threshold to trigger it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BottleneckThresholds {
    pub stage_bottleneck: usize,
    pub stage_high: usize,
    pub blocked_medium: usize,
    pub blocked_high: usize,
}

impl Default for BottleneckThresholds {
    fn default() -> Self {
        Self {
            stage_bottleneck: 20,
            stage_high: 50,
            blocked_medium: 10,
            blocked_high: 25,
        }
    }
}

/// Runs every bottleneck check.
///
/// Findings are ordered by severity (high first), then by count
/// (largest first), then by subject.
pub fn find_bottlenecks(
    projects: &[Project],
    as_of: Date,
    thresholds: &BottleneckThresholds,
) -> Vec<Finding> {
    let mut findings = stage_accumulation(projects, thresholds);
    findings.extend(program_deadline_risk(projects, as_of));
    findings.extend(blocked_backlog(projects, thresholds));

    findings.sort_by(|a, b| {
        b.severity
            .cmp(&a.severity)
            .then_with(|| b.count.cmp(&a.count))
            .then_with(|| a.subject.cmp(&b.subject))
    });
    findings
}

/// Groups by stage the way [`stage_matches`](crate::models::stage_matches)
/// compares them: trimmed, ASCII case ignored. The subject keeps the first
/// spelling seen.
fn stage_accumulation(projects: &[Project], thresholds: &BottleneckThresholds) -> Vec<Finding> {
    let mut by_stage: BTreeMap<String, (&str, usize, f64)> = BTreeMap::new();
    for p in projects {
        let stage = p.stage.trim();
        let slot = by_stage
            .entry(stage.to_ascii_lowercase())
            .or_insert((stage, 0, 0.0));
        slot.1 += 1;
        slot.2 += p.amount;
    }

    by_stage
        .into_values()
        .filter(|(_, count, _)| *count > thresholds.stage_bottleneck)
        .map(|(stage, count, value)| Finding {
            kind: FindingKind::StageAccumulation,
            severity: if count > thresholds.stage_high {
                Severity::High
            } else {
                Severity::Medium
            },
            subject: stage.to_string(),
            message: format!("{count} projects accumulated in '{stage}'"),
            count,
            total_value: value,
        })
        .collect()
}

fn program_deadline_risk(projects: &[Project], as_of: Date) -> Option<Finding> {
    let at_risk: Vec<&Project> = projects
        .iter()
        .filter(|p| p.is_high_priority_program && p.is_overdue(as_of))
        .collect();
    if at_risk.is_empty() {
        return None;
    }
    let count = at_risk.len();
    Some(Finding {
        kind: FindingKind::ProgramDeadlineRisk,
        severity: Severity::High,
        subject: String::new(),
        message: format!("{count} program projects are past a deadline"),
        count,
        total_value: at_risk.iter().map(|p| p.amount).sum(),
    })
}

fn blocked_backlog(projects: &[Project], thresholds: &BottleneckThresholds) -> Option<Finding> {
    let blocked: Vec<&Project> = projects.iter().filter(|p| p.counts_as_blocked()).collect();
    let count = blocked.len();
    let severity = if count > thresholds.blocked_high {
        Severity::High
    } else if count > thresholds.blocked_medium {
        Severity::Medium
    } else {
        return None;
    };
    Some(Finding {
        kind: FindingKind::BlockedBacklog,
        severity,
        subject: String::new(),
        message: format!("{count} projects are blocked"),
        count,
        total_value: blocked.iter().map(|p| p.amount).sum(),
    })
}
