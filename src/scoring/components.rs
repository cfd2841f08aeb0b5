//! Built-in score components.
//!
//! | Component | Raw value | Range |
//! |-----------|-----------|-------|
//! | Revenue | `amount / 1000` | 0..=100 |
//! | ProgramBonus | 50 if program participant | 0 or 50 |
//! | Urgency | overdue: `2 * days late`; due within 14 days: `3 * (14 - days)` | 0..=200 |
//!
//! The revenue cap applies before the preset weight.

use super::{PresetWeights, ScoreComponent};
use crate::models::Job;

/// Upper bound of the revenue component.
const REVENUE_CAP: f64 = 100.0;
/// Bonus for program participants.
const PROGRAM_BONUS: f64 = 50.0;
/// Upper bound of the overdue part of the urgency component.
const OVERDUE_CAP: f64 = 200.0;
/// Deadlines further out than this contribute no urgency.
const URGENCY_WINDOW_DAYS: i64 = 14;

/// Contract value in thousands, capped at 100.
#[derive(Debug, Clone, Copy)]
pub struct Revenue;

impl ScoreComponent for Revenue {
    fn name(&self) -> &'static str {
        "revenue"
    }

    fn evaluate(&self, job: &Job) -> f64 {
        if !job.amount.is_finite() {
            return 0.0;
        }
        (job.amount / 1000.0).min(REVENUE_CAP)
    }

    fn weight(&self, weights: &PresetWeights) -> f64 {
        weights.revenue
    }

    fn description(&self) -> &'static str {
        "Contract value (per $1k, capped)"
    }
}

/// Flat bonus for incentive-program participants.
#[derive(Debug, Clone, Copy)]
pub struct ProgramBonus;

impl ScoreComponent for ProgramBonus {
    fn name(&self) -> &'static str {
        "program"
    }

    fn evaluate(&self, job: &Job) -> f64 {
        if job.is_high_priority_program {
            PROGRAM_BONUS
        } else {
            0.0
        }
    }

    fn weight(&self, weights: &PresetWeights) -> f64 {
        weights.program
    }

    fn description(&self) -> &'static str {
        "Incentive program participation"
    }
}

/// Deadline pressure.
#[derive(Debug, Clone, Copy)]
pub struct Urgency;

impl ScoreComponent for Urgency {
    fn name(&self) -> &'static str {
        "urgency"
    }

    fn evaluate(&self, job: &Job) -> f64 {
        match job.days_to_install {
            Some(days) if days < 0 => (days.unsigned_abs() as f64 * 2.0).min(OVERDUE_CAP),
            Some(days) if days <= URGENCY_WINDOW_DAYS => ((URGENCY_WINDOW_DAYS - days) * 3) as f64,
            _ => 0.0,
        }
    }

    fn weight(&self, weights: &PresetWeights) -> f64 {
        weights.urgency
    }

    fn description(&self) -> &'static str {
        "Install deadline urgency"
    }
}
