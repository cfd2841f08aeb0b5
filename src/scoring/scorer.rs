//! Weighted priority scorer and backlog ranking.

use std::sync::Arc;

use super::{Preset, ProgramBonus, Revenue, ScoreComponent, Urgency};
use crate::models::Job;

/// Flat bonus every schedulable job receives.
pub const STAGE_BONUS: f64 = 30.0;

/// A job's position in the input slice paired with its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredJob {
    /// Index into the ranked slice.
    pub index: usize,
    pub score: f64,
}

/// Scores jobs under a preset.
///
/// # Example
/// ```
/// use install_schedule::models::Job;
/// use install_schedule::scoring::{Preset, PriorityScorer};
///
/// let jobs = vec![
///     Job::new("small", "West").with_amount(5_000.0),
///     Job::new("large", "West").with_amount(90_000.0),
/// ];
/// let ranked = PriorityScorer::new(Preset::RevenueFirst).rank(&jobs);
/// assert_eq!(jobs[ranked[0].index].id, "large");
/// ```
#[derive(Clone)]
pub struct PriorityScorer {
    preset: Preset,
    components: Vec<Arc<dyn ScoreComponent>>,
}

impl PriorityScorer {
    /// Creates a scorer with the revenue, program and urgency components.
    pub fn new(preset: Preset) -> Self {
        Self {
            preset,
            components: vec![Arc::new(Revenue), Arc::new(ProgramBonus), Arc::new(Urgency)],
        }
    }

    /// Adds a component.
    pub fn with_component<C: ScoreComponent + 'static>(mut self, component: C) -> Self {
        self.components.push(Arc::new(component));
        self
    }

    /// The preset in use.
    pub fn preset(&self) -> Preset {
        self.preset
    }

    /// Priority score of a job. Never negative.
    pub fn score(&self, job: &Job) -> f64 {
        let weights = self.preset.weights();
        let weighted: f64 = self
            .components
            .iter()
            .map(|c| c.evaluate(job) * c.weight(&weights))
            .sum();
        (weighted + STAGE_BONUS).max(0.0)
    }

    /// Weighted contribution of each component, in component order.
    ///
    /// The stage bonus is not included.
    pub fn breakdown(&self, job: &Job) -> Vec<(&'static str, f64)> {
        let weights = self.preset.weights();
        self.components
            .iter()
            .map(|c| (c.name(), c.evaluate(job) * c.weight(&weights)))
            .collect()
    }

    /// Scores every job and orders them by descending score.
    ///
    /// The sort is stable: equal scores keep their input order.
    pub fn rank(&self, jobs: &[Job]) -> Vec<ScoredJob> {
        let mut scored: Vec<ScoredJob> = jobs
            .iter()
            .enumerate()
            .map(|(index, job)| ScoredJob {
                index,
                score: self.score(job),
            })
            .collect();
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored
    }
}

impl Default for PriorityScorer {
    fn default() -> Self {
        Self::new(Preset::default())
    }
}

impl std::fmt::Debug for PriorityScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriorityScorer")
            .field("preset", &self.preset)
            .field(
                "components",
                &self.components.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Priority score of a job under a preset.
pub fn score(job: &Job, preset: Preset) -> f64 {
    PriorityScorer::new(preset).score(job)
}
