//! Location efficiency ranking.
//!
//! `score = 50 - avg_days_in_stage / 5 - overdue_pct * 0.5`, clamped to
//! `[-100, 100]`. A relative heuristic: longer average stage time and a
//! larger overdue share can only lower it.

use jiff::civil::Date;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::Project;

const BASE_SCORE: f64 = 50.0;
const DAYS_DIVISOR: f64 = 5.0;
const OVERDUE_WEIGHT: f64 = 0.5;
const SCORE_BOUND: f64 = 100.0;

/// Efficiency of one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationEfficiency {
    pub location: String,
    pub project_count: usize,
    pub total_value: f64,
    /// Mean days since stage entry over projects that report it.
    pub avg_days_in_stage: f64,
    /// Share of projects past any deadline, in percent (0..=100).
    pub overdue_pct: f64,
    pub score: f64,
}

/// Efficiency score from its two inputs.
pub fn efficiency_score(avg_days_in_stage: f64, overdue_pct: f64) -> f64 {
    (BASE_SCORE - avg_days_in_stage / DAYS_DIVISOR - overdue_pct * OVERDUE_WEIGHT)
        .clamp(-SCORE_BOUND, SCORE_BOUND)
}

#[derive(Default)]
struct Tally {
    count: usize,
    value: f64,
    days_sum: f64,
    days_reported: usize,
    overdue: usize,
}

/// Scores every location that has at least one project.
///
/// Sorted by score (best first), ties by location name. Projects without a
/// location are ignored.
pub fn location_efficiency(projects: &[Project], as_of: Date) -> Vec<LocationEfficiency> {
    let mut tallies: BTreeMap<&str, Tally> = BTreeMap::new();
    let mut unlocated = 0;

    for p in projects {
        let location = p.location.trim();
        if location.is_empty() {
            unlocated += 1;
            continue;
        }
        let t = tallies.entry(location).or_default();
        t.count += 1;
        t.value += p.amount;
        if let Some(days) = p.days_since_stage_entry {
            t.days_sum += days as f64;
            t.days_reported += 1;
        }
        if p.is_overdue(as_of) {
            t.overdue += 1;
        }
    }

    if unlocated > 0 {
        warn!("Ignored {unlocated} projects without a location in efficiency ranking");
    }

    let mut result: Vec<LocationEfficiency> = tallies
        .into_iter()
        .map(|(location, t)| {
            let avg_days_in_stage = if t.days_reported == 0 {
                0.0
            } else {
                t.days_sum / t.days_reported as f64
            };
            let overdue_pct = t.overdue as f64 / t.count as f64 * 100.0;
            LocationEfficiency {
                location: location.to_string(),
                project_count: t.count,
                total_value: t.value,
                avg_days_in_stage,
                overdue_pct,
                score: efficiency_score(avg_days_in_stage, overdue_pct),
            }
        })
        .collect();

    result.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.location.cmp(&b.location))
    });
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    fn as_of() -> Date {
        date(2024, 6, 10)
    }

    #[test]
    fn test_score_formula() {
        assert!((efficiency_score(0.0, 0.0) - 50.0).abs() < 1e-10);
        assert!((efficiency_score(25.0, 20.0) - 35.0).abs() < 1e-10);
        assert!((efficiency_score(1_000.0, 100.0) - -100.0).abs() < 1e-10);
        assert!((efficiency_score(-1_000.0, 0.0) - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_score_monotonic() {
        assert!(efficiency_score(10.0, 10.0) >= efficiency_score(20.0, 10.0));
        assert!(efficiency_score(10.0, 10.0) >= efficiency_score(10.0, 30.0));
    }

    #[test]
    fn test_location_ranking() {
        let projects = vec![
            Project::new("P1", "West", "Install").with_days_in_stage(10).with_amount(10_000.0),
            Project::new("P2", "West", "Install")
                .with_days_in_stage(30)
                .with_amount(20_000.0)
                .with_install_deadline(date(2024, 6, 1)),
            Project::new("P3", "South", "Install").with_days_in_stage(5),
        ];
        let ranking = location_efficiency(&projects, as_of());
        assert_eq!(ranking.len(), 2);

        // South: 50 - 1 - 0 = 49
        assert_eq!(ranking[0].location, "South");
        assert!((ranking[0].score - 49.0).abs() < 1e-10);

        // West: avg 20 days, 50% overdue → 50 - 4 - 25 = 21
        let west = &ranking[1];
        assert_eq!(west.project_count, 2);
        assert!((west.total_value - 30_000.0).abs() < 1e-10);
        assert!((west.avg_days_in_stage - 20.0).abs() < 1e-10);
        assert!((west.overdue_pct - 50.0).abs() < 1e-10);
        assert!((west.score - 21.0).abs() < 1e-10);
    }

    #[test]
    fn test_missing_days_excluded_from_average() {
        let projects = vec![
            Project::new("P1", "West", "Install").with_days_in_stage(10),
            Project::new("P2", "West", "Install"),
        ];
        let ranking = location_efficiency(&projects, as_of());
        assert!((ranking[0].avg_days_in_stage - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_no_projects_no_entries() {
        assert!(location_efficiency(&[], as_of()).is_empty());
        let unlocated = vec![Project::new("P1", "", "Install")];
        assert!(location_efficiency(&unlocated, as_of()).is_empty());
    }
}
