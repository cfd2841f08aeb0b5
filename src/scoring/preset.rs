//! Weighting presets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ScheduleError;

/// Weights applied to the revenue, program and urgency components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PresetWeights {
    pub revenue: f64,
    pub program: f64,
    pub urgency: f64,
}

impl PresetWeights {
    /// Creates a weight triple.
    pub const fn new(revenue: f64, program: f64, urgency: f64) -> Self {
        Self {
            revenue,
            program,
            urgency,
        }
    }
}

/// Named prioritization strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Equal weight on value, program participation and urgency.
    #[default]
    Balanced,
    /// Contract value dominates.
    RevenueFirst,
    /// Program participants first, urgency second.
    PePriority,
    /// Overdue and near-deadline work first.
    UrgencyFirst,
}

impl Preset {
    /// Every preset, in display order.
    pub const ALL: [Preset; 4] = [
        Preset::Balanced,
        Preset::RevenueFirst,
        Preset::PePriority,
        Preset::UrgencyFirst,
    ];

    /// The weights this preset applies.
    pub const fn weights(self) -> PresetWeights {
        match self {
            Preset::Balanced => PresetWeights::new(1.0, 1.0, 1.0),
            Preset::RevenueFirst => PresetWeights::new(3.0, 0.5, 0.5),
            Preset::PePriority => PresetWeights::new(0.5, 3.0, 1.5),
            Preset::UrgencyFirst => PresetWeights::new(0.5, 1.0, 3.0),
        }
    }

    /// Kebab-case name (`"revenue-first"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Preset::Balanced => "balanced",
            Preset::RevenueFirst => "revenue-first",
            Preset::PePriority => "pe-priority",
            Preset::UrgencyFirst => "urgency-first",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Preset::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ScheduleError::UnknownPreset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_table() {
        assert_eq!(Preset::Balanced.weights(), PresetWeights::new(1.0, 1.0, 1.0));
        assert_eq!(Preset::RevenueFirst.weights(), PresetWeights::new(3.0, 0.5, 0.5));
        assert_eq!(Preset::PePriority.weights(), PresetWeights::new(0.5, 3.0, 1.5));
        assert_eq!(Preset::UrgencyFirst.weights(), PresetWeights::new(0.5, 1.0, 3.0));
    }

    #[test]
    fn test_default_is_balanced() {
        assert_eq!(Preset::default(), Preset::Balanced);
    }

    #[test]
    fn test_parse_and_display() {
        for preset in Preset::ALL {
            assert_eq!(preset.to_string().parse::<Preset>().unwrap(), preset);
        }
        assert_eq!(" Revenue-First ".parse::<Preset>().unwrap(), Preset::RevenueFirst);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "fastest".parse::<Preset>().unwrap_err();
        assert!(matches!(err, ScheduleError::UnknownPreset(ref s) if s == "fastest"));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&Preset::PePriority).unwrap(),
            "\"pe-priority\""
        );
        let p: Preset = serde_json::from_str("\"urgency-first\"").unwrap();
        assert_eq!(p, Preset::UrgencyFirst);
    }
}
