//! Scheduler configuration.
//!
//! A JSON document describing every operating location: its crews in
//! priority order, its director and its display timezone. Loaded once by
//! the caller and turned into a [`CrewRoster`].
//!
//! ```json
//! {
//!   "defaultTimezone": "America/Denver",
//!   "defaultPreset": "balanced",
//!   "locations": {
//!     "Westminster": {
//!       "timezone": "America/Denver",
//!       "director": { "id": "u-17", "name": "Dana" },
//!       "crews": [{ "name": "West Alpha", "color": "#3b82f6", "roofers": 2, "electricians": 1 }]
//!     }
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Result, ScheduleError};
use crate::models::{stage_matches, Assignee, Crew, CrewRoster, DEFAULT_TIMEZONE, READY_TO_BUILD};
use crate::scheduler::ScheduleOptions;
use crate::scoring::Preset;

/// Configuration of one operating location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocationConfig {
    /// Display timezone label. Falls back to the document default.
    pub timezone: Option<String>,
    /// Director attached to every job in the location.
    pub director: Option<Assignee>,
    /// Crews in declared order.
    pub crews: Vec<Crew>,
}

/// Top-level scheduler configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchedulerConfig {
    pub locations: BTreeMap<String, LocationConfig>,
    pub default_timezone: String,
    pub default_preset: Preset,
    pub schedulable_stages: Vec<String>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            locations: BTreeMap::new(),
            default_timezone: DEFAULT_TIMEZONE.to_string(),
            default_preset: Preset::default(),
            schedulable_stages: vec![READY_TO_BUILD.to_string()],
        }
    }
}

impl SchedulerConfig {
    /// Parses and sanity-checks a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SchedulerConfig = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    /// Serializes the configuration as pretty JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Adds or replaces a location.
    pub fn with_location(mut self, name: impl Into<String>, location: LocationConfig) -> Self {
        self.locations.insert(name.into(), location);
        self
    }

    /// Rejects documents that cannot describe a usable roster.
    fn check(&self) -> Result<()> {
        if self.default_timezone.trim().is_empty() {
            return Err(ScheduleError::configuration("defaultTimezone must not be empty"));
        }
        for (name, location) in &self.locations {
            if name.trim().is_empty() {
                return Err(ScheduleError::configuration("location names must not be empty"));
            }
            if let Some(crew) = location.crews.iter().find(|c| c.name.trim().is_empty()) {
                return Err(ScheduleError::configuration(format!(
                    "location '{name}' has a crew without a name (color '{}')",
                    crew.color
                )));
            }
        }
        Ok(())
    }

    /// Builds the roster scheduling runs allocate against.
    pub fn roster(&self) -> CrewRoster {
        let mut roster = CrewRoster::new().with_default_timezone(self.default_timezone.clone());
        for (name, location) in &self.locations {
            roster
                .crews_by_location
                .insert(name.clone(), location.crews.clone());
            if let Some(director) = &location.director {
                roster
                    .directors_by_location
                    .insert(name.clone(), director.clone());
            }
            if let Some(tz) = &location.timezone {
                roster.timezones_by_location.insert(name.clone(), tz.clone());
            }
        }
        roster
    }

    /// Run options using the configured default preset.
    pub fn options(&self) -> ScheduleOptions {
        ScheduleOptions::new().with_preset(self.default_preset)
    }

    /// Whether a stage is eligible for crew assignment.
    pub fn is_schedulable(&self, stage: &str) -> bool {
        self.schedulable_stages
            .iter()
            .any(|s| stage_matches(stage, s))
    }
}
