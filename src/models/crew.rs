//! Crew and roster models.
//!
//! Crews are the resources of this scheduler. Each belongs to exactly one
//! location and has independent availability. A [`CrewRoster`] is the
//! read-only view of all locations a scheduling run works against.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Timezone label used for locations without one.
pub const DEFAULT_TIMEZONE: &str = "America/Denver";

/// Head-count of a crew. Informational; the allocator does not enforce it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CrewCapacity {
    pub roofers: u32,
    pub electricians: u32,
}

impl CrewCapacity {
    /// Creates a capacity descriptor.
    pub fn new(roofers: u32, electricians: u32) -> Self {
        Self {
            roofers,
            electricians,
        }
    }

    /// Total people on the crew.
    pub fn head_count(&self) -> u32 {
        self.roofers + self.electricians
    }
}

/// A named field crew.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crew {
    /// Crew name. Unique across the whole roster.
    pub name: String,
    /// Display color (e.g. `#3b82f6`).
    #[serde(default)]
    pub color: String,
    #[serde(flatten)]
    pub capacity: CrewCapacity,
}

impl Crew {
    /// Creates a crew with no color and empty capacity.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: String::new(),
            capacity: CrewCapacity::default(),
        }
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets the capacity descriptor.
    pub fn with_capacity(mut self, roofers: u32, electricians: u32) -> Self {
        self.capacity = CrewCapacity::new(roofers, electricians);
        self
    }
}

/// The person responsible for every job scheduled in a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignee {
    /// Identity in the field-service system.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl Assignee {
    /// Creates an assignee.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Crews, directors and timezone labels keyed by location.
///
/// Read-only input to a scheduling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrewRoster {
    /// Ordered crew list per location. Order breaks availability ties.
    pub crews_by_location: HashMap<String, Vec<Crew>>,
    /// Director per location.
    pub directors_by_location: HashMap<String, Assignee>,
    /// Display timezone label per location.
    pub timezones_by_location: HashMap<String, String>,
    /// Label for locations missing from `timezones_by_location`.
    pub default_timezone: String,
}

impl Default for CrewRoster {
    fn default() -> Self {
        Self::new()
    }
}

impl CrewRoster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self {
            crews_by_location: HashMap::new(),
            directors_by_location: HashMap::new(),
            timezones_by_location: HashMap::new(),
            default_timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }

    /// Builds a roster from the three per-location maps.
    pub fn from_maps(
        crews_by_location: HashMap<String, Vec<Crew>>,
        directors_by_location: HashMap<String, Assignee>,
        timezones_by_location: HashMap<String, String>,
    ) -> Self {
        Self {
            crews_by_location,
            directors_by_location,
            timezones_by_location,
            default_timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }

    /// Appends a crew to a location.
    pub fn with_crew(mut self, location: impl Into<String>, crew: Crew) -> Self {
        self.crews_by_location
            .entry(location.into())
            .or_default()
            .push(crew);
        self
    }

    /// Sets the director of a location.
    pub fn with_director(mut self, location: impl Into<String>, director: Assignee) -> Self {
        self.directors_by_location.insert(location.into(), director);
        self
    }

    /// Sets the timezone label of a location.
    pub fn with_timezone(mut self, location: impl Into<String>, label: impl Into<String>) -> Self {
        self.timezones_by_location
            .insert(location.into(), label.into());
        self
    }

    /// Sets the fallback timezone label.
    pub fn with_default_timezone(mut self, label: impl Into<String>) -> Self {
        self.default_timezone = label.into();
        self
    }

    /// Crews of a location in declared order. Empty for unknown locations.
    pub fn crews(&self, location: &str) -> &[Crew] {
        self.crews_by_location
            .get(location)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Director of a location.
    pub fn director(&self, location: &str) -> Option<&Assignee> {
        self.directors_by_location.get(location)
    }

    /// Timezone label of a location, falling back to the default.
    pub fn timezone(&self, location: &str) -> &str {
        self.timezones_by_location
            .get(location)
            .map(String::as_str)
            .unwrap_or(self.default_timezone.as_str())
    }

    /// Iterates every crew of every location.
    pub fn all_crews(&self) -> impl Iterator<Item = (&str, &Crew)> {
        self.crews_by_location
            .iter()
            .flat_map(|(loc, crews)| crews.iter().map(move |c| (loc.as_str(), c)))
    }

    /// Location names with at least one crew, sorted.
    pub fn locations(&self) -> Vec<&str> {
        let mut locations: Vec<&str> = self
            .crews_by_location
            .iter()
            .filter(|(_, crews)| !crews.is_empty())
            .map(|(loc, _)| loc.as_str())
            .collect();
        locations.sort_unstable();
        locations
    }
}
