//! Configuration system for ShiftForge.
//!
//! Load schedule configuration from TOML or YAML files to choose the model
//! variant, the capacity per shift and the optional rules without code
//! changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use shiftforge_config::{ModelVariant, ScheduleConfig, ShiftCap};
//! use std::time::Duration;
//!
//! let config = ScheduleConfig::from_toml_str(r#"
//!     num_shifts = 12
//!     shift_size = 2
//!     enforce_veteran_coverage = true
//!     model_variant = "person_major_threshold"
//!     friend_groups = [[1, 2]]
//!
//!     [shift_cap]
//!     one_of = [0, 2]
//!
//!     [termination]
//!     seconds_spent_limit = 30
//! "#).unwrap();
//!
//! assert_eq!(config.model_variant, ModelVariant::PersonMajorThreshold);
//! assert_eq!(config.shift_cap, ShiftCap::OneOf(vec![0, 2]));
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use shiftforge_config::ScheduleConfig;
//!
//! let config = ScheduleConfig::load("schedule.toml").unwrap_or_default();
//! assert_eq!(config.num_shifts, 12);
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use shiftforge_core::{FriendGroup, PersonId, ShiftForgeError, MAX_SHIFTS};
use thiserror::Error;

/// Default number of people working each shift.
pub const DEFAULT_SHIFT_SIZE: usize = 2;

/// Default upper bound on shifts worked per person.
pub const DEFAULT_MAX_SHIFTS_PER_PERSON: usize = 2;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for ShiftForgeError {
    fn from(err: ConfigError) -> Self {
        ShiftForgeError::Config(err.to_string())
    }
}

/// Main schedule configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ScheduleConfig {
    /// Number of shifts to staff, counted from shift 0.
    pub num_shifts: usize,

    /// People working each shift.
    pub shift_size: usize,

    /// Every shift needs at least one veteran.
    pub enforce_veteran_coverage: bool,

    /// Split-eligible people never work two adjacent shifts of a day part.
    pub enforce_split_adjacency: bool,

    /// Which variable array drives the model.
    pub model_variant: ModelVariant,

    /// Per-person bound on the number of shifts worked.
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub shift_cap: ShiftCap,

    /// Groups of people who work the same shifts.
    pub friend_groups: Vec<FriendGroup>,

    /// People subject to the adjacency rule. `None` selects everyone whose
    /// split-preference flag is set.
    pub split_candidates: Option<Vec<PersonId>>,

    /// Search budget.
    pub termination: Option<TerminationConfig>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            num_shifts: MAX_SHIFTS,
            shift_size: DEFAULT_SHIFT_SIZE,
            enforce_veteran_coverage: true,
            enforce_split_adjacency: false,
            model_variant: ModelVariant::default(),
            shift_cap: ShiftCap::default(),
            friend_groups: Vec::new(),
            split_candidates: None,
            termination: None,
        }
    }
}

impl ScheduleConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn with_num_shifts(mut self, num_shifts: usize) -> Self {
        self.num_shifts = num_shifts;
        self
    }

    pub fn with_shift_size(mut self, shift_size: usize) -> Self {
        self.shift_size = shift_size;
        self
    }

    pub fn with_veteran_coverage(mut self, enforce: bool) -> Self {
        self.enforce_veteran_coverage = enforce;
        self
    }

    pub fn with_split_adjacency(mut self, enforce: bool) -> Self {
        self.enforce_split_adjacency = enforce;
        self
    }

    pub fn with_model_variant(mut self, variant: ModelVariant) -> Self {
        self.model_variant = variant;
        self
    }

    pub fn with_shift_cap(mut self, cap: ShiftCap) -> Self {
        self.shift_cap = cap;
        self
    }

    /// Adds a friend group.
    pub fn with_friend_group(mut self, group: FriendGroup) -> Self {
        self.friend_groups.push(group);
        self
    }

    /// Declares the split candidates explicitly.
    pub fn with_split_candidates(mut self, candidates: impl IntoIterator<Item = usize>) -> Self {
        self.split_candidates = Some(candidates.into_iter().map(PersonId).collect());
        self
    }

    /// Sets the termination time limit.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.termination = Some(TerminationConfig {
            seconds_spent_limit: Some(seconds),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the maximum number of search nodes.
    pub fn with_node_limit(mut self, nodes: u64) -> Self {
        self.termination = Some(TerminationConfig {
            node_limit: Some(nodes),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Returns the termination time limit, if configured.
    ///
    /// Convenience method that delegates to `termination.time_limit()`.
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }

    /// Returns the node limit, if configured.
    pub fn node_limit(&self) -> Option<u64> {
        self.termination.as_ref().and_then(|t| t.node_limit)
    }

    /// Checks the parts of the configuration that don't depend on the roster.
    ///
    /// Roster-dependent checks (unknown person ids, capacity above roster
    /// size) run in the model builder.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_shifts == 0 {
            return Err(ConfigError::Invalid(
                "num_shifts must be positive".to_string(),
            ));
        }
        if self.num_shifts > MAX_SHIFTS {
            return Err(ConfigError::Invalid(format!(
                "num_shifts must be at most {}, found {}",
                MAX_SHIFTS, self.num_shifts
            )));
        }
        if let ShiftCap::OneOf(counts) = &self.shift_cap {
            if counts.is_empty() {
                return Err(ConfigError::Invalid(
                    "shift_cap.one_of must list at least one count".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Selects which variable array is primary in the model.
///
/// All variants describe the same rosters; they differ in the decision
/// variables the search branches on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelVariant {
    /// One variable per (shift, slot) holding the person in that slot.
    #[default]
    ShiftMajor,

    /// One variable per (person, shift) holding a rank in `0..roster_size`;
    /// ranks below `shift_size` work.
    PersonMajorRanked,

    /// One variable per (person, shift) holding a position in
    /// `0..=shift_size`; position `shift_size` is the shared idle value.
    PersonMajorThreshold,
}

impl std::fmt::Display for ModelVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelVariant::ShiftMajor => write!(f, "ShiftMajor"),
            ModelVariant::PersonMajorRanked => write!(f, "PersonMajorRanked"),
            ModelVariant::PersonMajorThreshold => write!(f, "PersonMajorThreshold"),
        }
    }
}

/// Per-person bound on shifts worked across the day.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftCap {
    /// Total worked shifts is at most `max`.
    AtMost(usize),

    /// Total worked shifts is one of the listed counts, e.g. `[0, 2]`.
    OneOf(Vec<usize>),
}

impl Default for ShiftCap {
    fn default() -> Self {
        ShiftCap::AtMost(DEFAULT_MAX_SHIFTS_PER_PERSON)
    }
}

impl ShiftCap {
    /// The strict rule: never exactly one shift.
    pub fn zero_or_two() -> Self {
        ShiftCap::OneOf(vec![0, 2])
    }

    /// Returns true if a person working `count` shifts satisfies the cap.
    pub fn allows(&self, count: usize) -> bool {
        match self {
            ShiftCap::AtMost(max) => count <= *max,
            ShiftCap::OneOf(counts) => counts.contains(&count),
        }
    }

    /// Largest shift count the cap allows.
    pub fn most(&self) -> usize {
        match self {
            ShiftCap::AtMost(max) => *max,
            ShiftCap::OneOf(counts) => counts.iter().copied().max().unwrap_or(0),
        }
    }
}

/// Termination configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum seconds to spend searching.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum milliseconds to spend searching.
    pub millis_spent_limit: Option<u64>,

    /// Maximum number of search nodes.
    pub node_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        let millis =
            self.seconds_spent_limit.unwrap_or(0) * 1000 + self.millis_spent_limit.unwrap_or(0);
        if millis > 0 {
            Some(Duration::from_millis(millis))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests;
