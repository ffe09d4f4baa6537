//! Course generation configuration.
//!
//! Everything that shapes a course other than its four call parameters and
//! the random source: reserved zones, bounds and goal-backfill policies, and
//! the difficulty policy. Serialisable to RON so curricula can ship presets.
//! The seed is NOT part of the config.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::canvas::BoundsPolicy;
use crate::difficulty::DifficultyPolicy;
use crate::error::{CourseError, Result};
use crate::goals::BackfillPolicy;

/// Complete generation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseConfig {
    /// Display name for this configuration
    pub name: String,
    /// Flat spawn/terminal zones and goal placement
    pub zones: ZoneParams,
    /// Clip or reject writes leaving the grid
    pub bounds: BoundsPolicy,
    /// What to do with unfilled feature-goal slots
    pub backfill: BackfillPolicy,
    /// Difficulty → obstacle dimension mapping
    pub difficulty: DifficultyPolicy,
}

/// Reserved flat zones at both ends of the course.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneParams {
    /// Flat run at the start of the course (default: 2.0 m)
    pub spawn_length: f64,
    /// Minimum flat run at the end of the course (default: 2.0 m)
    pub terminal_length: f64,
    /// Distance of the spawn goal before the spawn zone end and of the
    /// terminal goal past the last obstacle (default: 0.5 m)
    pub goal_offset: f64,
}

impl Default for ZoneParams {
    fn default() -> Self {
        Self {
            spawn_length: 2.0,
            terminal_length: 2.0,
            goal_offset: 0.5,
        }
    }
}

impl Default for CourseConfig {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            zones: ZoneParams::default(),
            bounds: BoundsPolicy::Clip,
            backfill: BackfillPolicy::RepeatLast,
            difficulty: DifficultyPolicy::default(),
        }
    }
}

impl CourseConfig {
    pub fn validate(&self) -> Result<()> {
        let z = &self.zones;
        for (name, v) in [
            ("zones.spawn_length", z.spawn_length),
            ("zones.terminal_length", z.terminal_length),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(CourseError::invalid(name, v, "must be a finite positive length"));
            }
        }
        if !z.goal_offset.is_finite() || z.goal_offset < 0.0 || z.goal_offset >= z.spawn_length {
            return Err(CourseError::invalid(
                "zones.goal_offset",
                z.goal_offset,
                "must lie in [0, spawn_length)",
            ));
        }
        Ok(())
    }

    pub fn from_ron_str(s: &str) -> Result<Self> {
        let config: Self = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_ron_string(&self) -> Result<String> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }

    /// Softer hard end for early curriculum stages
    pub fn preset_gentle() -> Self {
        Self {
            name: "Gentle".to_string(),
            difficulty: DifficultyPolicy::default().scaled(0.6),
            ..Self::default()
        }
    }

    /// Harsher hard end, deeper pits
    pub fn preset_extreme() -> Self {
        Self {
            name: "Extreme".to_string(),
            difficulty: DifficultyPolicy::default().scaled(1.5),
            ..Self::default()
        }
    }

    /// Fail instead of clipping or backfilling; for auditing variants
    pub fn preset_strict() -> Self {
        Self {
            name: "Strict".to_string(),
            bounds: BoundsPolicy::Strict,
            backfill: BackfillPolicy::Reject,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CourseConfig::default();
        assert_eq!(config.name, "Default");
        assert_eq!(config.zones.spawn_length, 2.0);
        assert_eq!(config.bounds, BoundsPolicy::Clip);
        assert_eq!(config.backfill, BackfillPolicy::RepeatLast);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_ron_serialization() {
        let config = CourseConfig::preset_extreme();
        let serialized = config.to_ron_string().expect("Failed to serialize");
        let deserialized = CourseConfig::from_ron_str(&serialized).expect("Failed to deserialize");
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_invalid_zones_rejected() {
        let mut config = CourseConfig::default();
        config.zones.goal_offset = 3.0;
        assert!(matches!(
            config.validate(),
            Err(CourseError::InvalidParameter { name: "zones.goal_offset", .. })
        ));

        let text = CourseConfig::default()
            .to_ron_string()
            .unwrap()
            .replace("spawn_length: 2.0", "spawn_length: -1.0");
        assert!(CourseConfig::from_ron_str(&text).is_err());
        assert!(matches!(
            CourseConfig::from_ron_str("(name: "),
            Err(CourseError::Config(_))
        ));
    }

    #[test]
    fn test_presets() {
        let strict = CourseConfig::preset_strict();
        assert_eq!(strict.bounds, BoundsPolicy::Strict);
        assert_eq!(strict.backfill, BackfillPolicy::Reject);

        let gentle = CourseConfig::preset_gentle();
        let extreme = CourseConfig::preset_extreme();
        assert!(
            gentle.difficulty.pit_depth.hard.max < extreme.difficulty.pit_depth.hard.max
        );
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            CourseConfig::load("/nonexistent/course.ron"),
            Err(CourseError::Io(_))
        ));
    }
}
