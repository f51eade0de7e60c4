//! Structural game parameters
//!
//! A `Config` is created once per game instance and never mutated. Bounds are
//! enforced by [`Config::is_valid`], not by construction: callers that skip
//! validation get whatever the numbers imply.

use serde::{Deserialize, Serialize};

/// Track length in cells
pub const DEFAULT_TRACK_LENGTH: i32 = 24;
/// Truck cell (the truck never moves along the track)
pub const DEFAULT_TRUCK_POSITION: i32 = 0;
/// Ticks a jump keeps the truck airborne
pub const DEFAULT_JUMP_DURATION_TICKS: u32 = 6;
/// Starting lives
pub const DEFAULT_LIVES: u32 = 3;
/// Cells obstacles move per tick at level 1
pub const DEFAULT_OBSTACLE_BASE_SPEED: i32 = 1;
/// Level ceiling
pub const DEFAULT_MAX_LEVEL: u32 = 99;
/// Base score for clearing one obstacle
pub const DEFAULT_POINTS_PER_OBSTACLE: u64 = 80;
/// Flat bonus for finishing a level
pub const DEFAULT_POINTS_LEVEL_BONUS: u64 = 60;
/// Ticks between obstacle spawns
pub const DEFAULT_OBSTACLE_SPAWN_INTERVAL: u64 = 8;
/// Narrowest spawnable obstacle
pub const DEFAULT_MIN_OBSTACLE_WIDTH: i32 = 1;
/// Widest spawnable obstacle
pub const DEFAULT_MAX_OBSTACLE_WIDTH: i32 = 3;

/// Immutable structural parameters for one game instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Track length in cells (valid: 5..=50)
    pub track_length: i32,
    /// Fixed truck cell (valid: 0 <= p < track_length)
    pub truck_position: i32,
    /// Airborne ticks per jump (valid: 1..=20)
    pub jump_duration_ticks: u32,
    /// Starting lives (valid: 1..=10)
    pub lives: u32,
    /// Obstacle cells-per-tick before the level term (valid: >= 0)
    pub obstacle_base_speed: i32,
    /// Level ceiling (valid: >= 1)
    pub max_level: u32,
    /// Base award per cleared obstacle
    pub points_per_obstacle: u64,
    /// Flat award on level advance
    pub points_level_bonus: u64,
    /// Spawn one obstacle every this many ticks (valid: > 0)
    pub obstacle_spawn_interval: u64,
    /// Smallest spawn width (valid: >= 1)
    pub min_obstacle_width: i32,
    /// Largest spawn width (valid: >= min_obstacle_width)
    pub max_obstacle_width: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            track_length: DEFAULT_TRACK_LENGTH,
            truck_position: DEFAULT_TRUCK_POSITION,
            jump_duration_ticks: DEFAULT_JUMP_DURATION_TICKS,
            lives: DEFAULT_LIVES,
            obstacle_base_speed: DEFAULT_OBSTACLE_BASE_SPEED,
            max_level: DEFAULT_MAX_LEVEL,
            points_per_obstacle: DEFAULT_POINTS_PER_OBSTACLE,
            points_level_bonus: DEFAULT_POINTS_LEVEL_BONUS,
            obstacle_spawn_interval: DEFAULT_OBSTACLE_SPAWN_INTERVAL,
            min_obstacle_width: DEFAULT_MIN_OBSTACLE_WIDTH,
            max_obstacle_width: DEFAULT_MAX_OBSTACLE_WIDTH,
        }
    }
}

impl Config {
    /// Check every structural bound at once.
    ///
    /// Construction does not validate; callers are expected to check this
    /// before building a game from untrusted numbers.
    pub fn is_valid(&self) -> bool {
        (5..=50).contains(&self.track_length)
            && (0..self.track_length).contains(&self.truck_position)
            && (1..=20).contains(&self.jump_duration_ticks)
            && (1..=10).contains(&self.lives)
            && self.obstacle_base_speed >= 0
            && self.max_level >= 1
            && self.obstacle_spawn_interval > 0
            && self.min_obstacle_width >= 1
            && self.min_obstacle_width <= self.max_obstacle_width
    }
}

/// Named parameter bundles. Data only: a preset is just a `Config` source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Preset {
    Easy,
    #[default]
    Normal,
    Hard,
    LongTrack,
    ShortJump,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Easy => "easy",
            Preset::Normal => "normal",
            Preset::Hard => "hard",
            Preset::LongTrack => "long-track",
            Preset::ShortJump => "short-jump",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Preset::Easy),
            "normal" | "default" => Some(Preset::Normal),
            "hard" => Some(Preset::Hard),
            "long-track" | "long_track" | "longtrack" => Some(Preset::LongTrack),
            "short-jump" | "short_jump" | "shortjump" => Some(Preset::ShortJump),
            _ => None,
        }
    }

    /// The parameter bundle for this preset.
    pub fn config(&self) -> Config {
        let normal = Config::default();
        match self {
            Preset::Normal => normal,
            Preset::Easy => Config {
                jump_duration_ticks: 8,
                lives: 5,
                obstacle_spawn_interval: 10,
                max_obstacle_width: 2,
                ..normal
            },
            Preset::Hard => Config {
                track_length: 20,
                jump_duration_ticks: 4,
                lives: 2,
                obstacle_base_speed: 2,
                obstacle_spawn_interval: 5,
                min_obstacle_width: 2,
                ..normal
            },
            Preset::LongTrack => Config {
                track_length: 48,
                ..normal
            },
            Preset::ShortJump => Config {
                jump_duration_ticks: 3,
                ..normal
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().is_valid());
    }

    #[test]
    fn test_all_presets_are_valid() {
        for preset in [
            Preset::Easy,
            Preset::Normal,
            Preset::Hard,
            Preset::LongTrack,
            Preset::ShortJump,
        ] {
            assert!(preset.config().is_valid(), "invalid preset {:?}", preset);
        }
    }

    #[test]
    fn test_track_length_bounds() {
        let mut config = Config::default();
        config.track_length = 4;
        assert!(!config.is_valid());
        config.track_length = 5;
        assert!(config.is_valid());
        config.track_length = 50;
        assert!(config.is_valid());
        config.track_length = 51;
        assert!(!config.is_valid());
    }

    #[test]
    fn test_truck_must_sit_on_the_track() {
        let mut config = Config::default();
        config.truck_position = -1;
        assert!(!config.is_valid());
        config.truck_position = config.track_length;
        assert!(!config.is_valid());
        config.truck_position = config.track_length - 1;
        assert!(config.is_valid());
    }

    #[test]
    fn test_jump_duration_bounds() {
        let mut config = Config::default();
        config.jump_duration_ticks = 0;
        assert!(!config.is_valid());
        config.jump_duration_ticks = 21;
        assert!(!config.is_valid());
        config.jump_duration_ticks = 20;
        assert!(config.is_valid());
    }

    #[test]
    fn test_width_ordering() {
        let mut config = Config::default();
        config.min_obstacle_width = 3;
        config.max_obstacle_width = 2;
        assert!(!config.is_valid());
        config.max_obstacle_width = 3;
        assert!(config.is_valid());
        config.min_obstacle_width = 0;
        assert!(!config.is_valid());
    }

    #[test]
    fn test_spawn_interval_must_be_positive() {
        let mut config = Config::default();
        config.obstacle_spawn_interval = 0;
        assert!(!config.is_valid());
    }

    #[test]
    fn test_preset_round_trip_names() {
        for preset in [
            Preset::Easy,
            Preset::Normal,
            Preset::Hard,
            Preset::LongTrack,
            Preset::ShortJump,
        ] {
            assert_eq!(Preset::from_str(preset.as_str()), Some(preset));
        }
        assert_eq!(Preset::from_str("LONG-TRACK"), Some(Preset::LongTrack));
        assert_eq!(Preset::from_str("nope"), None);
    }
}
