//! Simulation state
//!
//! `SimState` is a plain value: no RNG, no config, fully serializable. The
//! engine owns one and rewrites it tick by tick. Cloning a state and diffing
//! it later is the supported way to observe a game from the outside.

use serde::{Deserialize, Serialize};

use crate::sim::config::Config;

/// What an obstacle is made of. The spawn step only ever produces barriers;
/// pits exist in the data model for hand-built tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ObstacleKind {
    #[default]
    Barrier,
    Pit,
}

impl ObstacleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObstacleKind::Barrier => "barrier",
            ObstacleKind::Pit => "pit",
        }
    }
}

/// One obstacle on the track.
///
/// `position` is the leading (truck-side) cell; the obstacle occupies
/// `position ..= position + width - 1`. Positions go negative once the
/// obstacle has driven past the start of the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    pub position: i32,
    pub width: i32,
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn new(position: i32, width: i32) -> Self {
        Self {
            position,
            width,
            kind: ObstacleKind::Barrier,
        }
    }

    /// Cell nearest the truck.
    pub fn leading_edge(&self) -> i32 {
        self.position
    }

    /// Cell farthest from the truck.
    pub fn trailing_edge(&self) -> i32 {
        self.position + self.width - 1
    }

    /// Whether this obstacle occupies `cell`.
    pub fn covers(&self, cell: i32) -> bool {
        cell >= self.leading_edge() && cell <= self.trailing_edge()
    }
}

/// Full dynamic state of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimState {
    pub lives: u32,
    pub score: u64,
    pub level: u32,
    pub tick_counter: u64,
    pub jump_ticks_left: u32,
    pub game_over: bool,
    pub level_complete: bool,
    pub obstacles: Vec<Obstacle>,
}

impl SimState {
    /// Fresh state at tick zero, level one, empty track.
    pub fn new(config: &Config) -> Self {
        Self {
            lives: config.lives,
            score: 0,
            level: 1,
            tick_counter: 0,
            jump_ticks_left: 0,
            game_over: false,
            level_complete: false,
            obstacles: Vec::new(),
        }
    }

    /// True while a jump is in progress.
    pub fn is_airborne(&self) -> bool {
        self.jump_ticks_left > 0
    }

    /// Read-only copy of the fields a display layer needs.
    pub fn snapshot(&self) -> TrackSnapshot {
        TrackSnapshot {
            lives: self.lives,
            score: self.score,
            level: self.level,
            jump_ticks_left: self.jump_ticks_left,
            game_over: self.game_over,
            obstacles: self
                .obstacles
                .iter()
                .map(|o| (o.position, o.width))
                .collect(),
        }
    }

    /// Render the track as one character per cell.
    ///
    /// `.` empty, `#` obstacle, `T` truck. The truck is drawn last, so it
    /// covers any obstacle currently on its cell. Obstacle cells outside
    /// `0..track_length` are simply not drawn.
    pub fn render_track(&self, config: &Config) -> String {
        let mut cells = vec!['.'; config.track_length as usize];
        for obstacle in &self.obstacles {
            for cell in obstacle.leading_edge()..=obstacle.trailing_edge() {
                if cell >= 0 && cell < config.track_length {
                    cells[cell as usize] = '#';
                }
            }
        }
        cells[config.truck_position as usize] = 'T';
        cells.into_iter().collect()
    }
}

/// Flat, display-oriented view of a [`SimState`]. Obstacles are
/// `(position, width)` pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSnapshot {
    pub lives: u32,
    pub score: u64,
    pub level: u32,
    pub jump_ticks_left: u32,
    pub game_over: bool,
    pub obstacles: Vec<(i32, i32)>,
}
