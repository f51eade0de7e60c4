//! Rig Hopper - a deterministic single-lane obstacle game engine
//!
//! A stationary truck holds one cell of a scrolling track and jumps over
//! incoming obstacles. The whole game is a pure tick-driven simulation:
//! fixed step order, seeded RNG, serializable state, events out.
//!
//! Core modules:
//! - `sim`: the deterministic simulation (config, state, tick engine,
//!   events, replay, text codec)
//! - `session`: per-game bookkeeping (event log, stats, ledger submission)
//! - `highscores`: the capped, sorted score ledger
//! - `input`: key-name to action mapping for frontends
//! - `meta`: display palette and pacing constants, kept out of the engine

pub mod highscores;
pub mod input;
pub mod meta;
pub mod session;
pub mod sim;

pub use highscores::{HighScoreEntry, HighScores, MAX_HIGH_SCORES};
pub use input::{KeyAction, map_key};
pub use meta::{GameMeta, Palette};
pub use session::{Session, SessionStats};
pub use sim::{
    Config, EventRecord, Game, GameEvent, Obstacle, ObstacleKind, Preset, ReplayStep, SimState,
    TrackSnapshot, run_replay,
};
