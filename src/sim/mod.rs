//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, owned by the engine
//! - No rendering or platform dependencies
//!
//! `state` holds the serializable model, `tick` the engine that rewrites it,
//! `event` the discrete transition reports, `replay` scripted reruns and
//! `codec` the one-line text format.

pub mod codec;
pub mod config;
pub mod event;
pub mod replay;
pub mod state;
pub mod tick;

pub use codec::{decode, decode_score, encode, validate};
pub use config::{Config, Preset};
pub use event::{EventRecord, GameEvent};
pub use replay::{ReplayStep, run_replay};
pub use state::{Obstacle, ObstacleKind, SimState, TrackSnapshot};
pub use tick::{Game, LEVEL_CLEAR_ESTIMATE};
