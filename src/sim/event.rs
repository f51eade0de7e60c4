//! Discrete gameplay events
//!
//! Every notable transition is reported as a `GameEvent`. Codes are part of
//! the external contract (clients key on them), so they are fixed numbers,
//! not `as`-casts of variant order. Rejected commands are events too: a
//! refused jump reports `GameOver` or `AlreadyJumping` rather than an error.

use serde::{Deserialize, Serialize};

/// One gameplay event, carried as a stable `(code, label)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GameEvent {
    /// Nothing reported yet
    #[default]
    None,
    /// Jump rejected: the game is already over
    GameOver,
    /// Jump rejected: the truck is still airborne
    AlreadyJumping,
    /// Jump accepted
    Jump,
    /// Airborne countdown ticked down
    Tick,
    /// Grounded collision, one life lost
    Crash,
    /// Lives hit zero, the game latched terminal
    GameOverTransition,
    /// Obstacle fully passed the truck and scored
    Cleared,
    /// Level advanced
    LevelUp,
}

impl GameEvent {
    /// Stable numeric code. Negative codes are rejections of a command that
    /// can never succeed again this game.
    pub fn code(&self) -> i8 {
        match self {
            GameEvent::None => 0,
            GameEvent::GameOver => -1,
            GameEvent::AlreadyJumping => 1,
            GameEvent::Jump => 2,
            GameEvent::Tick => 3,
            GameEvent::Crash => 4,
            GameEvent::GameOverTransition => 5,
            GameEvent::Cleared => 6,
            GameEvent::LevelUp => 7,
        }
    }

    /// Stable string label, matching the variant name.
    pub fn label(&self) -> &'static str {
        match self {
            GameEvent::None => "None",
            GameEvent::GameOver => "GameOver",
            GameEvent::AlreadyJumping => "AlreadyJumping",
            GameEvent::Jump => "Jump",
            GameEvent::Tick => "Tick",
            GameEvent::Crash => "Crash",
            GameEvent::GameOverTransition => "GameOverTransition",
            GameEvent::Cleared => "Cleared",
            GameEvent::LevelUp => "LevelUp",
        }
    }

    /// True for events that report a refused jump.
    pub fn is_rejection(&self) -> bool {
        matches!(self, GameEvent::GameOver | GameEvent::AlreadyJumping)
    }
}

/// One entry in a session's append-only event log.
///
/// `tick` and `jump_ticks_left` are sampled right after the call that
/// produced the event, so the record reflects the state the event left
/// behind, not the state it found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub event: GameEvent,
    pub tick: u64,
    pub jump_ticks_left: u32,
}
