//! Key-to-action mapping
//!
//! UI-agnostic boundary adapter: frontends hand over whatever key name
//! their toolkit produces and get back the one action the game knows.
//! No simulation logic lives here.

use serde::{Deserialize, Serialize};

/// The only actions a player can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyAction {
    Jump,
    None,
}

/// Map a key name to an action. Case-insensitive, but not trimmed: the
/// space bar arrives as a literal `" "` and must stay that way.
pub fn map_key(key: &str) -> KeyAction {
    match key.to_lowercase().as_str() {
        " " | "space" | "spacebar" | "arrowup" | "up" | "uparrow" | "w" => KeyAction::Jump,
        _ => KeyAction::None,
    }
}
