//! Serialized-state text format
//!
//! A compact single-line encoding used for dumps, copy-paste bug reports and
//! cross-process handoff:
//!
//! ```text
//! lives,score,level,tickCounter,jumpTicksLeft,gameOver,levelComplete|pos,width;pos,width;
//! ```
//!
//! Scalars come first in that fixed order, booleans as literal `true` /
//! `false`, then a `|`, then one `pos,width;` chunk per obstacle. Decoding
//! is a total function: unparseable scalars take defined fallbacks and
//! malformed obstacle chunks are skipped, so any string yields a state.
//! Integers are strict (no whitespace trimming). Obstacle kind is not
//! serialized; decoded obstacles are barriers.

use std::str::FromStr;

use super::state::{Obstacle, SimState};

/// Encode a state as one line.
pub fn encode(state: &SimState) -> String {
    let obstacles: String = state
        .obstacles
        .iter()
        .map(|o| format!("{},{};", o.position, o.width))
        .collect();
    format!(
        "{},{},{},{},{},{},{}|{}",
        state.lives,
        state.score,
        state.level,
        state.tick_counter,
        state.jump_ticks_left,
        state.game_over,
        state.level_complete,
        obstacles
    )
}

/// Cheap shape check: a `|` separator with at least seven scalar fields in
/// front of it. Does not attempt to parse the fields.
pub fn validate(encoded: &str) -> bool {
    match encoded.split_once('|') {
        Some((scalars, _)) => scalars.split(',').count() >= 7,
        None => false,
    }
}

/// Decode a state from one line. Never fails: missing or unparseable
/// scalars fall back (numbers to 0, `level` to 1, booleans to false) and
/// malformed obstacle chunks are dropped.
pub fn decode(encoded: &str) -> SimState {
    let (scalars, obstacles) = encoded.split_once('|').unwrap_or((encoded, ""));
    let mut fields = scalars.split(',');

    SimState {
        lives: parse_or(fields.next(), 0),
        score: parse_or(fields.next(), 0),
        level: parse_or(fields.next(), 1),
        tick_counter: parse_or(fields.next(), 0),
        jump_ticks_left: parse_or(fields.next(), 0),
        game_over: parse_or(fields.next(), false),
        level_complete: parse_or(fields.next(), false),
        obstacles: obstacles
            .split(';')
            .filter(|chunk| !chunk.is_empty())
            .filter_map(|chunk| {
                let (position, width) = chunk.split_once(',')?;
                Some(Obstacle::new(position.parse().ok()?, width.parse().ok()?))
            })
            .collect(),
    }
}

/// Pull just the score (field index 1) out of an encoding, 0 on anything
/// unparseable. For score boards that don't need the whole state.
pub fn decode_score(encoded: &str) -> u64 {
    let scalars = encoded.split_once('|').map_or(encoded, |(s, _)| s);
    parse_or(scalars.split(',').nth(1), 0)
}

fn parse_or<T: FromStr>(field: Option<&str>, fallback: T) -> T {
    field.and_then(|f| f.parse().ok()).unwrap_or(fallback)
}
