//! Deterministic replay
//!
//! A replay is a config, a seed and a list of timestamped jump commands.
//! Running the same replay twice produces bit-identical final states, which
//! is the backbone of the determinism tests and of reproducing reported
//! games from a one-line description.

use serde::{Deserialize, Serialize};

use super::config::Config;
use super::state::SimState;
use super::tick::Game;

/// One scheduled input: press jump right before the step that takes the
/// counter past `tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayStep {
    pub tick: u64,
    pub jump: bool,
}

/// Run a scripted game to completion and hand back the final state.
///
/// Inputs are consumed in order, each at most once, as soon as the tick
/// counter has reached their timestamp; the engine then advances one step.
/// Stops after `max_ticks` steps or when the game ends, whichever comes
/// first.
pub fn run_replay(config: &Config, seed: u64, inputs: &[ReplayStep], max_ticks: u64) -> SimState {
    let mut game = Game::with_seed(config.clone(), seed);
    let mut pending = inputs.iter();
    let mut next = pending.next();

    for _ in 0..max_ticks {
        while let Some(step) = next {
            if step.tick > game.state().tick_counter {
                break;
            }
            if step.jump {
                game.jump();
            }
            next = pending.next();
        }

        game.tick();
        if game.state().game_over {
            break;
        }
    }

    log::debug!(
        "replay done: seed={} ticks={} score={} game_over={}",
        seed,
        game.state().tick_counter,
        game.state().score,
        game.state().game_over
    );
    game.state().clone()
}
