//! Tick engine
//!
//! `Game` advances a [`SimState`] one fixed step at a time. Everything in
//! here is deterministic: the only randomness is obstacle width, drawn from
//! an explicit seeded generator owned by the engine. Same config, same seed,
//! same command sequence, same bits out.
//!
//! Step order inside [`Game::tick`] is part of the contract and must not be
//! rearranged: counter, jump countdown, movement, clearance scoring,
//! grounded collision, spawn.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::config::Config;
use super::event::GameEvent;
use super::state::{Obstacle, SimState};

/// Rough obstacle-clearances-per-level figure used by the advisory
/// completion estimate. Nothing in the engine depends on it.
pub const LEVEL_CLEAR_ESTIMATE: u64 = 10;

/// One running game: immutable config, mutable state, seeded RNG.
pub struct Game {
    config: Config,
    state: SimState,
    rng: Pcg32,
    seed: u64,
    last_event: GameEvent,
}

impl Game {
    /// New game with a random seed.
    pub fn new(config: Config) -> Self {
        Self::with_seed(config, rand::random::<u64>())
    }

    /// New game with a fixed seed. Replays and tests use this.
    pub fn with_seed(config: Config, seed: u64) -> Self {
        log::debug!("new game: seed={seed}");
        Self {
            state: SimState::new(&config),
            config,
            rng: Pcg32::seed_from_u64(seed),
            seed,
            last_event: GameEvent::None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The most recent event as a `(code, label)` pair. Stays put until the
    /// next call that emits something.
    pub fn last_event(&self) -> (i8, &'static str) {
        (self.last_event.code(), self.last_event.label())
    }

    /// Reset to a fresh state under the same config.
    ///
    /// The RNG stream keeps running, so back-to-back games see different
    /// obstacle widths. Bit-identical reruns build a new engine with
    /// [`Game::with_seed`] instead.
    pub fn start_new_game(&mut self) {
        self.state = SimState::new(&self.config);
        self.last_event = GameEvent::None;
    }

    /// Start a jump. Refusals are reported as events, not errors: `GameOver`
    /// when the game has ended, `AlreadyJumping` while airborne. A refused
    /// jump changes no state.
    pub fn jump(&mut self) -> GameEvent {
        let event = if self.state.game_over {
            GameEvent::GameOver
        } else if self.state.jump_ticks_left > 0 {
            GameEvent::AlreadyJumping
        } else {
            self.state.jump_ticks_left = self.config.jump_duration_ticks;
            GameEvent::Jump
        };
        self.last_event = event;
        event
    }

    /// Advance one step, returning the events emitted in order.
    ///
    /// No-op (empty vec) once the game is over. The last-event pair is only
    /// touched when at least one event came out of the step.
    pub fn tick(&mut self) -> Vec<GameEvent> {
        if self.state.game_over {
            return Vec::new();
        }
        let mut events = Vec::new();
        self.state.tick_counter += 1;

        if self.state.jump_ticks_left > 0 {
            self.state.jump_ticks_left -= 1;
            events.push(GameEvent::Tick);
        }

        self.move_obstacles();
        self.score_cleared(&mut events);

        // The countdown decrement above already happened, so a truck landing
        // on an occupied cell crashes on the same tick it lands.
        if self.state.jump_ticks_left == 0 && self.grounded_collision() {
            self.state.lives = self.state.lives.saturating_sub(1);
            events.push(GameEvent::Crash);
            log::debug!(
                "crash: tick={} lives={}",
                self.state.tick_counter,
                self.state.lives
            );
            if self.state.lives == 0 {
                self.state.game_over = true;
                events.push(GameEvent::GameOverTransition);
                log::info!(
                    "game over: tick={} score={} level={}",
                    self.state.tick_counter,
                    self.state.score,
                    self.state.level
                );
            }
        }

        // Spawning still happens on the tick that ended the game.
        if self.state.tick_counter > 0
            && self.state.tick_counter % self.config.obstacle_spawn_interval == 0
        {
            self.spawn_obstacle();
        }

        if let Some(last) = events.last() {
            self.last_event = *last;
        }
        events
    }

    /// Set or clear the level-complete flag. What "complete" means is the
    /// caller's call; the engine only acts on the flag.
    pub fn set_level_complete(&mut self, complete: bool) {
        self.state.level_complete = complete;
    }

    /// Consume the level-complete flag: bump the level (capped at
    /// `max_level`), award the level bonus, wipe the track. Returns whether
    /// anything happened.
    pub fn advance_level_if_complete(&mut self) -> bool {
        if !self.state.level_complete || self.state.game_over {
            return false;
        }
        self.state.level_complete = false;
        self.state.level = (self.state.level + 1).min(self.config.max_level);
        self.state.score += self.config.points_level_bonus;
        self.state.obstacles.clear();
        self.last_event = GameEvent::LevelUp;
        log::debug!(
            "level up: level={} score={}",
            self.state.level,
            self.state.score
        );
        true
    }

    /// Advisory estimate of whether the current score looks like a finished
    /// level: [`LEVEL_CLEAR_ESTIMATE`] clearances at the current level's
    /// per-obstacle award. The engine never calls this itself.
    pub fn should_level_complete(&self) -> bool {
        let per_clear = self.config.points_per_obstacle + u64::from(self.state.level) * 5;
        self.state.score >= u64::from(self.state.level) * LEVEL_CLEAR_ESTIMATE * per_clear
    }

    /// Cells obstacles travel this tick. The level term gives stepped
    /// difficulty: one extra cell every two levels.
    fn obstacle_speed(&self) -> i32 {
        self.config.obstacle_base_speed + (self.state.level / 2) as i32
    }

    fn move_obstacles(&mut self) {
        let speed = self.obstacle_speed();
        let truck = self.config.truck_position;
        for obstacle in &mut self.state.obstacles {
            obstacle.position -= speed;
        }
        // Anything fully past the truck before this move was scored and
        // removed on an earlier tick; drop stragglers from hand-built or
        // deserialized states without scoring them.
        self.state
            .obstacles
            .retain(|o| o.trailing_edge() >= truck - speed);
    }

    fn score_cleared(&mut self, events: &mut Vec<GameEvent>) {
        let truck = self.config.truck_position;
        let award = self.config.points_per_obstacle + u64::from(self.state.level) * 5;
        let before = self.state.obstacles.len();
        self.state.obstacles.retain(|o| o.trailing_edge() >= truck);
        let cleared = before - self.state.obstacles.len();
        for _ in 0..cleared {
            self.state.score += award;
            events.push(GameEvent::Cleared);
        }
    }

    fn grounded_collision(&self) -> bool {
        let truck = self.config.truck_position;
        self.state.obstacles.iter().any(|o| o.covers(truck))
    }

    fn spawn_obstacle(&mut self) {
        let width = self
            .rng
            .random_range(self.config.min_obstacle_width..=self.config.max_obstacle_width);
        log::trace!("spawn: tick={} width={width}", self.state.tick_counter);
        self.state
            .obstacles
            .push(Obstacle::new(self.config.track_length - 1, width));
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut SimState {
        &mut self.state
    }
}
