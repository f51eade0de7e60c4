//! Session layer
//!
//! A `Session` wraps one `Game` with the bookkeeping a frontend wants but
//! the engine shouldn't carry: an append-only event log, a running stats
//! tally and the high-score ledger. Events flow strictly outward; nothing
//! recorded here feeds back into simulation.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::highscores::HighScores;
use crate::sim::config::Config;
use crate::sim::event::{EventRecord, GameEvent};
use crate::sim::tick::Game;

/// Flat tally of what happened since the last reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub ticks: u64,
    pub jumps: u64,
    pub rejected_jumps: u64,
    pub crashes: u64,
    pub cleared: u64,
    pub level_ups: u64,
}

/// One game plus its observers. The ledger outlives individual games;
/// stats and the event log reset with [`Session::start_new_game`].
pub struct Session {
    game: Game,
    stats: SessionStats,
    events: Vec<EventRecord>,
    high_scores: HighScores,
    score_submitted: bool,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self::from_game(Game::new(config))
    }

    pub fn with_seed(config: Config, seed: u64) -> Self {
        Self::from_game(Game::with_seed(config, seed))
    }

    fn from_game(game: Game) -> Self {
        Self {
            game,
            stats: SessionStats::default(),
            events: Vec::new(),
            high_scores: HighScores::new(),
            score_submitted: false,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    /// Forwarded jump. The outcome, accepted or refused, lands in the log.
    pub fn jump(&mut self) -> GameEvent {
        let event = self.game.jump();
        match event {
            GameEvent::Jump => self.stats.jumps += 1,
            _ => self.stats.rejected_jumps += 1,
        }
        self.record(event);
        event
    }

    /// Forwarded tick. Every emitted event is logged in order.
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let events = self.game.tick();
        self.stats.ticks += 1;
        for event in &events {
            match event {
                GameEvent::Crash => self.stats.crashes += 1,
                GameEvent::Cleared => self.stats.cleared += 1,
                _ => {}
            }
            self.record(*event);
        }
        events
    }

    pub fn set_level_complete(&mut self, complete: bool) {
        self.game.set_level_complete(complete);
    }

    /// Forwarded level advance; logs `LevelUp` when it fires.
    pub fn advance_level_if_complete(&mut self) -> bool {
        if self.game.advance_level_if_complete() {
            self.stats.level_ups += 1;
            self.record(GameEvent::LevelUp);
            true
        } else {
            false
        }
    }

    /// Offer the finished game's score to the ledger. None while the game
    /// is still live, and on repeat calls for the same game.
    pub fn submit_score_if_high(&mut self) -> Option<usize> {
        if !self.game.state().game_over || self.score_submitted {
            return None;
        }
        self.score_submitted = true;
        let state = self.game.state();
        self.high_scores
            .submit(state.score, state.level, now_millis())
    }

    /// Fresh game under the same config: stats and event log reset, the
    /// high-score ledger carries over.
    pub fn start_new_game(&mut self) {
        self.game.start_new_game();
        self.stats = SessionStats::default();
        self.events.clear();
        self.score_submitted = false;
    }

    fn record(&mut self, event: GameEvent) {
        let state = self.game.state();
        self.events.push(EventRecord {
            event,
            tick: state.tick_counter,
            jump_ticks_left: state.jump_ticks_left,
        });
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doomed_config() -> Config {
        Config {
            track_length: 10,
            truck_position: 0,
            jump_duration_ticks: 3,
            lives: 1,
            obstacle_base_speed: 1,
            max_level: 99,
            points_per_obstacle: 80,
            points_level_bonus: 60,
            obstacle_spawn_interval: 1,
            min_obstacle_width: 1,
            max_obstacle_width: 1,
        }
    }

    #[test]
    fn test_stats_tally_jumps_and_rejections() {
        let mut session = Session::with_seed(Config::default(), 5);
        session.jump();
        session.jump(); // airborne, rejected
        assert_eq!(session.stats().jumps, 1);
        assert_eq!(session.stats().rejected_jumps, 1);
    }

    #[test]
    fn test_stats_count_ticks_crashes_and_clears() {
        let mut session = Session::with_seed(doomed_config(), 42);
        for _ in 0..9 {
            session.tick();
        }
        session.jump();
        session.tick();
        session.tick(); // first obstacle cleared here
        assert_eq!(session.stats().ticks, 11);
        assert_eq!(session.stats().cleared, 1);
        assert_eq!(session.stats().crashes, 0);
        // Run aground: next grounded occupied tick crashes and ends it.
        session.tick();
        assert_eq!(session.stats().crashes, 1);
        assert!(session.game().state().game_over);
    }

    #[test]
    fn test_event_log_is_append_only_and_ordered() {
        let mut session = Session::with_seed(doomed_config(), 42);
        session.jump();
        for _ in 0..3 {
            session.tick();
        }
        let events: Vec<GameEvent> = session.events().iter().map(|r| r.event).collect();
        assert_eq!(
            events,
            vec![
                GameEvent::Jump,
                GameEvent::Tick,
                GameEvent::Tick,
                GameEvent::Tick,
            ]
        );
        // Records carry post-call counters: countdown 3 set, then 2, 1, 0.
        assert_eq!(session.events()[0].tick, 0);
        assert_eq!(session.events()[0].jump_ticks_left, 3);
        assert_eq!(session.events()[3].tick, 3);
        assert_eq!(session.events()[3].jump_ticks_left, 0);
    }

    #[test]
    fn test_level_up_is_logged_and_counted() {
        let mut session = Session::with_seed(Config::default(), 5);
        session.set_level_complete(true);
        assert!(session.advance_level_if_complete());
        assert_eq!(session.stats().level_ups, 1);
        assert_eq!(
            session.events().last().map(|r| r.event),
            Some(GameEvent::LevelUp)
        );
        assert!(!session.advance_level_if_complete());
        assert_eq!(session.stats().level_ups, 1);
    }

    #[test]
    fn test_submission_gated_on_game_over() {
        let mut session = Session::with_seed(doomed_config(), 42);
        assert_eq!(session.submit_score_if_high(), None);
        for _ in 0..9 {
            session.tick();
        }
        session.jump();
        session.tick();
        session.tick(); // score is 85 now
        for _ in 0..5 {
            session.tick(); // ride into the pile-up
        }
        assert!(session.game().state().game_over);
        assert_eq!(session.submit_score_if_high(), Some(1));
        // Same game, second offer: refused.
        assert_eq!(session.submit_score_if_high(), None);
        assert_eq!(session.high_scores().entries().len(), 1);
    }

    #[test]
    fn test_new_game_keeps_the_ledger() {
        let mut session = Session::with_seed(doomed_config(), 42);
        for _ in 0..9 {
            session.tick();
        }
        session.jump();
        for _ in 0..8 {
            session.tick();
        }
        assert!(session.game().state().game_over);
        assert!(session.submit_score_if_high().is_some());

        session.start_new_game();
        assert_eq!(*session.stats(), SessionStats::default());
        assert!(session.events().is_empty());
        assert!(!session.game().state().game_over);
        assert_eq!(session.high_scores().entries().len(), 1);
        // The fresh game may submit again once it ends with a score.
        for _ in 0..9 {
            session.tick();
        }
        session.jump();
        for _ in 0..8 {
            session.tick();
        }
        assert!(session.game().state().game_over);
        assert!(session.submit_score_if_high().is_some());
        assert_eq!(session.high_scores().entries().len(), 2);
    }
}
