//! High score leaderboard
//!
//! In-memory, sorted descending by score, capped. Serde derives are for the
//! JSON dump surface; nothing here touches disk.

use serde::{Deserialize, Serialize};

/// Default number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Final score
    pub score: u64,
    /// Level reached
    pub level: u32,
    /// Unix timestamp (ms) when achieved
    pub timestamp: u64,
}

/// High score leaderboard. Entries are only reachable read-only; all
/// mutation goes through [`HighScores::submit`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScores {
    entries: Vec<HighScoreEntry>,
    #[serde(default = "default_cap")]
    cap: usize,
}

fn default_cap() -> usize {
    MAX_HIGH_SCORES
}

impl Default for HighScores {
    fn default() -> Self {
        Self::new()
    }
}

impl HighScores {
    /// Empty leaderboard with the default cap.
    pub fn new() -> Self {
        Self::with_cap(MAX_HIGH_SCORES)
    }

    /// Empty leaderboard keeping at most `cap` entries.
    pub fn with_cap(cap: usize) -> Self {
        Self {
            entries: Vec::new(),
            cap,
        }
    }

    /// Check if a score would make the board. Zero never qualifies; a full
    /// board requires strictly beating the lowest kept entry.
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < self.cap {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// The rank a score would achieve (1-indexed), or None if it wouldn't
    /// make the board.
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Submit a finished game. Returns the rank achieved (1-indexed) or
    /// None if the score didn't qualify. Entries beyond the cap are evicted.
    pub fn submit(&mut self, score: u64, level: u32, timestamp: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry {
            score,
            level,
            timestamp,
        };

        // Insertion point keeps the list sorted descending; ties land after
        // the earlier entry with the same score.
        let rank = match self.entries.iter().position(|e| score > e.score) {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(self.cap);
        log::debug!("high score admitted: score={score} rank={rank}");
        Some(rank)
    }

    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    pub fn cap(&self) -> usize {
        self.cap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores_of(board: &HighScores) -> Vec<u64> {
        board.entries().iter().map(|e| e.score).collect()
    }

    #[test]
    fn test_five_games_sort_descending() {
        let mut board = HighScores::new();
        for (i, score) in [50u64, 80, 30, 90, 10].into_iter().enumerate() {
            assert!(board.submit(score, 1, i as u64).is_some());
        }
        assert_eq!(scores_of(&board), vec![90, 80, 50, 30, 10]);
    }

    #[test]
    fn test_zero_never_qualifies() {
        let mut board = HighScores::new();
        assert!(!board.qualifies(0));
        assert_eq!(board.submit(0, 1, 0), None);
        assert!(board.is_empty());
    }

    #[test]
    fn test_anything_qualifies_under_cap() {
        let board = HighScores::new();
        assert!(board.qualifies(1));
        assert_eq!(board.potential_rank(1), Some(1));
    }

    #[test]
    fn test_full_small_board_rejects_low_score() {
        let mut board = HighScores::with_cap(3);
        board.submit(90, 1, 0);
        board.submit(80, 1, 1);
        board.submit(50, 1, 2);
        assert_eq!(scores_of(&board), vec![90, 80, 50]);
        assert!(!board.qualifies(20));
        assert_eq!(board.submit(20, 1, 3), None);
        assert_eq!(scores_of(&board), vec![90, 80, 50]);
    }

    #[test]
    fn test_matching_lowest_does_not_qualify_when_full() {
        let mut board = HighScores::with_cap(3);
        board.submit(90, 1, 0);
        board.submit(80, 1, 1);
        board.submit(50, 1, 2);
        assert!(!board.qualifies(50));
        assert!(board.qualifies(51));
    }

    #[test]
    fn test_admission_evicts_the_lowest() {
        let mut board = HighScores::with_cap(3);
        board.submit(90, 1, 0);
        board.submit(80, 1, 1);
        board.submit(50, 2, 2);
        assert_eq!(board.submit(85, 3, 3), Some(2));
        assert_eq!(scores_of(&board), vec![90, 85, 80]);
        assert_eq!(board.entries().len(), 3);
    }

    #[test]
    fn test_ranks_are_one_indexed() {
        let mut board = HighScores::new();
        assert_eq!(board.submit(100, 1, 0), Some(1));
        assert_eq!(board.submit(200, 1, 1), Some(1));
        assert_eq!(board.submit(150, 1, 2), Some(2));
        assert_eq!(board.submit(50, 1, 3), Some(4));
    }

    #[test]
    fn test_tied_scores_keep_the_earlier_entry_first() {
        let mut board = HighScores::new();
        board.submit(100, 1, 11);
        assert_eq!(board.submit(100, 2, 22), Some(2));
        assert_eq!(board.entries()[0].timestamp, 11);
        assert_eq!(board.entries()[1].timestamp, 22);
    }

    #[test]
    fn test_top_score() {
        let mut board = HighScores::new();
        assert_eq!(board.top_score(), None);
        board.submit(40, 1, 0);
        board.submit(70, 1, 1);
        assert_eq!(board.top_score(), Some(70));
    }

    #[test]
    fn test_missing_cap_deserializes_to_default() {
        let board: HighScores = serde_json::from_str(r#"{"entries":[]}"#).unwrap();
        assert_eq!(board.cap(), MAX_HIGH_SCORES);
    }

    #[test]
    fn test_entry_carries_level_and_timestamp() {
        let mut board = HighScores::new();
        board.submit(123, 4, 1_700_000_000_000);
        let entry = board.entries()[0];
        assert_eq!(entry.score, 123);
        assert_eq!(entry.level, 4);
        assert_eq!(entry.timestamp, 1_700_000_000_000);
    }
}
