// crates/lab_game/src/score.rs

use serde::{Deserialize, Serialize};

/// Current round score plus the best seen by this process.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub current: u32,
    pub best: u32,
}

impl Score {
    pub fn new(best: u32) -> Self {
        Self { current: 0, best }
    }

    pub fn add(&mut self, points: u32) {
        self.current = self.current.saturating_add(points);
    }

    /// Clears the current score only.
    pub fn reset(&mut self) {
        self.current = 0;
    }

    /// Raises `best` to `current` when it is strictly higher.
    pub fn commit_best(&mut self) -> bool {
        if self.current > self.best {
            self.best = self.current;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_only_goes_up() {
        let mut score = Score::new(40);
        score.add(10);
        score.add(10);
        assert!(!score.commit_best());
        assert_eq!(score.best, 40);

        score.add(50);
        assert!(score.commit_best());
        assert_eq!(score.best, 70);
        assert!(!score.commit_best(), "equal is not higher");

        score.reset();
        assert_eq!(score, Score { current: 0, best: 70 });
    }
}
