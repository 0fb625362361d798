use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameSettings {
    pub duration_seconds: u32,
    pub min_award: u64,
    pub max_award: u64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            duration_seconds: 60,
            min_award: 50,
            max_award: 149,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GamePhase {
    Ready,
    Running,
    Paused,
    Over,
}

/// One round of Goon Dash: click as often as possible before the clock
/// runs out.
#[derive(Debug, Clone)]
pub struct GameSession {
    settings: GameSettings,
    phase: GamePhase,
    score: u64,
    time_left: u32,
}

impl GameSession {
    pub fn new(settings: GameSettings) -> Self {
        let time_left = settings.duration_seconds;
        Self {
            settings,
            phase: GamePhase::Ready,
            score: 0,
            time_left,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn start(&mut self) {
        self.phase = GamePhase::Running;
        self.score = 0;
        self.time_left = self.settings.duration_seconds;
        info!("Goon Dash started ({}s)", self.time_left);
    }

    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
            other => other,
        };
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.settings.clone());
    }

    /// Advance the clock by one second.
    pub fn tick(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }

        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            self.phase = GamePhase::Over;
            info!("Goon Dash over with {} points", self.score);
        }
    }

    /// End-of-round verdict for the current score.
    pub fn verdict(&self) -> &'static str {
        match self.score {
            s if s > 5_000 => "Epic Goon Performance!",
            s if s > 2_000 => "Solid Goon Work!",
            _ => "Keep Gooning!",
        }
    }

    /// Collect tokens. Returns the award, or `None` when not running.
    pub fn click<R: Rng>(&mut self, rng: &mut R) -> Option<u64> {
        if self.phase != GamePhase::Running {
            return None;
        }

        let award = rng.gen_range(self.settings.min_award..=self.settings.max_award);
        self.score = self.score.saturating_add(award);
        Some(award)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_clicks_only_count_while_running() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut game = GameSession::new(GameSettings::default());

        assert_eq!(game.click(&mut rng), None);

        game.start();
        let award = game.click(&mut rng).unwrap();
        assert!((50..=149).contains(&award));
        assert_eq!(game.score(), award);

        game.toggle_pause();
        assert_eq!(game.phase(), GamePhase::Paused);
        assert_eq!(game.click(&mut rng), None);
        game.tick();
        assert_eq!(game.time_left(), 60);

        game.toggle_pause();
        assert_eq!(game.phase(), GamePhase::Running);
    }

    #[test]
    fn test_clock_runs_out() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut game = GameSession::new(GameSettings { duration_seconds: 3, ..Default::default() });

        game.start();
        game.click(&mut rng);
        let score = game.score();
        for _ in 0..3 {
            game.tick();
        }

        assert_eq!(game.phase(), GamePhase::Over);
        assert_eq!(game.time_left(), 0);
        assert_eq!(game.click(&mut rng), None);
        assert_eq!(game.score(), score);

        game.tick();
        assert_eq!(game.time_left(), 0);
    }

    #[test]
    fn test_start_and_reset_clear_score() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut game = GameSession::new(GameSettings::default());

        game.start();
        game.click(&mut rng);
        game.tick();
        game.start();
        assert_eq!(game.score(), 0);
        assert_eq!(game.time_left(), 60);

        game.click(&mut rng);
        game.reset();
        assert_eq!(game.phase(), GamePhase::Ready);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_score_saturates_with_huge_awards() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut game = GameSession::new(GameSettings {
            min_award: u64::MAX / 2 + 1,
            max_award: u64::MAX,
            ..Default::default()
        });

        game.start();
        game.click(&mut rng);
        game.click(&mut rng);
        game.click(&mut rng);
        assert_eq!(game.score(), u64::MAX);
    }

    #[test]
    fn test_verdict_thresholds() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut game = GameSession::new(GameSettings { min_award: 1_000, max_award: 1_000, ..Default::default() });
        assert_eq!(game.verdict(), "Keep Gooning!");

        game.start();
        game.click(&mut rng);
        game.click(&mut rng);
        assert_eq!(game.verdict(), "Keep Gooning!");
        game.click(&mut rng);
        assert_eq!(game.verdict(), "Solid Goon Work!");
        game.click(&mut rng);
        game.click(&mut rng);
        assert_eq!(game.verdict(), "Solid Goon Work!");
        game.click(&mut rng);
        assert_eq!(game.verdict(), "Epic Goon Performance!");
    }
}
