use crate::{
    config::Settings,
    game::{GamePhase, GameSession},
    models::{ActivityField, ActivityForm, ScoreResult},
    scoring::ScoreEngine,
    utils::{format_thousands, share_text},
};
use rand::{rngs::StdRng, SeedableRng};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    Editing,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Calculator,
    Game,
    Share,
}

pub struct App {
    pub input_mode: InputMode,
    pub current_screen: Screen,
    pub current_input: String,
    pub form: ActivityForm,
    pub selected_field_index: usize,
    pub score_result: Option<ScoreResult>,
    pub error_message: Option<String>,
    pub status_message: Option<String>,
    pub game: GameSession,
    pub should_quit: bool,
    engine: ScoreEngine,
    rng: StdRng,
    since_last_second: Duration,
}

impl App {
    pub fn new(settings: &Settings) -> Self {
        Self::with_rng(settings, StdRng::from_entropy())
    }

    pub fn with_rng(settings: &Settings, rng: StdRng) -> Self {
        Self {
            input_mode: InputMode::Normal,
            current_screen: Screen::Calculator,
            current_input: String::new(),
            form: ActivityForm::new(),
            selected_field_index: 0,
            score_result: None,
            error_message: None,
            status_message: None,
            game: GameSession::new(settings.game.clone()),
            should_quit: false,
            engine: settings.score_engine(),
            rng,
            since_last_second: Duration::ZERO,
        }
    }

    pub fn engine(&self) -> &ScoreEngine {
        &self.engine
    }

    pub fn selected_field(&self) -> ActivityField {
        ActivityField::ALL[self.selected_field_index]
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_field_index > 0 {
            self.selected_field_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_field_index < ActivityField::ALL.len() - 1 {
            self.selected_field_index += 1;
        }
    }

    pub fn start_editing(&mut self) {
        self.current_input = self.form.get(self.selected_field()).unwrap_or("").to_string();
        self.input_mode = InputMode::Editing;
    }

    pub fn push_char(&mut self, c: char) {
        if c.is_ascii_digit() || (c == '-' && self.current_input.is_empty()) {
            self.current_input.push(c);
        }
    }

    pub fn commit_input(&mut self) {
        let field = self.selected_field();
        self.form.set(field, self.current_input.trim());
        self.current_input.clear();
        self.input_mode = InputMode::Normal;
    }

    /// Commit the field being edited and continue with the next one.
    pub fn commit_and_advance(&mut self) {
        self.commit_input();
        self.move_selection_down();
        self.start_editing();
    }

    pub fn cancel_editing(&mut self) {
        self.current_input.clear();
        self.input_mode = InputMode::Normal;
    }

    pub fn calculate(&mut self) {
        match self.engine.compute_form(&self.form) {
            Ok(result) => {
                self.status_message = Some(format!(
                    "Goon Score Calculated! You are a {} with {} points!",
                    result.rank.name,
                    format_thousands(result.total_score)
                ));
                self.error_message = None;
                self.score_result = Some(result);
            }
            Err(e) => {
                self.error_message = Some(e.to_string());
                self.status_message = None;
            }
        }
    }

    pub fn reset_calculator(&mut self) {
        self.form.clear();
        self.current_input.clear();
        self.input_mode = InputMode::Normal;
        self.selected_field_index = 0;
        self.score_result = None;
        self.error_message = None;
        self.status_message = None;
    }

    pub fn share_text(&self) -> Option<String> {
        self.score_result.as_ref().map(share_text)
    }

    pub fn open_share(&mut self) {
        if self.score_result.is_some() {
            self.current_screen = Screen::Share;
        } else {
            self.error_message = Some("Calculate your Goon Score before sharing".to_string());
        }
    }

    pub fn open_game(&mut self) {
        self.current_screen = Screen::Game;
    }

    pub fn game_click(&mut self) -> Option<u64> {
        self.game.click(&mut self.rng)
    }

    /// Copy the final game score into the calculator's game score field.
    pub fn use_game_score(&mut self) {
        if self.game.phase() == GamePhase::Over {
            self.form.set(ActivityField::GameScore, self.game.score().to_string());
            self.status_message = Some(format!("Best Game Score set to {}", self.game.score()));
            self.current_screen = Screen::Calculator;
        }
    }

    pub fn on_tick(&mut self, elapsed: Duration) {
        if self.game.phase() != GamePhase::Running {
            self.since_last_second = Duration::ZERO;
            return;
        }

        self.since_last_second += elapsed;
        while self.since_last_second >= Duration::from_secs(1) {
            self.since_last_second -= Duration::from_secs(1);
            self.game.tick();
        }
    }

    pub fn back_to_calculator(&mut self) {
        self.current_screen = Screen::Calculator;
    }
}
