pub mod models;
pub mod config;
pub mod scoring;
pub mod game;
pub mod utils;
pub mod tui;

pub use models::{
    ActivityField, ActivityForm, ActivityInput, RankTier, ScoreError, ScoreResult, Result,
    RANK_TIERS,
};
pub use config::Settings;
pub use scoring::ScoreEngine;
