use serde::{Deserialize, Serialize};
use config::{Config, ConfigError, File};
use std::path::Path;

use crate::game::GameSettings;
use crate::models::{Result, ScoreError};
use crate::scoring::ScoreEngine;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub app: AppSettings,
    pub scoring: ScoringSettings,
    pub game: GameSettings,
    pub tui: TuiSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub version: String,
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringSettings {
    /// Negative counters are accepted as-is unless this is turned off.
    pub allow_negative_inputs: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiSettings {
    pub tick_rate_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: AppSettings {
                name: "Goon Score".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                log_level: "info".to_string(),
            },
            scoring: ScoringSettings {
                allow_negative_inputs: true,
            },
            game: GameSettings::default(),
            tui: TuiSettings {
                tick_rate_ms: 250,
            },
        }
    }
}

impl Settings {
    pub fn new() -> std::result::Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("GOON_SCORE").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Layered settings, falling back to defaults when a layer is broken.
    /// The error that forced the fallback is handed back for reporting.
    pub fn load() -> (Self, Option<ConfigError>) {
        match Self::new() {
            Ok(settings) => (settings, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> std::result::Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::from(path.as_ref()))
            .build()?;

        s.try_deserialize()
    }

    pub fn score_engine(&self) -> ScoreEngine {
        ScoreEngine::new().with_negative_inputs(self.scoring.allow_negative_inputs)
    }

    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.app.log_level.to_lowercase().as_str()) {
            return Err(ScoreError::Config(format!(
                "Unknown log level '{}', expected one of {}",
                self.app.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        if self.game.duration_seconds == 0 {
            return Err(ScoreError::Config("Game duration must be at least one second".to_string()));
        }

        if self.game.min_award > self.game.max_award {
            return Err(ScoreError::Config(format!(
                "Game min_award {} exceeds max_award {}",
                self.game.min_award, self.game.max_award
            )));
        }

        if self.tui.tick_rate_ms == 0 || self.tui.tick_rate_ms > 1_000 {
            return Err(ScoreError::Config("TUI tick rate must be between 1 and 1000 ms".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert!(settings.scoring.allow_negative_inputs);
        assert_eq!(settings.game.duration_seconds, 60);
    }

    #[test]
    fn test_from_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[app]
log_level = "debug"

[scoring]
allow_negative_inputs = false

[game]
duration_seconds = 30
"#
        )
        .unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.app.log_level, "debug");
        assert!(!settings.scoring.allow_negative_inputs);
        assert_eq!(settings.game.duration_seconds, 30);
        assert_eq!(settings.game.max_award, 149);
        assert_eq!(settings.tui.tick_rate_ms, 250);
    }

    #[test]
    fn test_load_reports_broken_layer() {
        std::env::set_var("GOON_SCORE__TUI__TICK_RATE_MS", "fast");
        let (settings, err) = Settings::load();
        std::env::remove_var("GOON_SCORE__TUI__TICK_RATE_MS");

        assert!(err.is_some());
        assert_eq!(settings.tui.tick_rate_ms, 250);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut settings = Settings::default();
        settings.app.log_level = "loud".to_string();
        assert!(matches!(settings.validate(), Err(ScoreError::Config(_))));

        let mut settings = Settings::default();
        settings.game.min_award = 500;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.tui.tick_rate_ms = 0;
        assert!(settings.validate().is_err());
    }
}
