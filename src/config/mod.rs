pub mod settings;

pub use settings::{AppSettings, ScoringSettings, Settings, TuiSettings};
