pub mod algorithm;
pub mod weights;

pub use algorithm::ScoreEngine;
pub use weights::ScoringWeights;
