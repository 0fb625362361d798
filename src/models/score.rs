use chrono::{DateTime, Utc};
use serde::Serialize;

use super::RankTier;

/// Per-counter contribution to the total, in points.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ScoreBreakdown {
    pub memes_created: f64,
    pub hours_spent: f64,
    pub game_score: f64,
    pub token_holdings: f64,
    pub goonified_images: f64,
    pub social_shares: f64,
}

impl ScoreBreakdown {
    pub fn entries(&self) -> [(&'static str, f64); 6] {
        [
            ("Memes", self.memes_created),
            ("Time on site", self.hours_spent),
            ("Game score", self.game_score),
            ("$GOON holdings", self.token_holdings),
            ("Goonified images", self.goonified_images),
            ("Social shares", self.social_shares),
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreResult {
    pub total_score: i64,
    pub rank: &'static RankTier,
    pub breakdown: ScoreBreakdown,
    pub calculated_at: DateTime<Utc>,
}

impl ScoreResult {
    pub fn rank_name(&self) -> &'static str {
        self.rank.name
    }

    pub fn points_to_next_rank(&self) -> Option<i64> {
        self.rank.points_to_next(self.total_score)
    }
}
