use serde::{Deserialize, Serialize};

use crate::models::ActivityField;

/// Points awarded per unit of each counter, stored in tenths of a point so
/// the weighted sum stays in integer arithmetic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoringWeights {
    pub memes_created: i64,
    pub hours_spent: i64,
    pub game_score: i64,
    pub token_holdings: i64,
    pub goonified_images: i64,
    pub social_shares: i64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            memes_created: 1_000,    // 100 points per meme
            hours_spent: 50,         // 5 points per hour
            game_score: 1,           // 0.1 points per game point
            token_holdings: 500,     // 50 points per $GOON
            goonified_images: 2_000, // 200 points per image
            social_shares: 1_500,    // 150 points per share
        }
    }
}

impl ScoringWeights {
    pub const TENTHS_PER_POINT: i64 = 10;

    pub fn tenths(&self, field: ActivityField) -> i64 {
        match field {
            ActivityField::MemesCreated => self.memes_created,
            ActivityField::HoursSpent => self.hours_spent,
            ActivityField::GameScore => self.game_score,
            ActivityField::TokenHoldings => self.token_holdings,
            ActivityField::GoonifiedImages => self.goonified_images,
            ActivityField::SocialShares => self.social_shares,
        }
    }

    pub fn points(&self, field: ActivityField) -> f64 {
        self.tenths(field) as f64 / Self::TENTHS_PER_POINT as f64
    }
}
