use crate::models::ScoreResult;
use super::format_thousands;

pub const SHARE_TITLE: &str = "My Goon Score";

/// Text a player can paste into social media after calculating.
pub fn share_text(result: &ScoreResult) -> String {
    format!(
        "I just calculated my Goon Score! I'm a {} with {} points! 🚀 Calculate yours at GooningGames.com #GoonLife #MemeCoin",
        result.rank.name,
        format_thousands(result.total_score),
    )
}
