use serde::Serialize;

use crate::utils::format_thousands;

/// Colour slot a tier is painted with.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum TierAccent {
    Muted,
    Primary,
    Secondary,
    Accent,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct RankTier {
    pub name: &'static str,
    pub min_score: i64,
    /// Inclusive upper bound; `None` for the open-ended top tier.
    pub max_score: Option<i64>,
    pub emoji: &'static str,
    pub accent: TierAccent,
}

pub static RANK_TIERS: [RankTier; 7] = [
    RankTier { name: "Baby Goon", min_score: 0, max_score: Some(999), emoji: "👶", accent: TierAccent::Muted },
    RankTier { name: "Goon Cadet", min_score: 1_000, max_score: Some(2_499), emoji: "🎯", accent: TierAccent::Primary },
    RankTier { name: "Goon Warrior", min_score: 2_500, max_score: Some(4_999), emoji: "⚔️", accent: TierAccent::Secondary },
    RankTier { name: "Elite Goon", min_score: 5_000, max_score: Some(9_999), emoji: "💎", accent: TierAccent::Accent },
    RankTier { name: "Goon Master", min_score: 10_000, max_score: Some(19_999), emoji: "👑", accent: TierAccent::Primary },
    RankTier { name: "Goon Legend", min_score: 20_000, max_score: Some(49_999), emoji: "🏆", accent: TierAccent::Secondary },
    RankTier { name: "Goon God", min_score: 50_000, max_score: None, emoji: "⚡", accent: TierAccent::Accent },
];

impl RankTier {
    pub fn contains(&self, total: i64) -> bool {
        total >= self.min_score && self.max_score.map_or(true, |max| total <= max)
    }

    pub fn is_top(&self) -> bool {
        self.max_score.is_none()
    }

    /// Points still needed to reach the next tier, `None` at the top.
    pub fn points_to_next(&self, total: i64) -> Option<i64> {
        self.max_score.map(|max| (max + 1 - total).max(0))
    }

    pub fn range_label(&self) -> String {
        match self.max_score {
            Some(max) => format!(
                "{} - {} points",
                format_thousands(self.min_score),
                format_thousands(max)
            ),
            None => format!("{}+ points", format_thousands(self.min_score)),
        }
    }

    pub fn from_name(name: &str) -> Option<&'static RankTier> {
        RANK_TIERS.iter().find(|tier| tier.name.eq_ignore_ascii_case(name))
    }
}
