use serde::{Deserialize, Serialize};

use super::{FieldIssue, IssueKind, Result, ScoreError};

/// The six counters a player reports about their goon activity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ActivityField {
    MemesCreated,
    HoursSpent,
    GameScore,
    TokenHoldings,
    GoonifiedImages,
    SocialShares,
}

impl ActivityField {
    pub const ALL: [ActivityField; 6] = [
        ActivityField::MemesCreated,
        ActivityField::HoursSpent,
        ActivityField::GameScore,
        ActivityField::TokenHoldings,
        ActivityField::GoonifiedImages,
        ActivityField::SocialShares,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityField::MemesCreated => "memes_created",
            ActivityField::HoursSpent => "hours_spent",
            ActivityField::GameScore => "game_score",
            ActivityField::TokenHoldings => "token_holdings",
            ActivityField::GoonifiedImages => "goonified_images",
            ActivityField::SocialShares => "social_shares",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityField::MemesCreated => "Memes Created This Month",
            ActivityField::HoursSpent => "Time Spent on Site (hours)",
            ActivityField::GameScore => "Best Game Score",
            ActivityField::TokenHoldings => "$GOON Holdings",
            ActivityField::GoonifiedImages => "Goonified Images Created",
            ActivityField::SocialShares => "Social Media Shares",
        }
    }

    /// Short hint shown next to the input, e.g. "+100 points per meme".
    pub fn hint(&self) -> &'static str {
        match self {
            ActivityField::MemesCreated => "+100 points per meme",
            ActivityField::HoursSpent => "+5 points per hour",
            ActivityField::GameScore => "+0.1 points per game point",
            ActivityField::TokenHoldings => "+50 points per token",
            ActivityField::GoonifiedImages => "+200 points per image",
            ActivityField::SocialShares => "+150 points per share",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "memes_created" | "memes" => Some(ActivityField::MemesCreated),
            "hours_spent" | "hours" | "time_spent" => Some(ActivityField::HoursSpent),
            "game_score" => Some(ActivityField::GameScore),
            "token_holdings" | "holdings" | "goon_holdings" => Some(ActivityField::TokenHoldings),
            "goonified_images" | "images" => Some(ActivityField::GoonifiedImages),
            "social_shares" | "shares" => Some(ActivityField::SocialShares),
            _ => None,
        }
    }
}

/// Validated activity counters. Every field is required; there is no
/// zero default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityInput {
    pub memes_created: i64,
    pub hours_spent: i64,
    pub game_score: i64,
    pub token_holdings: i64,
    pub goonified_images: i64,
    pub social_shares: i64,
}

impl ActivityInput {
    pub fn get(&self, field: ActivityField) -> i64 {
        match field {
            ActivityField::MemesCreated => self.memes_created,
            ActivityField::HoursSpent => self.hours_spent,
            ActivityField::GameScore => self.game_score,
            ActivityField::TokenHoldings => self.token_holdings,
            ActivityField::GoonifiedImages => self.goonified_images,
            ActivityField::SocialShares => self.social_shares,
        }
    }
}

/// Raw, possibly incomplete form values as typed by the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityForm {
    pub memes_created: Option<String>,
    pub hours_spent: Option<String>,
    pub game_score: Option<String>,
    pub token_holdings: Option<String>,
    pub goonified_images: Option<String>,
    pub social_shares: Option<String>,
}

impl ActivityForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: ActivityField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn set(&mut self, field: ActivityField, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn slot(&self, field: ActivityField) -> &Option<String> {
        match field {
            ActivityField::MemesCreated => &self.memes_created,
            ActivityField::HoursSpent => &self.hours_spent,
            ActivityField::GameScore => &self.game_score,
            ActivityField::TokenHoldings => &self.token_holdings,
            ActivityField::GoonifiedImages => &self.goonified_images,
            ActivityField::SocialShares => &self.social_shares,
        }
    }

    fn slot_mut(&mut self, field: ActivityField) -> &mut Option<String> {
        match field {
            ActivityField::MemesCreated => &mut self.memes_created,
            ActivityField::HoursSpent => &mut self.hours_spent,
            ActivityField::GameScore => &mut self.game_score,
            ActivityField::TokenHoldings => &mut self.token_holdings,
            ActivityField::GoonifiedImages => &mut self.goonified_images,
            ActivityField::SocialShares => &mut self.social_shares,
        }
    }

    /// Parse every field, collecting all problems before failing.
    pub fn parse(&self, allow_negative: bool) -> Result<ActivityInput> {
        let mut values = [0i64; 6];
        let mut issues = Vec::new();

        for (slot, field) in values.iter_mut().zip(ActivityField::ALL) {
            let raw = self.get(field).map(str::trim).unwrap_or("");
            if raw.is_empty() {
                issues.push(FieldIssue { field, kind: IssueKind::Missing });
                continue;
            }

            match raw.parse::<i64>() {
                Ok(value) if value < 0 && !allow_negative => {
                    issues.push(FieldIssue { field, kind: IssueKind::Negative(value) });
                }
                Ok(value) => *slot = value,
                Err(_) => {
                    issues.push(FieldIssue { field, kind: IssueKind::Invalid(raw.to_string()) });
                }
            }
        }

        if !issues.is_empty() {
            return Err(ScoreError::Validation(issues));
        }

        let [memes_created, hours_spent, game_score, token_holdings, goonified_images, social_shares] =
            values;

        Ok(ActivityInput {
            memes_created,
            hours_spent,
            game_score,
            token_holdings,
            goonified_images,
            social_shares,
        })
    }
}

impl From<ActivityInput> for ActivityForm {
    fn from(input: ActivityInput) -> Self {
        let mut form = ActivityForm::new();
        for field in ActivityField::ALL {
            form.set(field, input.get(field).to_string());
        }
        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_form() -> ActivityForm {
        let mut form = ActivityForm::new();
        form.set(ActivityField::MemesCreated, "25");
        form.set(ActivityField::HoursSpent, " 50 ");
        form.set(ActivityField::GameScore, "15000");
        form.set(ActivityField::TokenHoldings, "1000");
        form.set(ActivityField::GoonifiedImages, "10");
        form.set(ActivityField::SocialShares, "15");
        form
    }

    #[test]
    fn test_parse_full_form() {
        let input = full_form().parse(true).unwrap();
        assert_eq!(input.memes_created, 25);
        assert_eq!(input.hours_spent, 50);
        assert_eq!(input.game_score, 15000);
        assert_eq!(input.social_shares, 15);
    }

    #[test]
    fn test_blank_field_is_missing_not_zero() {
        let mut form = full_form();
        form.set(ActivityField::GoonifiedImages, "   ");

        let err = form.parse(true).unwrap_err();
        assert_eq!(
            err.issues(),
            &[FieldIssue { field: ActivityField::GoonifiedImages, kind: IssueKind::Missing }]
        );
    }

    #[test]
    fn test_all_issues_reported_together() {
        let mut form = ActivityForm::new();
        form.set(ActivityField::HoursSpent, "lots");

        let err = form.parse(true).unwrap_err();
        assert_eq!(err.issues().len(), 6);
        assert!(err.to_string().contains("Time Spent on Site (hours) must be a whole number, got 'lots'"));
        assert!(err.to_string().contains("Memes Created This Month is required"));
    }

    #[test]
    fn test_negative_values_follow_setting() {
        let mut form = full_form();
        form.set(ActivityField::TokenHoldings, "-20");

        assert_eq!(form.parse(true).unwrap().token_holdings, -20);

        let err = form.parse(false).unwrap_err();
        assert_eq!(err.issues()[0].kind, IssueKind::Negative(-20));
    }

    #[test]
    fn test_field_names() {
        assert_eq!(ActivityField::from_str("memes-created"), Some(ActivityField::MemesCreated));
        assert_eq!(ActivityField::from_str("SHARES"), Some(ActivityField::SocialShares));
        assert_eq!(ActivityField::from_str("likes"), None);
        for field in ActivityField::ALL {
            assert_eq!(ActivityField::from_str(field.as_str()), Some(field));
        }
    }
}
