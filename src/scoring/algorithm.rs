use crate::models::{
    ActivityField, ActivityForm, ActivityInput, FieldIssue, IssueKind, RankTier, Result,
    ScoreBreakdown, ScoreError, ScoreResult, RANK_TIERS,
};
use crate::scoring::ScoringWeights;
use chrono::Utc;
use tracing::debug;

/// Turns activity counters into a Goon Score and rank.
///
/// Holds only read-only data; the caller owns every input and result.
#[derive(Debug, Clone)]
pub struct ScoreEngine {
    weights: ScoringWeights,
    tiers: &'static [RankTier],
    allow_negative_inputs: bool,
}

impl Default for ScoreEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreEngine {
    pub fn new() -> Self {
        Self {
            weights: ScoringWeights::default(),
            tiers: &RANK_TIERS,
            allow_negative_inputs: true,
        }
    }

    pub fn with_negative_inputs(mut self, allow: bool) -> Self {
        self.allow_negative_inputs = allow;
        self
    }

    #[cfg(test)]
    pub(crate) fn with_tiers(mut self, tiers: &'static [RankTier]) -> Self {
        self.tiers = tiers;
        self
    }

    pub fn tiers(&self) -> &'static [RankTier] {
        self.tiers
    }

    /// Validate a raw form and score it.
    pub fn compute_form(&self, form: &ActivityForm) -> Result<ScoreResult> {
        let input = form.parse(self.allow_negative_inputs)?;
        self.compute(&input)
    }

    pub fn compute(&self, input: &ActivityInput) -> Result<ScoreResult> {
        if !self.allow_negative_inputs {
            let issues: Vec<FieldIssue> = ActivityField::ALL
                .into_iter()
                .filter(|field| input.get(*field) < 0)
                .map(|field| FieldIssue {
                    field,
                    kind: IssueKind::Negative(input.get(field)),
                })
                .collect();
            if !issues.is_empty() {
                return Err(ScoreError::Validation(issues));
            }
        }

        let total_score = self.total(input)?;
        let rank = self.rank_for(total_score)?;

        debug!("Scored {} points, rank {}", total_score, rank.name);

        Ok(ScoreResult {
            total_score,
            rank,
            breakdown: self.breakdown(input),
            calculated_at: Utc::now(),
        })
    }

    /// Weighted sum rounded half-up to a whole number of points.
    pub fn total(&self, input: &ActivityInput) -> Result<i64> {
        let tenths: i128 = ActivityField::ALL
            .into_iter()
            .map(|field| input.get(field) as i128 * self.weights.tenths(field) as i128)
            .sum();

        let per_point = ScoringWeights::TENTHS_PER_POINT as i128;
        let rounded = (tenths + per_point / 2).div_euclid(per_point);

        i64::try_from(rounded)
            .map_err(|_| ScoreError::OutOfRange(format!("{} does not fit in a score", rounded)))
    }

    /// First tier, in ascending order, whose inclusive range holds `total`.
    pub fn rank_for(&self, total: i64) -> Result<&'static RankTier> {
        self.tiers
            .iter()
            .find(|tier| tier.contains(total))
            .ok_or(ScoreError::UnclassifiedScore { total })
    }

    fn breakdown(&self, input: &ActivityInput) -> ScoreBreakdown {
        let points = |field: ActivityField| input.get(field) as f64 * self.weights.points(field);

        ScoreBreakdown {
            memes_created: points(ActivityField::MemesCreated),
            hours_spent: points(ActivityField::HoursSpent),
            game_score: points(ActivityField::GameScore),
            token_holdings: points(ActivityField::TokenHoldings),
            goonified_images: points(ActivityField::GoonifiedImages),
            social_shares: points(ActivityField::SocialShares),
        }
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn counters() -> impl Strategy<Value = ActivityInput> {
        (0..1_000_000i64, 0..1_000_000i64, 0..1_000_000_000i64, 0..1_000_000i64, 0..1_000_000i64, 0..1_000_000i64)
            .prop_map(|(m, h, g, t, i, s)| ActivityInput {
                memes_created: m,
                hours_spent: h,
                game_score: g,
                token_holdings: t,
                goonified_images: i,
                social_shares: s,
            })
    }

    proptest! {
        #[test]
        fn compute_is_deterministic(input in counters()) {
            let engine = ScoreEngine::new();
            let a = engine.compute(&input).unwrap();
            let b = engine.compute(&input).unwrap();
            prop_assert_eq!(a.total_score, b.total_score);
            prop_assert_eq!(a.rank, b.rank);
        }

        #[test]
        fn exactly_one_tier_matches(total in 0..i64::MAX) {
            let matching = RANK_TIERS.iter().filter(|tier| tier.contains(total)).count();
            prop_assert_eq!(matching, 1);
        }

        #[test]
        fn total_matches_integer_formula(input in counters()) {
            let engine = ScoreEngine::new();
            let expected = input.memes_created * 100
                + input.hours_spent * 5
                + (input.game_score + 5) / 10
                + input.token_holdings * 50
                + input.goonified_images * 200
                + input.social_shares * 150;
            prop_assert_eq!(engine.total(&input).unwrap(), expected);
        }
    }
}
