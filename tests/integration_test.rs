use goon_score::{
    models::{ActivityField, ActivityForm, ActivityInput, IssueKind, ScoreError},
    scoring::ScoreEngine,
    utils::share_text,
    Settings, RANK_TIERS,
};

fn form(values: [&str; 6]) -> ActivityForm {
    let mut form = ActivityForm::new();
    for (field, value) in ActivityField::ALL.into_iter().zip(values) {
        form.set(field, value);
    }
    form
}

/// Input that scores exactly `points` via memes, hours and game score.
fn input_worth(points: i64) -> ActivityInput {
    ActivityInput {
        memes_created: points / 100,
        hours_spent: (points % 100) / 5,
        game_score: (points % 5) * 10,
        token_holdings: 0,
        goonified_images: 0,
        social_shares: 0,
    }
}

#[test]
fn test_worked_example_from_form() {
    let engine = ScoreEngine::new();
    let result = engine
        .compute_form(&form(["25", "50", "15000", "1000", "10", "15"]))
        .unwrap();

    assert_eq!(result.total_score, 58_500);
    assert_eq!(result.rank_name(), "Goon God");
    assert_eq!(
        share_text(&result),
        "I just calculated my Goon Score! I'm a Goon God with 58,500 points! 🚀 Calculate yours at GooningGames.com #GoonLife #MemeCoin"
    );
}

#[test]
fn test_zero_inputs() {
    let engine = ScoreEngine::new();
    let result = engine.compute_form(&form(["0", "0", "0", "0", "0", "0"])).unwrap();

    assert_eq!(result.total_score, 0);
    assert_eq!(result.rank_name(), "Baby Goon");
    assert_eq!(result.points_to_next_rank(), Some(1_000));
}

#[test]
fn test_tier_edges_through_compute() {
    let engine = ScoreEngine::new();
    let cases = [
        (999, "Baby Goon"),
        (1_000, "Goon Cadet"),
        (2_499, "Goon Cadet"),
        (2_500, "Goon Warrior"),
        (4_999, "Goon Warrior"),
        (5_000, "Elite Goon"),
        (9_999, "Elite Goon"),
        (10_000, "Goon Master"),
        (19_999, "Goon Master"),
        (20_000, "Goon Legend"),
        (49_999, "Goon Legend"),
        (50_000, "Goon God"),
    ];

    for (points, rank) in cases {
        let result = engine.compute(&input_worth(points)).unwrap();
        assert_eq!(result.total_score, points);
        assert_eq!(result.rank_name(), rank, "at {} points", points);
    }
}

#[test]
fn test_each_missing_field_is_rejected() {
    let engine = ScoreEngine::new();

    for field in ActivityField::ALL {
        let mut form = form(["1", "1", "1", "1", "1", "1"]);
        match field {
            ActivityField::MemesCreated => form.memes_created = None,
            ActivityField::HoursSpent => form.hours_spent = None,
            ActivityField::GameScore => form.game_score = None,
            ActivityField::TokenHoldings => form.token_holdings = None,
            ActivityField::GoonifiedImages => form.goonified_images = None,
            ActivityField::SocialShares => form.social_shares = None,
        }

        let err = engine.compute_form(&form).unwrap_err();
        assert!(matches!(err, ScoreError::Validation(_)));
        assert_eq!(err.issues().len(), 1);
        assert_eq!(err.issues()[0].field, field);
        assert_eq!(err.issues()[0].kind, IssueKind::Missing);
        assert!(err.to_string().contains(field.label()));
    }
}

#[test]
fn test_non_numeric_field_is_rejected() {
    let engine = ScoreEngine::new();
    let err = engine
        .compute_form(&form(["1", "1.5", "1", "many", "1", "1"]))
        .unwrap_err();

    let fields: Vec<_> = err.issues().iter().map(|issue| issue.field).collect();
    assert_eq!(fields, vec![ActivityField::HoursSpent, ActivityField::TokenHoldings]);
}

#[test]
fn test_settings_control_negative_inputs() {
    let mut settings = Settings::default();
    let negative = form(["100", "0", "0", "-1", "0", "0"]);

    let result = settings.score_engine().compute_form(&negative).unwrap();
    assert_eq!(result.total_score, 9_950);
    assert_eq!(result.rank_name(), "Elite Goon");

    settings.scoring.allow_negative_inputs = false;
    let err = settings.score_engine().compute_form(&negative).unwrap_err();
    assert_eq!(err.issues()[0].kind, IssueKind::Negative(-1));
}

#[test]
fn test_rank_table_shape() {
    let names: Vec<_> = RANK_TIERS.iter().map(|tier| tier.name).collect();
    assert_eq!(
        names,
        vec![
            "Baby Goon",
            "Goon Cadet",
            "Goon Warrior",
            "Elite Goon",
            "Goon Master",
            "Goon Legend",
            "Goon God"
        ]
    );
}
