use clap::{Args, Parser, Subcommand};
use goon_score::{
    config::Settings,
    models::{ActivityField, ActivityForm, ScoreError},
    utils::{self, format_thousands},
};
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod tui_main;

#[derive(Parser)]
#[clap(name = "goon-score")]
#[clap(about = "Calculate your Goon Score and discover your rank", long_about = None)]
struct Cli {
    /// Path to a configuration file
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate a Goon Score from activity counters
    Score(ScoreArgs),

    /// Show the rank tiers
    Ranks,

    /// Launch the interactive calculator and Goon Dash
    Tui,
}

#[derive(Args)]
struct ScoreArgs {
    /// Memes created this month
    #[clap(long, allow_hyphen_values = true)]
    memes_created: Option<String>,

    /// Time spent on site, in hours
    #[clap(long, allow_hyphen_values = true)]
    hours_spent: Option<String>,

    /// Best game score
    #[clap(long, allow_hyphen_values = true)]
    game_score: Option<String>,

    /// $GOON token holdings
    #[clap(long, allow_hyphen_values = true)]
    token_holdings: Option<String>,

    /// Goonified images created
    #[clap(long, allow_hyphen_values = true)]
    goonified_images: Option<String>,

    /// Social media shares
    #[clap(long, allow_hyphen_values = true)]
    social_shares: Option<String>,

    /// Print the result as JSON
    #[clap(long)]
    json: bool,

    /// Also print text ready to share
    #[clap(long)]
    share: bool,
}

impl ScoreArgs {
    fn form(&self) -> ActivityForm {
        ActivityForm {
            memes_created: self.memes_created.clone(),
            hours_spent: self.hours_spent.clone(),
            game_score: self.game_score.clone(),
            token_holdings: self.token_holdings.clone(),
            goonified_images: self.goonified_images.clone(),
            social_shares: self.social_shares.clone(),
        }
    }
}

fn load_settings(path: Option<&PathBuf>) -> anyhow::Result<(Settings, Option<String>)> {
    let (settings, fallback) = match path {
        Some(path) => {
            let settings = Settings::from_file(path)
                .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", path.display(), e))?;
            (settings, None)
        }
        None => {
            let (settings, err) = Settings::load();
            (settings, err.map(|e| e.to_string()))
        }
    };

    settings.validate()?;
    Ok((settings, fallback))
}

fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.app.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (settings, fallback) = load_settings(cli.config.as_ref())?;

    match cli.command {
        Commands::Score(args) => {
            init_logging(&settings);
            warn_on_fallback(fallback.as_deref());
            run_score(&settings, &args)
        }

        Commands::Ranks => {
            init_logging(&settings);
            warn_on_fallback(fallback.as_deref());
            println!("\n=== Goon Rank System ===");
            for tier in settings.score_engine().tiers() {
                println!("  {} {:<13} {}", tier.emoji, tier.name, tier.range_label());
            }
            Ok(())
        }

        Commands::Tui => {
            if let Some(reason) = fallback.as_deref() {
                eprintln!("Using default settings: {}", reason);
            }
            tui_main::run_tui(&settings)
        }
    }
}

fn warn_on_fallback(reason: Option<&str>) {
    if let Some(reason) = reason {
        warn!("Using default settings: {}", reason);
    }
}

fn run_score(settings: &Settings, args: &ScoreArgs) -> anyhow::Result<()> {
    let engine = settings.score_engine();

    let result = match engine.compute_form(&args.form()) {
        Ok(result) => result,
        Err(e @ ScoreError::Validation(_)) => {
            error!("Invalid activity input");
            eprintln!("\n❌ Missing Information");
            for issue in e.issues() {
                eprintln!("  - {}", issue);
            }
            eprintln!("\nProvide all of: {}", flag_list());
            return Err(e.into());
        }
        Err(e) => {
            error!("Failed to calculate score: {}", e);
            return Err(e.into());
        }
    };

    info!("Calculated score {} ({})", result.total_score, result.rank.name);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("\n=== Goon Score Results ===");
        println!("Total Score: {}", format_thousands(result.total_score));
        println!("Rank: {} {}", result.rank.emoji, result.rank.name);
        match result.points_to_next_rank() {
            Some(points) => println!("{} points to next rank", format_thousands(points)),
            None => println!("You have achieved maximum goon enlightenment!"),
        }
        println!("\nBreakdown:");
        for (label, points) in result.breakdown.entries() {
            println!("  {}: {:.1}", label, points);
        }
    }

    if args.share {
        println!("\n{}", utils::share_text(&result));
    }

    Ok(())
}

fn flag_list() -> String {
    ActivityField::ALL
        .iter()
        .map(|field| format!("--{}", field.as_str().replace('_', "-")))
        .collect::<Vec<_>>()
        .join(", ")
}
