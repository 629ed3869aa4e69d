//! Run command - seasons, best gym and championships
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_config(), render()
//! - Level 3: format_text_report(), format_standings()
//! - Level 4: formatting utilities

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use ringside_core::WEIGHT_CLASS_COUNT;
use ringside_league::{run_championship, BracketMode, ChampionshipReport, DivisionOutcome, DivisionReport, LeagueConfig};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args, Clone, Debug)]
pub struct RunArgs {
    /// Round-robin seasons before the championships
    #[arg(long, default_value = "2")]
    pub seasons: u32,

    /// Random seed (omit for a fresh run every time)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Bracket shape
    #[arg(long, value_enum, default_value = "standard")]
    pub bracket: BracketArg,

    /// Boxers per gym (fewer than 16 leaves weight classes empty)
    #[arg(long, default_value = "16")]
    pub roster_size: usize,

    /// Print per-gym standings
    #[arg(long)]
    pub standings: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            seasons: 2,
            seed: None,
            bracket: BracketArg::Standard,
            roster_size: WEIGHT_CLASS_COUNT,
            standings: false,
            json: false,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BracketArg {
    /// Final is W(M5) vs W(M6)
    Standard,
    /// Final is W(M4) vs W(M5)
    UpperFinal,
}

impl From<BracketArg> for BracketMode {
    fn from(arg: BracketArg) -> Self {
        match arg {
            BracketArg::Standard => BracketMode::Standard,
            BracketArg::UpperFinal => BracketMode::UpperFinal,
        }
    }
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run the league
///
/// 1. Build the configuration
/// 2. Play seasons and championships
/// 3. Report results
pub fn run(args: RunArgs) -> Result<()> {
    let config = build_config(&args);

    tracing::info!(
        "Starting league: {} seasons, roster size {}, seed {:?}",
        config.seasons,
        config.roster.size,
        config.seed
    );

    let mut rng = config.create_rng();
    let report = run_championship(&config, &mut rng).context("Failed to set up the league")?;

    print!("{}", render(&report, &args)?);
    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn build_config(args: &RunArgs) -> LeagueConfig {
    let mut config = LeagueConfig::default()
        .with_seasons(args.seasons)
        .with_bracket(args.bracket.into())
        .with_roster_size(args.roster_size);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    config
}

fn render(report: &ChampionshipReport, args: &RunArgs) -> Result<String> {
    if args.json {
        let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
        Ok(format!("{}\n", json))
    } else {
        let mut out = String::new();
        if args.standings {
            out.push_str(&format_standings(report));
        }
        out.push_str(&format_text_report(report));
        Ok(out)
    }
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn format_text_report(report: &ChampionshipReport) -> String {
    let mut out = String::new();

    match (report.best_gym, report.best_gym_score) {
        (Some(gym), Some(score)) => out.push_str(&format!(
            "League winner: the gym of {} with the score of {:.3}! Congrats!\n",
            gym, score
        )),
        _ => out.push_str("No league winner: no gym has fought a bout.\n"),
    }

    for division in &report.divisions {
        out.push_str(&format_division(division));
        out.push('\n');
    }
    out
}

fn format_standings(report: &ChampionshipReport) -> String {
    let mut out = String::from("Gym    W    L   KO  Score\n");
    for standing in &report.standings {
        out.push_str(&format!(
            "{:<4} {:>4} {:>4} {:>4}  {}\n",
            standing.gym.0,
            standing.wins,
            standing.losses,
            standing.knockouts,
            format_score(standing.score)
        ));
    }
    out.push('\n');
    out
}

// ============================================================================
// LEVEL 4 - FORMATTING UTILITIES
// ============================================================================

fn format_division(division: &DivisionReport) -> String {
    match &division.outcome {
        DivisionOutcome::Crowned(result) => format!(
            "And the winner in the weight class {} is boxer number {}{}",
            division.weight_class,
            result.champion,
            if result.knockout { " by knockout!" } else { "" }
        ),
        DivisionOutcome::Skipped { reason } => {
            format!("No winner in the weight class {}: {}", division.weight_class, reason)
        }
    }
}

fn format_score(score: Option<f64>) -> String {
    match score {
        Some(score) => format!("{:.3}", score),
        None => "-".to_string(),
    }
}
