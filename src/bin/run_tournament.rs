use std::path::PathBuf;

use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use tourney::{
    arena::{
        DEFAULT_DICE_SIDES, DEFAULT_LOCATION, DEFAULT_TARGET_SCORE, DiceMatchEngine, MatchEngine,
        ResultsDocument, RngDiceMatchEngine, TournamentBuilder, TournamentConfig, TournamentError,
        TournamentResult,
    },
    core::Roster,
    schedule::TournamentKind,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(name = "run-tournament")]
#[command(about = "Run a round-robin or elimination dice tournament")]
struct Cli {
    /// JSON file with a list of `{"name": .., "category": ..}` entries
    #[arg(short, long)]
    roster: PathBuf,

    /// round_robin or elimination
    #[arg(short, long, default_value_t = TournamentKind::RoundRobin)]
    kind: TournamentKind,

    #[arg(short, long, default_value = DEFAULT_LOCATION)]
    location: String,

    /// Points needed to win a match
    #[arg(short, long, default_value_t = DEFAULT_TARGET_SCORE)]
    target_score: u32,

    #[arg(short, long, default_value_t = DEFAULT_DICE_SIDES)]
    dice_sides: u8,

    /// Seed the dice for a reproducible tournament
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the results document. Defaults to
    /// tournament_<kind>_<location>.json in the current directory.
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Don't write a results document
    #[arg(long)]
    no_save: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), TournamentError> {
    let roster = Roster::from_json_file(&cli.roster)?;
    let engine: Box<dyn MatchEngine> = match cli.seed {
        Some(seed) => Box::new(RngDiceMatchEngine::new(
            cli.dice_sides,
            StdRng::seed_from_u64(seed),
        )?),
        None => Box::new(DiceMatchEngine::with_sides(cli.dice_sides)?),
    };

    println!(
        "{} tournament in {} with {} players, first to {}",
        cli.kind,
        cli.location,
        roster.len(),
        cli.target_score
    );

    let result = TournamentBuilder::default()
        .kind(cli.kind)
        .roster(roster)
        .config(TournamentConfig::new(cli.location, cli.target_score))
        .match_engine(engine)
        .build()?
        .run()?;

    print_matches(&result);
    print_standings(&result);

    if !cli.no_save {
        let document = ResultsDocument::new(&result).with_dice_sides(cli.dice_sides);
        let path = cli.out.unwrap_or_else(|| document.file_name());
        document.write_json(&path)?;
        println!("Results saved to {}", path.display());
    }
    Ok(())
}

fn print_matches(result: &TournamentResult) {
    let roster = &result.roster;
    let mut current_round = 0;
    for record in &result.matches {
        if record.round != current_round {
            current_round = record.round;
            println!();
            println!("== {} ==", record.round_label);
        }
        println!(
            "{:>16} {:>3} : {:<3} {:<16} -> {}",
            roster[record.home].name(),
            record.home_score,
            record.away_score,
            roster[record.away].name(),
            roster[record.winner].name()
        );
    }
}

fn print_standings(result: &TournamentResult) {
    let roster = &result.roster;
    println!();
    println!(
        "{:>3} {:<16} {:<8} {:>5} {:>5} {:>7} {:>6}",
        "#", "name", "category", "games", "wins", "diff", "rate"
    );
    for (idx, standing) in result.standings.iter().enumerate() {
        let competitor = &roster[standing.competitor];
        println!(
            "{:>3} {:<16} {:<8} {:>5} {:>5} {:>+7} {:>6.2}",
            idx + 1,
            competitor.name(),
            competitor.category(),
            competitor.games_played(),
            standing.wins,
            standing.score_differential,
            competitor.win_rate()
        );
    }
    println!();
    println!("Winner: {}", result.winner_competitor());
}
