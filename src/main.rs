use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use league_sim::config::AppConfig;
use league_sim::engine::{EntropySource, RandomSource, SeededSource};
use league_sim::ingest;
use league_sim::models::{StandingsRow, TeamBalance};
use league_sim::session::TournamentSession;

#[derive(Parser)]
#[command(name = "league-sim")]
#[command(about = "Interactive cricket league tournament simulator")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address
        #[arg(long)]
        host: Option<String>,

        /// Port number
        #[arg(long)]
        port: Option<u16>,
    },

    /// Simulate an entire tournament from a roster CSV
    Run {
        /// Path to the squad CSV (Name, Team, Nationality, Role, Rating)
        roster: PathBuf,

        /// Seed for a reproducible tournament
        #[arg(long)]
        seed: Option<u64>,

        /// League start date (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<String>,
    },

    /// Print the team balance report for a roster CSV
    Validate {
        /// Path to the squad CSV
        roster: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli.config);
    let log_level = cli.log_level.clone().unwrap_or_else(|| config.log_level.clone());

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting league-sim v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Serve { host, port } => {
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);

            let state = league_sim::api::state::AppState::new(
                config.simulation.start_date()?,
                config.simulation.seed,
            );
            let app = league_sim::api::build_router(state);
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Run {
            roster,
            seed,
            start_date,
        } => {
            let start_date = match start_date {
                Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d")
                    .with_context(|| format!("invalid --start-date (expected YYYY-MM-DD): {}", s))?,
                None => config.simulation.start_date()?,
            };
            let seed = seed.or(config.simulation.seed);
            run_tournament(&roster, start_date, seed)?;
        }
        Commands::Validate { roster } => {
            let players = ingest::read_roster(&roster)
                .with_context(|| format!("failed to load roster {}", roster.display()))?;
            let report = league_sim::engine::build_balance_report(&players);
            print_balance_report(&report);
        }
    }

    Ok(())
}

fn load_config(path: &str) -> AppConfig {
    let path = PathBuf::from(path);
    match AppConfig::from_file(&path) {
        Ok(config) => config,
        Err(e) => {
            if path.exists() {
                eprintln!("Warning: ignoring config {}: {}", path.display(), e);
            }
            AppConfig::default()
        }
    }
}

fn run_tournament(roster: &PathBuf, start_date: NaiveDate, seed: Option<u64>) -> Result<()> {
    let players = ingest::read_roster(roster)
        .with_context(|| format!("failed to load roster {}", roster.display()))?;

    let rng: Box<dyn RandomSource> = match seed {
        Some(seed) => Box::new(SeededSource::new(seed)),
        None => Box::new(EntropySource::default()),
    };
    let mut session = TournamentSession::new(&players, start_date, rng)?;

    print_balance_report(session.balance_report());

    println!("\n=== League Phase ({} matches) ===", session.fixtures().len());
    while !session.league_complete() {
        let result = session.play_next_match()?;
        println!(
            "Match {:>2}: {} vs {} -> {}",
            result.match_no, result.home, result.away, result.winner
        );
    }

    print_standings(&session.standings());

    println!("\n=== Playoffs ===");
    while let Some(result) = session.advance_playoffs()? {
        println!(
            "{:<12} {} vs {} -> {}",
            result.stage.label(),
            result.home,
            result.away,
            result.winner
        );
    }

    if let Some(placings) = session.playoffs().and_then(|b| b.placings()) {
        println!("\nFirst place:  {}", placings.first);
        println!("Second place: {}", placings.second);
        println!("Third place:  {}", placings.third);
    }

    Ok(())
}

fn print_balance_report(report: &[TeamBalance]) {
    println!("\n=== Team Balance Report ===");
    println!(
        "{:<16} {:>7} {:>8} {:>8} {:>4} {:>12} {:>8} {:>8} {:>9}",
        "Team", "Players", "Foreign", "Batters", "WK", "Allrounders", "Bowlers", "Rating", "Balanced"
    );
    for balance in report {
        println!(
            "{:<16} {:>7} {:>8} {:>8} {:>4} {:>12} {:>8} {:>8.2} {:>9}",
            balance.team,
            balance.total_players,
            balance.foreign_players,
            balance.batters,
            balance.wicketkeepers,
            balance.allrounders,
            balance.bowlers,
            balance.average_rating,
            if balance.balanced { "yes" } else { "no" }
        );
    }
}

fn print_standings(rows: &[StandingsRow]) {
    println!("\n=== Points Table ===");
    println!(
        "{:<4} {:<16} {:>3} {:>3} {:>3} {:>4} {:>7} {:>3} {:>5}",
        "Pos", "Team", "M", "W", "L", "Pts", "NRR", "Q", "Form"
    );
    for (index, row) in rows.iter().enumerate() {
        println!(
            "{:<4} {:<16} {:>3} {:>3} {:>3} {:>4} {:>7.2} {:>3} {:>5}",
            index + 1,
            row.team,
            row.matches,
            row.wins,
            row.losses,
            row.points,
            row.nrr,
            if row.qualified { "Q" } else { "" },
            row.latest_form().map(|m| m.arrow()).unwrap_or("")
        );
    }
}
