use anyhow::Result;
use bet_middleware::{Bet, BetBuilder, Bookmaker, Config, SportsBetAu};
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bet-middleware")]
#[command(about = "Place bets through a common bookmaker API", long_about = None)]
struct Cli {
    /// Path to the credentials file
    #[arg(short, long, global = true, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the sample bet and place it with SportsBetAU
    Demo,
    /// Validate a bet described in a TOML file and place it with SportsBetAU
    Place {
        /// TOML file with the bet fields
        bet: PathBuf,
    },
    /// List events currently offered by SportsBetAU
    Events,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let mut bookmaker = load_bookmaker(&cli.config)?;

    match cli.command {
        Commands::Demo => place(&sample_bet()?, &mut bookmaker).await,
        Commands::Place { bet } => {
            let builder: BetBuilder = toml::from_str(&fs::read_to_string(&bet)?)?;
            place(&builder.build()?, &mut bookmaker).await
        }
        Commands::Events => {
            let events = bookmaker.get_available_events().await?;
            info!("{} has {} event(s) on offer", bookmaker.name(), events.len());
            for event in events {
                println!(
                    "{}  {}  {}  {}",
                    event.event_id,
                    event.start_time.format("%Y-%m-%d %H:%M:%S"),
                    event.sport,
                    event.name
                );
            }
            Ok(())
        }
    }
}

fn load_bookmaker(path: &Path) -> Result<SportsBetAu> {
    if !path.exists() {
        info!("No config at {}, using anonymous session", path.display());
        return Ok(SportsBetAu::new());
    }

    let config = Config::from_path(path)?;
    Ok(match config.sportsbet_au {
        Some(credentials) => SportsBetAu::with_credentials(credentials),
        None => SportsBetAu::new(),
    })
}

fn sample_bet() -> Result<Bet> {
    let event_date = NaiveDateTime::parse_from_str("2021-06-01 12:00:00", "%Y-%m-%d %H:%M:%S")?;

    let bet = Bet::builder()
        .event_id(1)
        .bookmaker_id(1)
        .sport("duck duck goose")
        .event_date(event_date)
        .event_tz("Australia/Perth")
        .participants(["Silly Goose", "Daffy Duck"])
        .outcome("win")
        .target("Silly Goose")
        .stake(Decimal::new(990, 1))
        .odds(Decimal::new(14, 1))
        .odds_unit("decimal")
        .build()?;
    Ok(bet)
}

async fn place(bet: &Bet, bookmaker: &mut SportsBetAu) -> Result<()> {
    println!("{}", bet);

    let receipt = bet.place_with_bookmaker(bookmaker).await?;
    info!(
        "Bet {} accepted by {} at {}",
        receipt.bet_ref,
        receipt.bookmaker,
        receipt.placed_at.format("%Y-%m-%d %H:%M:%S")
    );
    if let Some(potential) = bet.potential_return() {
        println!("Potential return: {:.2}", potential.round_dp(2));
    }
    Ok(())
}
