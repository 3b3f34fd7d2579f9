//! Hexwatch - headless expedition runner
//!
//! Sets out the demo party on the demo map, issues a fixed order for each
//! crew member every watch, and prints what happened.

use clap::{Parser, ValueEnum};
use hexwatch::core::{ExpeditionConfig, ExpeditionError, Result};
use hexwatch::dice::SeededDice;
use hexwatch::expedition::{initialize_crew, Action, Expedition, Hex, HexMap};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Headless expedition runner
#[derive(Parser, Debug)]
#[command(name = "hexwatch")]
#[command(about = "Run a crew across a hex map, one watch at a time")]
struct Args {
    /// Number of watches to run
    #[arg(long, default_value_t = 4)]
    watches: u64,

    /// Random seed for deterministic runs (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// TOML config with day length and exhaustion penalty
    #[arg(long)]
    config: Option<PathBuf>,

    /// Crew names, in roster order
    #[arg(long, value_delimiter = ',', default_value = "Alice,Bob,Charlie")]
    crew: Vec<String>,

    /// Order for each crew member every watch; "none" for no action
    #[arg(long, value_delimiter = ',', default_value = "Trek,Guard,Rest")]
    orders: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// One narrative line per event
    Text,
    /// Watch reports and final party as JSON
    Json,
}

/// JSON output structure
#[derive(Serialize)]
struct RunOutput<'a> {
    seed: u64,
    reports: &'a [hexwatch::expedition::WatchReport],
    party: &'a [hexwatch::expedition::CrewMember],
}

fn demo_map() -> HexMap {
    HexMap::new(vec![
        Hex::new(1).safe_to_rest().with_hidden_items(),
        Hex::new(2).dangerous(),
        Hex::new(3).safe_to_rest(),
    ])
}

fn parse_orders(orders: &[String], party_size: usize) -> Result<Vec<Option<Action>>> {
    let mut parsed: Vec<Option<Action>> = orders
        .iter()
        .map(|o| {
            if o.trim().eq_ignore_ascii_case("none") {
                Ok(None)
            } else {
                o.parse().map(Some)
            }
        })
        .collect::<Result<_>>()?;
    if parsed.len() > party_size {
        return Err(ExpeditionError::InvalidState(format!(
            "{} orders given for a party of {}",
            parsed.len(),
            party_size
        )));
    }
    parsed.resize(party_size, None);
    Ok(parsed)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hexwatch=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ExpeditionConfig::load_file(path)?,
        None => ExpeditionConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, watches = args.watches, "expedition sets out");

    let party = initialize_crew(&args.crew);
    let orders = parse_orders(&args.orders, party.len())?;
    let mut expedition =
        Expedition::with_config(party, demo_map(), SeededDice::new(seed), &config)?;

    let reports = expedition.run(args.watches, |_, index, _| orders[index])?;

    if args.format == OutputFormat::Json {
        let output = RunOutput {
            seed,
            reports: &reports,
            party: &expedition.party,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for report in &reports {
        println!("\n--- Watch {} ---", report.watch);
        for event in &report.events {
            println!("{}", event);
        }
    }
    println!();
    for member in &expedition.party {
        println!(
            "{}: stress {}, {}",
            member.name,
            member.stress,
            if member.is_lost() { "lost" } else { "with the party" }
        );
    }
    Ok(())
}
