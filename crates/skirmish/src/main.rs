//! Headless skirmish driver.
//!
//! Loads a scenario, an attack catalog and combat tuning (the bundled copies
//! unless paths are given), then plays every unit greedily until one team is
//! left standing or the round limit is hit.
//! Run with: `cargo run -p skirmish -- --rounds 10`

mod driver;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tactics_content::{AttackLoader, ConfigLoader, ScenarioLoader};
use tracing::info;

use driver::{Outcome, Skirmish};

/// Play a scripted skirmish and log the result
#[derive(Parser)]
#[command(name = "skirmish")]
#[command(about = "Headless grid tactics skirmish", long_about = None)]
#[command(version)]
struct Cli {
    /// Scenario RON file (map rows and units)
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Attack catalog RON file
    #[arg(long)]
    attacks: Option<PathBuf>,

    /// Combat configuration TOML file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Stop after this many rounds
    #[arg(long, default_value_t = 20)]
    rounds: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let scenario = match &cli.scenario {
        Some(path) => ScenarioLoader::load(path)?,
        None => ScenarioLoader::bundled().context("bundled scenario")?,
    };
    let catalog = match &cli.attacks {
        Some(path) => AttackLoader::load(path)?,
        None => AttackLoader::bundled().context("bundled attack catalog")?,
    };
    let config = match &cli.config {
        Some(path) => ConfigLoader::load(path)?,
        None => ConfigLoader::bundled().context("bundled combat config")?,
    };

    let mut skirmish = Skirmish::new(scenario, &catalog, config)?;
    match skirmish.run(cli.rounds) {
        Outcome::Victory { team, rounds } => info!(team, rounds, "skirmish won"),
        Outcome::Stalemate { rounds } => info!(rounds, "skirmish ended without a winner"),
    }
    for unit in skirmish.battlefield().units() {
        info!(
            unit = %unit.id,
            name = %unit.name,
            position = %unit.position,
            hp = unit.hp.current,
            "final state"
        );
    }
    Ok(())
}
