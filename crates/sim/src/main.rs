//! Spellcraft duel simulator.
//!
//! Composition root: loads content (a data directory or the embedded sample
//! set), wires the oracles into a [`SpellEngine`], runs a scripted duel,
//! prints every effect result and finally rests the party at an inn.
//!
//! ```bash
//! SPELLCRAFT_SEED=7 RUST_LOG=spellcraft_core=debug cargo run -p spellcraft-sim
//! ```
mod config;
mod duel;
mod report;

use anyhow::{Context, Result};
use spellcraft_content::{ContentFactory, sample};
use spellcraft_core::{PcgRng, SpellEngine, SpellEnv, TracingNotifier};

use crate::config::SimConfig;
use crate::duel::Roster;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let config = SimConfig::from_env();
    tracing::info!(seed = config.seed, area = %config.area, "starting duel");

    let (engine_config, catalog, actors, world, rest_world) = match &config.data_dir {
        Some(dir) => {
            let factory = ContentFactory::new(dir);
            (
                factory.load_config()?,
                factory.load_catalog()?,
                factory.load_actors()?,
                factory.load_area(&config.area)?,
                factory.load_area(&config.rest_area)?,
            )
        }
        None => (
            sample::config()?,
            sample::catalog()?,
            sample::actors()?,
            sample::area(&config.area)?,
            sample::area(&config.rest_area)?,
        ),
    };
    tracing::info!(abilities = catalog.len(), actors = actors.len(), "content loaded");

    let rng = PcgRng;
    let notifier = TracingNotifier;
    let env = SpellEnv::new(&catalog, &world, &rng).with_notifier(&notifier);
    let mut engine = SpellEngine::with_config(env, engine_config, config.seed);

    let mut roster = Roster::new(actors);
    duel::run(&mut engine, &mut roster, config.step_ms).context("duel aborted")?;
    duel::rest(&mut engine, &mut roster, &rest_world, config.rest_secs);

    tracing::info!(casts = engine.nonce(), now = %engine.now(), "duel finished");
    Ok(())
}

/// Logs go to stderr so stdout carries only the duel transcript.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
