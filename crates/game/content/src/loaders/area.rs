//! Area loader.
//!
//! An area file describes what the world oracle reports while the party is
//! there: its name, time of day, combat and rest flags, and elemental
//! affinities.

use std::path::Path;

use anyhow::{Context, ensure};
use spellcraft_core::StaticWorld;

use crate::loaders::{LoadResult, read_file};

/// Loader for area descriptions from RON files.
///
/// RON format: a single `StaticWorld`; omitted fields take their defaults.
pub struct AreaLoader;

impl AreaLoader {
    pub fn load(path: &Path) -> LoadResult<StaticWorld> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in area {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<StaticWorld> {
        let world: StaticWorld = ron::from_str(content).context("Failed to parse area RON")?;
        for (element, multiplier) in &world.affinities {
            ensure!(
                *multiplier >= 0.0,
                "affinity for {element} must not be negative"
            );
        }
        Ok(world)
    }
}
