//! Actor roster loader.
//!
//! Loads player characters and monsters from RON files. Mana pools are left
//! uninitialized (`max_mp: None`) unless the file sets them; the engine
//! initializes them on first use.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, bail};
use spellcraft_core::Actor;

use crate::loaders::{LoadResult, read_file};

/// Loader for actor rosters from RON files.
///
/// RON format: `Vec<Actor>`.
pub struct ActorLoader;

impl ActorLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Actor>> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in roster {}", path.display()))
    }

    /// Parse roster RON text.
    ///
    /// An actor listed with `hp` above `max_hp` is clamped; duplicate ids
    /// are rejected.
    pub fn parse(content: &str) -> LoadResult<Vec<Actor>> {
        let mut actors: Vec<Actor> =
            ron::from_str(content).context("Failed to parse actor roster RON")?;

        let mut seen = BTreeSet::new();
        for actor in &mut actors {
            if !seen.insert(actor.id) {
                bail!("actor id {} listed more than once", actor.id);
            }
            if actor.stats.hp > actor.stats.max_hp {
                tracing::warn!(
                    actor = %actor.id,
                    hp = actor.stats.hp,
                    max_hp = actor.stats.max_hp,
                    "hp above max_hp; clamped"
                );
                actor.stats.hp = actor.stats.max_hp;
            }
        }
        Ok(actors)
    }
}
