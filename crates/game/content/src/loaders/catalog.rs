//! Ability catalog loader.

use std::path::Path;

use anyhow::{Context, bail};
use spellcraft_core::{AbilityDefinition, EffectSpec, StaticCatalog};

use crate::loaders::{LoadResult, read_file};

/// Loader for ability catalogs from RON files.
///
/// RON format: `Vec<AbilityDefinition>`, one entry per ability, effects in
/// resolution order.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load and index an ability catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<StaticCatalog> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in catalog {}", path.display()))
    }

    /// Parse catalog RON text into an indexed catalog.
    ///
    /// Fails on malformed RON, duplicate ids, or negative cooldowns.
    pub fn parse(content: &str) -> LoadResult<StaticCatalog> {
        let definitions = Self::parse_definitions(content)?;
        for definition in &definitions {
            Self::check(definition)?;
        }
        let catalog = StaticCatalog::from_definitions(definitions)?;
        tracing::debug!(abilities = catalog.len(), "ability catalog loaded");
        Ok(catalog)
    }

    /// Parse catalog RON text without indexing it.
    pub fn parse_definitions(content: &str) -> LoadResult<Vec<AbilityDefinition>> {
        ron::from_str(content).context("Failed to parse ability catalog RON")
    }

    fn check(definition: &AbilityDefinition) -> LoadResult<()> {
        if !definition.cooldown_secs.is_finite() || definition.cooldown_secs < 0.0 {
            bail!(
                "ability '{}' has invalid cooldown {}",
                definition.id,
                definition.cooldown_secs
            );
        }
        if definition.effects.is_empty() {
            tracing::warn!(ability = %definition.id, "ability has no effects");
        }
        for effect in &definition.effects {
            if let EffectSpec::Unsupported { kind } = effect {
                tracing::debug!(ability = %definition.id, kind, "catalog names an unsupported effect");
            }
        }
        Ok(())
    }
}
