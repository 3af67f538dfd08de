//! Engine configuration loader.

use std::path::Path;

use anyhow::{Context, ensure};
use spellcraft_core::EngineConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for engine tuning from TOML files.
///
/// Every key is optional; missing keys keep their [`EngineConfig::default`]
/// value.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<EngineConfig> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in config {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<EngineConfig> {
        let config: EngineConfig =
            toml::from_str(content).context("Failed to parse engine config TOML")?;
        Self::check(&config)?;
        Ok(config)
    }

    fn check(config: &EngineConfig) -> LoadResult<()> {
        ensure!(
            (0.0..1.0).contains(&config.damage_variance),
            "damage_variance must be in [0, 1), got {}",
            config.damage_variance
        );
        ensure!(
            (0.0..1.0).contains(&config.heal_variance),
            "heal_variance must be in [0, 1), got {}",
            config.heal_variance
        );
        ensure!(
            config.defense_constant > 0.0,
            "defense_constant must be positive"
        );
        ensure!(
            (0.0..=1.0).contains(&config.drain_transfer),
            "drain_transfer must be in [0, 1]"
        );
        ensure!(
            config.chain_decay > 0.0 && config.chain_decay <= 1.0,
            "chain_decay must be in (0, 1]"
        );
        Ok(())
    }
}
