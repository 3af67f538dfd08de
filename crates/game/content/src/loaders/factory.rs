//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use spellcraft_core::{Actor, EngineConfig, StaticCatalog, StaticWorld};

use crate::loaders::{ActorLoader, AreaLoader, CatalogLoader, ConfigLoader, LoadResult};

/// Content factory that loads all spell content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── engine.toml
/// ├── abilities.ron
/// ├── actors.ron
/// └── areas/
///     ├── ember_crypt.ron
///     └── village_inn.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load engine tuning from `engine.toml`, or the defaults when the file
    /// is absent.
    pub fn load_config(&self) -> LoadResult<EngineConfig> {
        let path = self.data_dir.join("engine.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no engine.toml; using defaults");
            return Ok(EngineConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the ability catalog from `abilities.ron`.
    pub fn load_catalog(&self) -> LoadResult<StaticCatalog> {
        CatalogLoader::load(&self.data_dir.join("abilities.ron"))
    }

    /// Load the actor roster from `actors.ron`.
    pub fn load_actors(&self) -> LoadResult<Vec<Actor>> {
        ActorLoader::load(&self.data_dir.join("actors.ron"))
    }

    /// Load an area from `areas/{area}.ron`.
    pub fn load_area(&self, area: &str) -> LoadResult<StaticWorld> {
        let path = self.data_dir.join("areas").join(format!("{area}.ron"));
        AreaLoader::load(&path)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
