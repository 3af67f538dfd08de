//! Sample content compiled into the crate.
//!
//! The same files ship under `data/` so a [`ContentFactory`](crate::ContentFactory)
//! pointed at that directory loads identical content.

use spellcraft_core::{Actor, EngineConfig, StaticCatalog, StaticWorld};

use crate::loaders::{ActorLoader, AreaLoader, CatalogLoader, ConfigLoader, LoadResult};

pub const ABILITIES_RON: &str = include_str!("../data/abilities.ron");
pub const ACTORS_RON: &str = include_str!("../data/actors.ron");
pub const ENGINE_TOML: &str = include_str!("../data/engine.toml");
pub const EMBER_CRYPT_RON: &str = include_str!("../data/areas/ember_crypt.ron");
pub const VILLAGE_INN_RON: &str = include_str!("../data/areas/village_inn.ron");

pub fn catalog() -> LoadResult<StaticCatalog> {
    CatalogLoader::parse(ABILITIES_RON)
}

pub fn actors() -> LoadResult<Vec<Actor>> {
    ActorLoader::parse(ACTORS_RON)
}

pub fn config() -> LoadResult<EngineConfig> {
    ConfigLoader::parse(ENGINE_TOML)
}

/// Sample area by name (`ember_crypt` or `village_inn`).
pub fn area(name: &str) -> LoadResult<StaticWorld> {
    match name {
        "ember_crypt" => AreaLoader::parse(EMBER_CRYPT_RON),
        "village_inn" => AreaLoader::parse(VILLAGE_INN_RON),
        other => anyhow::bail!("no sample area named '{other}'"),
    }
}
