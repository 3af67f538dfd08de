//! Data-driven content definitions and loaders.
//!
//! This crate houses spell content and provides loaders for RON/TOML data files:
//! - Ability catalogs (data-driven via RON)
//! - Actor rosters (data-driven via RON)
//! - Area descriptions for the world oracle (data-driven via RON)
//! - Engine tuning (data-driven via TOML)
//!
//! A sample data set is embedded in the binary; see [`sample`].
//!
//! All loaders use spellcraft-core types directly with serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub mod sample;

#[cfg(feature = "loaders")]
pub use loaders::{ActorLoader, AreaLoader, CatalogLoader, ConfigLoader, ContentFactory, LoadResult};
