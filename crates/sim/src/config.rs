//! Simulation settings read from the environment.
use std::env;
use std::path::PathBuf;

/// Settings for one scripted duel.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Base seed for every roll in the duel.
    pub seed: u64,
    /// Content directory; the embedded sample set is used when unset.
    pub data_dir: Option<PathBuf>,
    /// Area the duel takes place in.
    pub area: String,
    /// Area the party retreats to after the duel.
    pub rest_area: String,
    /// Seconds spent resting there.
    pub rest_secs: u64,
    /// Engine time that passes between two script steps.
    pub step_ms: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            data_dir: None,
            area: "ember_crypt".to_owned(),
            rest_area: "village_inn".to_owned(),
            rest_secs: 10,
            step_ms: 1_500,
        }
    }
}

impl SimConfig {
    /// Construct simulation settings from environment variables.
    ///
    /// Environment variables:
    /// - `SPELLCRAFT_SEED` - Base seed (default: 42)
    /// - `SPELLCRAFT_DATA_DIR` - Content directory (default: embedded sample)
    /// - `SPELLCRAFT_AREA` - Area name (default: ember_crypt)
    /// - `SPELLCRAFT_REST_AREA` - Area rested in afterwards (default: village_inn)
    /// - `SPELLCRAFT_REST_SECS` - Seconds of rest (default: 10)
    /// - `SPELLCRAFT_STEP_MS` - Milliseconds between steps (default: 1500)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(seed) = read_env::<u64>("SPELLCRAFT_SEED") {
            config.seed = seed;
        }
        if let Some(dir) = read_env::<PathBuf>("SPELLCRAFT_DATA_DIR") {
            config.data_dir = Some(dir);
        }
        if let Some(area) = read_env::<String>("SPELLCRAFT_AREA") {
            config.area = area;
        }
        if let Some(area) = read_env::<String>("SPELLCRAFT_REST_AREA") {
            config.rest_area = area;
        }
        if let Some(secs) = read_env::<u64>("SPELLCRAFT_REST_SECS") {
            config.rest_secs = secs;
        }
        if let Some(step) = read_env::<u64>("SPELLCRAFT_STEP_MS") {
            config.step_ms = step;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
