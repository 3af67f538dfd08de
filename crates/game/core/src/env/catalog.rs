//! Ability catalog oracle and its in-memory implementation.

use std::collections::BTreeMap;

use crate::ability::AbilityDefinition;
use crate::state::{AbilityId, ActorClass};

use super::error::OracleError;

/// Read-only lookup of ability definitions.
pub trait AbilityCatalog: Send + Sync {
    fn ability(&self, id: &AbilityId) -> Option<&AbilityDefinition>;

    /// Abilities a `class` may learn at or below `level`, in catalog order.
    fn abilities_for_level(&self, class: ActorClass, level: u32) -> Vec<&AbilityDefinition>;

    /// Like [`ability`](Self::ability) but fails with [`OracleError::AbilityNotFound`].
    fn require(&self, id: &AbilityId) -> Result<&AbilityDefinition, OracleError> {
        self.ability(id)
            .ok_or_else(|| OracleError::AbilityNotFound(id.clone()))
    }
}

/// In-memory catalog keyed by ability id.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    abilities: BTreeMap<AbilityId, AbilityDefinition>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog, rejecting duplicate ids.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = AbilityDefinition>,
    ) -> Result<Self, OracleError> {
        let mut catalog = Self::new();
        for definition in definitions {
            catalog.insert(definition)?;
        }
        Ok(catalog)
    }

    pub fn insert(&mut self, definition: AbilityDefinition) -> Result<(), OracleError> {
        if self.abilities.contains_key(&definition.id) {
            return Err(OracleError::DuplicateAbility(definition.id));
        }
        self.abilities.insert(definition.id.clone(), definition);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.abilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AbilityDefinition> {
        self.abilities.values()
    }
}

impl AbilityCatalog for StaticCatalog {
    fn ability(&self, id: &AbilityId) -> Option<&AbilityDefinition> {
        self.abilities.get(id)
    }

    fn abilities_for_level(&self, class: ActorClass, level: u32) -> Vec<&AbilityDefinition> {
        self.abilities
            .values()
            .filter(|a| a.learn_level <= level && a.allows_class(class))
            .collect()
    }
}
