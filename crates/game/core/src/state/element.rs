/// Elemental affinity of an ability, an area or a resistance entry.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Element {
    /// No elemental affinity.
    #[default]
    Neutral,
    Physical,
    Fire,
    Ice,
    Lightning,
    Water,
    Earth,
    Wind,
    Nature,
    Light,
    Dark,
    Arcane,
}

impl Element {
    /// Physical damage is reduced by armor; everything else by magic resistance.
    pub const fn is_physical(self) -> bool {
        matches!(self, Self::Physical)
    }
}

/// How a damage effect is mitigated by the target's defenses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum DamageCategory {
    /// Reduced by armor.
    Physical,
    /// Reduced by magic resistance.
    Magical,
    /// Ignores defenses entirely.
    True,
}

impl DamageCategory {
    /// Default category for damage of the given element.
    pub const fn for_element(element: Element) -> Self {
        if element.is_physical() {
            Self::Physical
        } else {
            Self::Magical
        }
    }
}
