//! Egg type module.
//!
//! `EggType` decides which species pool an egg draws from. `Pokemon` and
//! `Fossil` eggs come from a known source; `Mystery` eggs hide their
//! resolved type until they hatch.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of an egg.
///
/// Serialized by name, so saves stay readable and survive reordering.
///
/// # Examples
///
/// ```rust
/// use eggworks::EggType;
///
/// assert!(EggType::Fire.is_hatchable());
/// assert!(!EggType::Mystery.is_hatchable());
/// assert_eq!(EggType::Electric.to_string(), "Electric");
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EggType {
    Fire,
    Water,
    Grass,
    Fighting,
    Electric,
    Dragon,
    Pokemon,
    Fossil,
    Mystery,
}

impl EggType {
    /// Every egg type, in declaration order.
    pub const ALL: [EggType; 9] = [
        EggType::Fire,
        EggType::Water,
        EggType::Grass,
        EggType::Fighting,
        EggType::Electric,
        EggType::Dragon,
        EggType::Pokemon,
        EggType::Fossil,
        EggType::Mystery,
    ];

    /// Types a mystery egg may secretly resolve to.
    pub const HATCHABLE: [EggType; 6] = [
        EggType::Fire,
        EggType::Water,
        EggType::Grass,
        EggType::Fighting,
        EggType::Electric,
        EggType::Dragon,
    ];

    /// Whether this type has its own tiered species pool.
    pub fn is_hatchable(self) -> bool {
        Self::HATCHABLE.contains(&self)
    }

    /// Display name of the type.
    pub fn as_str(self) -> &'static str {
        match self {
            EggType::Fire => "Fire",
            EggType::Water => "Water",
            EggType::Grass => "Grass",
            EggType::Fighting => "Fighting",
            EggType::Electric => "Electric",
            EggType::Dragon => "Dragon",
            EggType::Pokemon => "Pokemon",
            EggType::Fossil => "Fossil",
            EggType::Mystery => "Mystery",
        }
    }
}

impl fmt::Display for EggType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hatchable_excludes_special_types() {
        for egg_type in [EggType::Pokemon, EggType::Fossil, EggType::Mystery] {
            assert!(!egg_type.is_hatchable());
        }
        assert_eq!(
            EggType::ALL.iter().filter(|t| t.is_hatchable()).count(),
            EggType::HATCHABLE.len()
        );
    }

    #[test]
    fn test_egg_type_serializes_by_name() {
        let json = serde_json::to_string(&EggType::Fossil).unwrap();
        assert_eq!(json, "\"Fossil\"");
        let back: EggType = serde_json::from_str("\"Water\"").unwrap();
        assert_eq!(back, EggType::Water);
    }
}
