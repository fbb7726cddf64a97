//! Species table module.
//!
//! Maps each hatchable egg type to its progression tiers. Tier `n` holds the
//! species that become hatchable once region `n` is unlocked.

use crate::egg_type::EggType;
use std::collections::HashMap;

/// Read-only mapping `EggType -> [tier 0, tier 1, ...]`.
///
/// Built once per game session; there is no shared global instance.
///
/// # Examples
///
/// ```rust
/// use eggworks::{EggType, SpeciesTable};
///
/// let table = SpeciesTable::standard();
/// assert_eq!(table.tiers(EggType::Fighting)[1], vec!["Tyrogue".to_string()]);
/// assert!(table.tiers(EggType::Mystery).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeciesTable {
    tiers: HashMap<EggType, Vec<Vec<String>>>,
}

impl SpeciesTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock table for the first two regions.
    pub fn standard() -> Self {
        let mut table = Self::new();
        table.insert(
            EggType::Fire,
            &[
                &["Charmander", "Vulpix", "Growlithe", "Ponyta"],
                &["Cyndaquil", "Slugma", "Houndour", "Magby"],
            ],
        );
        table.insert(
            EggType::Water,
            &[
                &["Squirtle", "Lapras", "Staryu", "Psyduck"],
                &["Totodile", "Wooper", "Marill", "Qwilfish"],
            ],
        );
        table.insert(
            EggType::Grass,
            &[
                &["Bulbasaur", "Oddish", "Tangela", "Bellsprout"],
                &["Chikorita", "Hoppip", "Sunkern"],
            ],
        );
        table.insert(
            EggType::Fighting,
            &[&["Hitmonlee", "Hitmonchan", "Machop", "Mankey"], &["Tyrogue"]],
        );
        table.insert(
            EggType::Electric,
            &[
                &["Magnemite", "Pikachu", "Voltorb", "Electabuzz"],
                &["Chinchou", "Mareep", "Elekid"],
            ],
        );
        table.insert(
            EggType::Dragon,
            &[&["Dratini", "Dragonair", "Dragonite"], &[]],
        );
        table
    }

    /// Replace the tiers for one egg type.
    pub fn insert(&mut self, egg_type: EggType, tiers: &[&[&str]]) {
        let owned = tiers
            .iter()
            .map(|tier| tier.iter().map(|s| s.to_string()).collect())
            .collect();
        self.tiers.insert(egg_type, owned);
    }

    /// Tiers for a type, lowest region first. Empty for unknown types.
    pub fn tiers(&self, egg_type: EggType) -> &[Vec<String>] {
        self.tiers.get(&egg_type).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Egg types that have an entry in the table.
    pub fn egg_types(&self) -> Vec<EggType> {
        let mut types: Vec<EggType> = self.tiers.keys().copied().collect();
        types.sort();
        types
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_covers_every_hatchable_type() {
        let table = SpeciesTable::standard();
        assert_eq!(table.egg_types(), EggType::HATCHABLE.to_vec());
        for egg_type in EggType::HATCHABLE {
            assert_eq!(table.tiers(egg_type).len(), 2, "{egg_type}");
        }
    }

    #[test]
    fn test_dragon_second_tier_is_empty() {
        let table = SpeciesTable::standard();
        assert!(table.tiers(EggType::Dragon)[1].is_empty());
    }

    #[test]
    fn test_fresh_tables_are_independent() {
        let mut a = SpeciesTable::standard();
        let b = SpeciesTable::standard();
        a.insert(EggType::Fire, &[&["Magmar"]]);
        assert_ne!(a, b);
        assert_eq!(b.tiers(EggType::Fire)[0][0], "Charmander");
    }
}
