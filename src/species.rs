//! Species metadata module.
//!
//! The breeding subsystem does not own the species database. It reads egg
//! cycles and native regions through the `SpeciesData` trait; `MapSpeciesData`
//! is an in-memory implementation for tests and small games.

use std::collections::HashMap;

/// Read access to species metadata.
///
/// # Examples
///
/// ```rust
/// use eggworks::species::{MapSpeciesData, SpeciesData};
///
/// let mut data = MapSpeciesData::new();
/// data.insert("Pichu", Some(10), 1);
///
/// assert_eq!(data.egg_cycles("Pichu"), Some(10));
/// assert_eq!(data.native_region("Pichu"), Some(1));
/// assert_eq!(data.egg_cycles("Missingno"), None);
/// ```
pub trait SpeciesData: Send + Sync {
    /// Egg cycles for a species, if the species defines them.
    fn egg_cycles(&self, species: &str) -> Option<u32>;

    /// Region the species was introduced in, if known.
    fn native_region(&self, species: &str) -> Option<u32>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SpeciesEntry {
    egg_cycles: Option<u32>,
    native_region: u32,
}

/// A map-based species database.
#[derive(Debug, Clone, Default)]
pub struct MapSpeciesData {
    entries: HashMap<String, SpeciesEntry>,
}

impl MapSpeciesData {
    /// Create an empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a species.
    pub fn insert(&mut self, species: impl Into<String>, egg_cycles: Option<u32>, native_region: u32) {
        self.entries.insert(
            species.into(),
            SpeciesEntry {
                egg_cycles,
                native_region,
            },
        );
    }

    /// Builder form of [`MapSpeciesData::insert`].
    pub fn with(mut self, species: impl Into<String>, egg_cycles: Option<u32>, native_region: u32) -> Self {
        self.insert(species, egg_cycles, native_region);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SpeciesData for MapSpeciesData {
    fn egg_cycles(&self, species: &str) -> Option<u32> {
        self.entries.get(species).and_then(|e| e.egg_cycles)
    }

    fn native_region(&self, species: &str) -> Option<u32> {
        self.entries.get(species).map(|e| e.native_region)
    }
}

/// Fossil item name to the species it revives as.
///
/// # Examples
///
/// ```rust
/// use eggworks::species::FossilTable;
///
/// let fossils = FossilTable::standard();
/// assert_eq!(fossils.species_for("Helix Fossil"), Some("Omanyte"));
/// assert_eq!(fossils.species_for("Rock"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FossilTable {
    fossils: HashMap<String, String>,
}

impl FossilTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock fossils.
    pub fn standard() -> Self {
        let mut table = Self::new();
        table.insert("Helix Fossil", "Omanyte");
        table.insert("Dome Fossil", "Kabuto");
        table.insert("Old Amber", "Aerodactyl");
        table
    }

    pub fn insert(&mut self, fossil: impl Into<String>, species: impl Into<String>) {
        self.fossils.insert(fossil.into(), species.into());
    }

    pub fn species_for(&self, fossil: &str) -> Option<&str> {
        self.fossils.get(fossil).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_species_without_cycles() {
        let data = MapSpeciesData::new().with("Ditto", None, 0);
        assert_eq!(data.egg_cycles("Ditto"), None);
        assert_eq!(data.native_region("Ditto"), Some(0));
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn test_insert_replaces() {
        let mut data = MapSpeciesData::new();
        data.insert("Eevee", Some(35), 0);
        data.insert("Eevee", Some(20), 0);
        assert_eq!(data.egg_cycles("Eevee"), Some(20));
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn test_standard_fossils() {
        let fossils = FossilTable::standard();
        assert_eq!(fossils.species_for("Dome Fossil"), Some("Kabuto"));
        assert_eq!(fossils.species_for("Old Amber"), Some("Aerodactyl"));
    }
}
