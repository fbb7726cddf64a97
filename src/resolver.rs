//! Egg resolver module.
//!
//! Provides the `EggResolver`, which decides what species a typed or
//! mystery egg will hatch into, given how far the player has progressed.

use crate::egg_type::EggType;
use crate::error::BreedingError;
use crate::table::SpeciesTable;
use rand::seq::SliceRandom;
use rand::Rng;

/// Picks concrete species for typed and mystery eggs.
///
/// Resolution works in two draws:
/// 1. Build a pool of tiers. Only tiers `0..=highest_region` take part.
///    Each non-empty tier is appended `max(1, pool_len_so_far)` times, so
///    every newly unlocked tier weighs as much as everything before it.
/// 2. Pick one tier from the pool, then one species from that tier.
///
/// # Examples
///
/// ```rust
/// use eggworks::{EggResolver, EggType, SpeciesTable};
///
/// let resolver = EggResolver::new(SpeciesTable::standard());
/// let mut rng = rand::thread_rng();
///
/// let species = resolver.resolve_species(EggType::Fire, 0, &mut rng).unwrap();
/// assert!(["Charmander", "Vulpix", "Growlithe", "Ponyta"].contains(&species.as_str()));
/// ```
#[derive(Debug, Clone)]
pub struct EggResolver {
    table: SpeciesTable,
}

impl EggResolver {
    /// Create a resolver over a species table.
    pub fn new(table: SpeciesTable) -> Self {
        Self { table }
    }

    /// The table this resolver draws from.
    pub fn table(&self) -> &SpeciesTable {
        &self.table
    }

    /// Build the weighted tier pool for a type.
    ///
    /// Each entry is one tier; repeated entries carry the weight.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eggworks::{EggResolver, EggType, SpeciesTable};
    ///
    /// let mut table = SpeciesTable::new();
    /// table.insert(EggType::Grass, &[&["A"], &[], &["B"], &["C"]]);
    /// let resolver = EggResolver::new(table);
    ///
    /// let pool = resolver.hatch_pool(EggType::Grass, 3);
    /// let names: Vec<&str> = pool.iter().map(|tier| tier[0].as_str()).collect();
    /// // A once, B once (pool had 1), C twice (pool had 2).
    /// assert_eq!(names, ["A", "B", "C", "C"]);
    /// ```
    pub fn hatch_pool(&self, egg_type: EggType, highest_region: u32) -> Vec<&[String]> {
        let unlocked = (highest_region as usize).saturating_add(1);
        let mut pool: Vec<&[String]> = Vec::new();
        for tier in self.table.tiers(egg_type).iter().take(unlocked) {
            if tier.is_empty() {
                continue;
            }
            let copies = pool.len().max(1);
            pool.extend(std::iter::repeat(tier.as_slice()).take(copies));
        }
        pool
    }

    /// Resolve a species for an egg of `egg_type`.
    ///
    /// Fails with `EmptyPool` when no species is hatchable yet.
    pub fn resolve_species<R: Rng + ?Sized>(
        &self,
        egg_type: EggType,
        highest_region: u32,
        rng: &mut R,
    ) -> Result<String, BreedingError> {
        let empty_pool = || BreedingError::EmptyPool {
            egg_type,
            highest_region,
        };

        let pool = self.hatch_pool(egg_type, highest_region);
        let tier = pool.choose(rng).ok_or_else(empty_pool)?;
        let species = tier.choose(rng).ok_or_else(empty_pool)?;
        Ok(species.clone())
    }

    /// Resolve a mystery egg.
    ///
    /// Picks a hatchable type uniformly, then resolves it. Returns the
    /// secret type alongside the species; the egg itself is shown as
    /// `Mystery` until it hatches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eggworks::{EggResolver, EggType, SpeciesTable};
    ///
    /// let resolver = EggResolver::new(SpeciesTable::standard());
    /// let (egg_type, species) = resolver
    ///     .resolve_random_type(0, &mut rand::thread_rng())
    ///     .unwrap();
    /// assert!(egg_type.is_hatchable());
    /// assert!(!species.is_empty());
    /// ```
    pub fn resolve_random_type<R: Rng + ?Sized>(
        &self,
        highest_region: u32,
        rng: &mut R,
    ) -> Result<(EggType, String), BreedingError> {
        let egg_type = EggType::HATCHABLE[rng.gen_range(0..EggType::HATCHABLE.len())];
        let species = self.resolve_species(egg_type, highest_region, rng)?;
        Ok((egg_type, species))
    }
}

impl Default for EggResolver {
    fn default() -> Self {
        Self::new(SpeciesTable::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    const FIRE_TIER_0: [&str; 4] = ["Charmander", "Vulpix", "Growlithe", "Ponyta"];
    const FIRE_TIER_1: [&str; 4] = ["Cyndaquil", "Slugma", "Houndour", "Magby"];

    #[test]
    fn test_region_zero_only_draws_first_tier() {
        let resolver = EggResolver::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let species = resolver.resolve_species(EggType::Fire, 0, &mut rng).unwrap();
            assert!(FIRE_TIER_0.contains(&species.as_str()), "{species}");
        }
    }

    #[test]
    fn test_pool_weights_double_per_tier() {
        let mut table = SpeciesTable::new();
        table.insert(EggType::Water, &[&["A"], &["B"], &["C"], &["D"]]);
        let resolver = EggResolver::new(table);

        let counts = |region| {
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for tier in resolver.hatch_pool(EggType::Water, region) {
                *counts.entry(tier[0].as_str()).or_default() += 1;
            }
            counts
        };

        let full = counts(3);
        assert_eq!(full["A"], 1);
        assert_eq!(full["B"], 1);
        assert_eq!(full["C"], 2);
        assert_eq!(full["D"], 4);
        assert_eq!(resolver.hatch_pool(EggType::Water, 1).len(), 2);
    }

    #[test]
    fn test_empty_tiers_do_not_advance_weighting() {
        let mut table = SpeciesTable::new();
        table.insert(EggType::Fire, &[&[], &["A"], &[], &["B"]]);
        let resolver = EggResolver::new(table);

        let pool = resolver.hatch_pool(EggType::Fire, 3);
        assert_eq!(pool.len(), 2);
        assert_eq!(pool[0][0], "A");
        assert_eq!(pool[1][0], "B");
    }

    #[test]
    fn test_locked_tiers_are_excluded() {
        let resolver = EggResolver::default();
        let pool = resolver.hatch_pool(EggType::Fire, 0);
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].len(), 4);
    }

    #[test]
    fn test_second_tier_beats_any_single_first_tier_species() {
        let resolver = EggResolver::default();
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts: HashMap<String, usize> = HashMap::new();
        for _ in 0..8000 {
            let species = resolver.resolve_species(EggType::Fire, 1, &mut rng).unwrap();
            *counts.entry(species).or_default() += 1;
        }

        let tier_1_total: usize = FIRE_TIER_1
            .iter()
            .map(|s| counts.get(*s).copied().unwrap_or(0))
            .sum();
        let best_tier_0 = FIRE_TIER_0
            .iter()
            .map(|s| counts.get(*s).copied().unwrap_or(0))
            .max()
            .unwrap();

        // Tiers 0 and 1 each get one pool entry: ~4000 tier-1 draws vs
        // ~1000 per tier-0 species.
        assert!(tier_1_total > best_tier_0 * 2, "{counts:?}");
    }

    #[test]
    fn test_single_species_tier_is_reachable() {
        let resolver = EggResolver::default();
        let mut rng = StdRng::seed_from_u64(3);
        let seen_tyrogue = (0..200).any(|_| {
            resolver
                .resolve_species(EggType::Fighting, 1, &mut rng)
                .unwrap()
                == "Tyrogue"
        });
        assert!(seen_tyrogue);
    }

    #[test]
    fn test_empty_pool_error() {
        let mut table = SpeciesTable::new();
        table.insert(EggType::Dragon, &[&[], &["Dratini"]]);
        let resolver = EggResolver::new(table);
        let mut rng = StdRng::seed_from_u64(1);

        let err = resolver
            .resolve_species(EggType::Dragon, 0, &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            BreedingError::EmptyPool {
                egg_type: EggType::Dragon,
                highest_region: 0
            }
        );
        assert!(resolver.resolve_species(EggType::Dragon, 1, &mut rng).is_ok());
    }

    #[test]
    fn test_unknown_type_has_empty_pool() {
        let resolver = EggResolver::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            resolver.resolve_species(EggType::Mystery, 5, &mut rng),
            Err(BreedingError::EmptyPool { .. })
        ));
    }

    #[test]
    fn test_random_type_covers_hatchable_types() {
        let resolver = EggResolver::default();
        let mut rng = StdRng::seed_from_u64(99);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..600 {
            let (egg_type, species) = resolver.resolve_random_type(1, &mut rng).unwrap();
            assert!(egg_type.is_hatchable());
            let in_table = resolver
                .table()
                .tiers(egg_type)
                .iter()
                .any(|tier| tier.contains(&species));
            assert!(in_table, "{species} not a {egg_type} species");
            seen.insert(egg_type);
        }
        assert_eq!(seen.len(), EggType::HATCHABLE.len());
    }
}
