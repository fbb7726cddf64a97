//! Player state consulted by breeding decisions.
//!
//! The breeding subsystem does not own player progression or the party. The
//! game fills a `BreedingContext` from those stores and passes it in; the
//! core only reads it.

use serde::{Deserialize, Serialize};

/// Snapshot of the player facts the breeding rules depend on.
///
/// # Examples
///
/// ```rust
/// use eggworks::BreedingContext;
///
/// let context = BreedingContext::new(1).with_max_level_pokemon(true);
/// assert_eq!(context.highest_region, 1);
/// assert!(context.has_max_level_pokemon);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedingContext {
    /// Highest region the player has unlocked (0 = starting region).
    pub highest_region: u32,

    /// Whether the party holds a Pokémon at max level.
    pub has_max_level_pokemon: bool,
}

impl BreedingContext {
    /// Create a context for a player who has unlocked up to `highest_region`.
    pub fn new(highest_region: u32) -> Self {
        Self {
            highest_region,
            has_max_level_pokemon: false,
        }
    }

    pub fn with_max_level_pokemon(mut self, has_max_level_pokemon: bool) -> Self {
        self.has_max_level_pokemon = has_max_level_pokemon;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context() {
        let ctx = BreedingContext::default();
        assert_eq!(ctx.highest_region, 0);
        assert!(!ctx.has_max_level_pokemon);
    }
}
