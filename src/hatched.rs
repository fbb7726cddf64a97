//! Hatch results.
//!
//! A `HatchedEgg` is the snapshot handed to the caller when a slot is
//! hatched. The slot itself is already empty by the time it is returned.

use crate::egg::Egg;
use crate::egg_type::EggType;
use serde::{Deserialize, Serialize};

/// What came out of a slot.
///
/// # Examples
///
/// ```rust
/// use eggworks::{BreedingStation, Egg, EggType};
///
/// let mut station = BreedingStation::new(4, 1);
/// station.place_egg(Egg::new(EggType::Water, 100, "Psyduck")).unwrap();
/// station.add_progress(150);
///
/// let hatched = station.hatch(0).unwrap().unwrap();
/// assert_eq!(hatched.species, "Psyduck");
/// assert!(hatched.was_ready);
/// assert_eq!(hatched.steps_taken, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HatchedEgg {
    /// Slot the egg was in.
    pub slot: usize,

    /// Type the egg was displayed as.
    pub egg_type: EggType,

    /// Real type of the egg; differs from `egg_type` only for mystery eggs.
    pub resolved_type: EggType,

    /// Species that hatched.
    pub species: String,

    /// Steps counted toward the hatch; overshoot is dropped.
    pub steps_taken: u64,

    /// Whether the egg had reached its step goal.
    pub was_ready: bool,
}

impl HatchedEgg {
    /// Finalize an occupied egg. Returns `None` for the empty sentinel.
    pub(crate) fn from_egg(slot: usize, egg: Egg) -> Option<Self> {
        let was_ready = egg.is_ready();
        let steps_taken = egg.current_steps.min(egg.total_steps);
        let resolved_type = egg.resolved_type();
        let species = egg.species?;
        Some(Self {
            slot,
            egg_type: egg.egg_type,
            resolved_type,
            species,
            steps_taken,
            was_ready,
        })
    }
}
