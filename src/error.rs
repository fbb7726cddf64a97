//! Error types for the breeding subsystem.
//!
//! Nothing in here is fatal to the game: every failure leaves the station
//! untouched and is reported through `BreedingError`.

use crate::egg_type::EggType;
use thiserror::Error;

/// Errors that can occur while creating, placing or hatching eggs.
///
/// # Examples
///
/// ```rust
/// use eggworks::{BreedingError, EggType};
///
/// let err = BreedingError::NoFreeSlot { egg_type: EggType::Fire };
/// assert_eq!(err.to_string(), "Could not place Fire egg: no free slot");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BreedingError {
    /// No tier up to the unlocked region has any species for this type.
    ///
    /// Recoverable: try another type or wait for more progression.
    #[error("No hatchable species for {egg_type} eggs up to region {highest_region}")]
    EmptyPool {
        egg_type: EggType,
        highest_region: u32,
    },

    /// Every usable slot is occupied.
    ///
    /// Callers are expected to check `has_free_slot()` first.
    #[error("Could not place {egg_type} egg: no free slot")]
    NoFreeSlot { egg_type: EggType },

    /// A slot index outside `[0, slot_count)` was addressed.
    #[error("Slot {index} is out of range (usable slots: {slot_count})")]
    SlotOutOfRange { index: usize, slot_count: u32 },

    /// The fossil item has no species mapped to it.
    #[error("Unknown fossil: {0}")]
    UnknownFossil(String),

    /// A save blob could not be parsed.
    #[error("Invalid save data: {0}")]
    InvalidSave(String),

    /// A configuration value is out of range or unparsable.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
