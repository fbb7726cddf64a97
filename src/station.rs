//! Breeding station module.
//!
//! Provides the `BreedingStation`, which owns the incubation slots. The
//! backing array has a fixed length (`capacity`) so slot indices stay stable
//! across saves; only the first `slot_count` entries are usable.
//!
//! State changes are reported as `BreedingEvent`s that a presentation layer
//! can drain after each tick. The station does not depend on any particular
//! UI or reactivity mechanism.

use crate::egg::Egg;
use crate::egg_type::EggType;
use crate::error::BreedingError;
use crate::hatched::HatchedEgg;
use serde::{Deserialize, Serialize};

/// Something that changed in the station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreedingEvent {
    EggPlaced {
        slot: usize,
        egg_type: EggType,
        species: String,
    },
    EggHatched {
        slot: usize,
        species: String,
    },
    SlotGranted {
        slot_count: u32,
    },
}

/// Incubation slots and their eggs.
///
/// The station is the only owner of its eggs. Callers read them through
/// `slots()`/`slot()` and change them only through the station.
///
/// # Examples
///
/// ```rust
/// use eggworks::{BreedingStation, Egg, EggType};
///
/// let mut station = BreedingStation::new(4, 1);
/// assert!(station.has_free_slot());
///
/// station.place_egg(Egg::new(EggType::Fire, 200, "Vulpix")).unwrap();
/// assert!(!station.has_free_slot());
///
/// station.grant_egg_slot();
/// assert!(station.has_free_slot());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BreedingStation {
    slots: Vec<Egg>,
    slot_count: u32,
    events: Vec<BreedingEvent>,
}

impl BreedingStation {
    /// Create a station with `capacity` backing slots, `slot_count` usable.
    ///
    /// Every slot starts as a fresh empty sentinel.
    pub fn new(capacity: usize, slot_count: u32) -> Self {
        Self {
            slots: vec![Egg::empty(); capacity],
            slot_count,
            events: Vec::new(),
        }
    }

    /// Rebuild a station from saved parts.
    ///
    /// Eggs keep their saved index when it is usable. Eggs saved at an
    /// index `>= slot_count` move into the first free usable slot; any that
    /// still do not fit are dropped with a warning, so occupied slots never
    /// outnumber `slot_count`.
    pub(crate) fn restore(capacity: usize, slot_count: u32, eggs: Vec<Egg>) -> Self {
        let mut station = Self::new(capacity, slot_count);
        let usable = station.usable();
        let mut displaced = Vec::new();

        for (index, egg) in eggs.into_iter().enumerate() {
            if egg.is_empty() {
                continue;
            }
            if index < usable {
                station.slots[index] = egg;
            } else {
                displaced.push(egg);
            }
        }

        let mut dropped = 0usize;
        for egg in displaced {
            match station.slots[..usable].iter().position(Egg::is_empty) {
                Some(index) => station.slots[index] = egg,
                None => dropped += 1,
            }
        }
        if dropped > 0 {
            tracing::warn!(
                dropped,
                slot_count,
                capacity,
                "Dropping saved eggs that do not fit in usable slots"
            );
        }
        station
    }

    /// Whether another slot would still fit in the backing array.
    pub fn can_grow(&self) -> bool {
        (self.slot_count as usize) < self.slots.len()
    }

    /// Every backing slot, including unusable ones.
    pub fn slots(&self) -> &[Egg] {
        &self.slots
    }

    /// One slot, if the index is inside the backing array.
    pub fn slot(&self, index: usize) -> Option<&Egg> {
        self.slots.get(index)
    }

    /// Number of usable slots.
    pub fn slot_count(&self) -> u32 {
        self.slot_count
    }

    /// Length of the backing array.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn usable(&self) -> usize {
        (self.slot_count as usize).min(self.slots.len())
    }

    /// Occupied slots among the usable ones.
    pub fn occupied_count(&self) -> usize {
        self.slots[..self.usable()]
            .iter()
            .filter(|egg| !egg.is_empty())
            .count()
    }

    /// Whether fewer than `slot_count` usable slots are occupied.
    pub fn has_free_slot(&self) -> bool {
        self.occupied_count() < self.slot_count as usize
    }

    /// Whether the player may breed right now.
    pub fn can_breed(&self, has_max_level_pokemon: bool) -> bool {
        has_max_level_pokemon && self.has_free_slot()
    }

    /// Put `egg` into the first empty usable slot.
    ///
    /// Returns the slot index. If nothing is free the station is left
    /// unchanged and `NoFreeSlot` is returned.
    pub fn place_egg(&mut self, egg: Egg) -> Result<usize, BreedingError> {
        let usable = self.usable();
        let Some(index) = self.slots[..usable].iter().position(Egg::is_empty) else {
            tracing::error!(egg_type = %egg.egg_type, "Could not place egg: no free slot");
            return Err(BreedingError::NoFreeSlot {
                egg_type: egg.egg_type,
            });
        };

        tracing::debug!(slot = index, egg_type = %egg.egg_type, "Egg placed");
        self.events.push(BreedingEvent::EggPlaced {
            slot: index,
            egg_type: egg.egg_type,
            species: egg.species.clone().unwrap_or_default(),
        });
        self.slots[index] = egg;
        Ok(index)
    }

    /// Add `amount` steps to every occupied slot.
    ///
    /// All slots see the same delta within one call. Ready eggs keep
    /// accumulating.
    pub fn add_progress(&mut self, amount: u64) {
        for egg in &mut self.slots {
            egg.add_steps(amount);
        }
    }

    /// Hatch the egg in `index` and empty the slot.
    ///
    /// Readiness is not checked here; gating the action is the caller's job.
    /// Returns `Ok(None)` if the slot was already empty.
    pub fn hatch(&mut self, index: usize) -> Result<Option<HatchedEgg>, BreedingError> {
        if index >= self.usable() {
            return Err(BreedingError::SlotOutOfRange {
                index,
                slot_count: self.slot_count,
            });
        }

        let egg = std::mem::take(&mut self.slots[index]);
        let hatched = HatchedEgg::from_egg(index, egg);
        if let Some(hatched) = &hatched {
            if !hatched.was_ready {
                tracing::debug!(slot = index, species = %hatched.species, "Hatching egg before it is ready");
            }
            self.events.push(BreedingEvent::EggHatched {
                slot: index,
                species: hatched.species.clone(),
            });
        }
        Ok(hatched)
    }

    /// Unlock one more slot. Pricing lives in `SlotEconomy`.
    pub fn grant_egg_slot(&mut self) {
        self.slot_count = self.slot_count.saturating_add(1);
        if self.slot_count as usize > self.slots.len() {
            tracing::warn!(
                slot_count = self.slot_count,
                capacity = self.slots.len(),
                "Slot count exceeds backing capacity"
            );
        }
        self.events.push(BreedingEvent::SlotGranted {
            slot_count: self.slot_count,
        });
    }

    /// Take all pending events, oldest first.
    pub fn drain_events(&mut self) -> Vec<BreedingEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for BreedingStation {
    fn default() -> Self {
        Self::new(4, 1)
    }
}
