//! Save data for the breeding subsystem.
//!
//! The persisted shape is
//!
//! ```text
//! { "eggSlots": <usable slots>, "eggList": [<egg> | null, ...] }
//! ```
//!
//! Both keys are optional when loading. Empty slots are written as `null`.

use crate::egg::Egg;
use crate::error::BreedingError;
use crate::station::BreedingStation;
use serde::{Deserialize, Serialize};

/// Persisted breeding state.
///
/// # Examples
///
/// ```rust
/// use eggworks::save::BreedingSave;
///
/// let save = BreedingSave::from_json(r#"{ "eggList": [null, null] }"#).unwrap();
/// assert_eq!(save.egg_slots, None);
/// assert_eq!(save.egg_list.unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreedingSave {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub egg_slots: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub egg_list: Option<Vec<Option<Egg>>>,
}

impl BreedingSave {
    /// Capture a station. Writes every backing slot.
    pub fn capture(station: &BreedingStation) -> Self {
        let egg_list = station
            .slots()
            .iter()
            .map(|egg| (!egg.is_empty()).then(|| egg.clone()))
            .collect();
        Self {
            egg_slots: Some(station.slot_count()),
            egg_list: Some(egg_list),
        }
    }

    /// Rebuild a station with the given backing `capacity`.
    ///
    /// A missing or zero slot count falls back to `default_slots` (at least
    /// one); a missing list or a `null` entry gives empty slots.
    pub fn restore(&self, capacity: usize, default_slots: u32) -> BreedingStation {
        let slot_count = match self.egg_slots {
            Some(0) => {
                tracing::warn!(default_slots, "Saved egg slot count is 0; using default");
                default_slots
            }
            Some(count) => count,
            None => default_slots,
        }
        .max(1);
        let eggs = self
            .egg_list
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|entry| entry.clone().unwrap_or_default())
            .collect();
        BreedingStation::restore(capacity, slot_count, eggs)
    }

    pub fn to_json(&self) -> Result<String, BreedingError> {
        serde_json::to_string(self).map_err(|e| BreedingError::InvalidSave(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, BreedingError> {
        serde_json::from_str(json).map_err(|e| BreedingError::InvalidSave(e.to_string()))
    }
}
