//! Breeding configuration.
//!
//! All tunable numbers of the subsystem live in `BreedingConfig`. Missing
//! fields in a config file fall back to the stock values.

use crate::economy::Currency;
use crate::error::BreedingError;
use serde::{Deserialize, Serialize};

/// Tunables for slots, step counts and slot pricing.
///
/// # Examples
///
/// ```rust
/// use eggworks::BreedingConfig;
///
/// let config = BreedingConfig::from_json_str(r#"{ "capacity": 6 }"#).unwrap();
/// assert_eq!(config.capacity, 6);
/// assert_eq!(config.initial_slots, 1);
/// assert_eq!(config.default_steps, 500);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BreedingConfig {
    /// Length of the backing slot array.
    pub capacity: usize,

    /// Usable slots for a new game.
    pub initial_slots: u32,

    /// Steps for species with no known egg cycles.
    pub default_steps: u64,

    /// Steps per egg cycle.
    pub steps_per_cycle: u64,

    /// Slot `n` costs `slot_cost_base * n`.
    pub slot_cost_base: u64,

    /// Currency slots are bought with.
    pub slot_currency: Currency,
}

impl Default for BreedingConfig {
    fn default() -> Self {
        Self {
            capacity: 4,
            initial_slots: 1,
            default_steps: 500,
            steps_per_cycle: 40,
            slot_cost_base: 500,
            slot_currency: Currency::QuestPoint,
        }
    }
}

impl BreedingConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, BreedingError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| BreedingError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), BreedingError> {
        if self.capacity == 0 {
            return Err(BreedingError::InvalidConfig(
                "capacity must be at least 1".into(),
            ));
        }
        if self.initial_slots == 0 {
            return Err(BreedingError::InvalidConfig(
                "initialSlots must be at least 1".into(),
            ));
        }
        if self.default_steps == 0 || self.steps_per_cycle == 0 {
            return Err(BreedingError::InvalidConfig(
                "step counts must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Steps needed for a species with `egg_cycles` cycles.
    ///
    /// Unknown species and species recorded with zero cycles both get
    /// `default_steps`, so no egg is ever created ready to hatch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eggworks::BreedingConfig;
    ///
    /// let config = BreedingConfig::default();
    /// assert_eq!(config.steps_for(Some(20)), 800);
    /// assert_eq!(config.steps_for(None), 500);
    /// assert_eq!(config.steps_for(Some(0)), 500);
    /// ```
    pub fn steps_for(&self, egg_cycles: Option<u32>) -> u64 {
        match egg_cycles {
            Some(cycles) if cycles > 0 => u64::from(cycles) * self.steps_per_cycle,
            _ => self.default_steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = BreedingConfig::from_json_str("{}").unwrap();
        assert_eq!(config, BreedingConfig::default());
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let err = BreedingConfig::from_json_str(r#"{ "capacity": 0 }"#).unwrap_err();
        assert!(matches!(err, BreedingError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(BreedingConfig::from_json_str("{ capacity").is_err());
    }

    #[test]
    fn test_zero_cycles_uses_default_steps() {
        assert_eq!(BreedingConfig::default().steps_for(Some(0)), 500);
    }

    #[test]
    fn test_currency_by_name() {
        let config = BreedingConfig::from_json_str(r#"{ "slotCurrency": "Money" }"#).unwrap();
        assert_eq!(config.slot_currency, Currency::Money);
    }
}
