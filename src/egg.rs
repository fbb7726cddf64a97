//! Egg entity module.
//!
//! An `Egg` is a single incubating unit. The empty sentinel (an egg with no
//! species) fills every unoccupied slot and ignores progress.

use crate::egg_type::EggType;
use serde::{Deserialize, Serialize};

/// A single incubating egg.
///
/// `total_steps` is fixed at creation. `current_steps` only grows and is
/// allowed to overshoot `total_steps`; the excess is discarded on hatch.
///
/// # Examples
///
/// ```rust
/// use eggworks::{Egg, EggType};
///
/// let mut egg = Egg::new(EggType::Fire, 100, "Charmander");
/// assert!(!egg.is_ready());
///
/// egg.add_steps(60);
/// egg.add_steps(60);
/// assert!(egg.is_ready());
/// assert_eq!(egg.current_steps, 120);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Egg {
    /// Displayed type. Mystery eggs keep `Mystery` here until hatched.
    #[serde(rename = "type")]
    pub egg_type: EggType,

    /// Progress required to hatch.
    pub total_steps: u64,

    /// Progress accumulated so far.
    #[serde(default)]
    pub current_steps: u64,

    /// Species the egg hatches into; `None` marks the empty sentinel.
    #[serde(default)]
    pub species: Option<String>,

    /// Concrete type behind a `Mystery` egg, revealed on hatch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden_type: Option<EggType>,
}

impl Egg {
    /// Create a fresh egg with no progress.
    ///
    /// A `total_steps` of zero is bumped to one so a real egg always has to
    /// be incubated at least one step.
    pub fn new(egg_type: EggType, total_steps: u64, species: impl Into<String>) -> Self {
        Self {
            egg_type,
            total_steps: total_steps.max(1),
            current_steps: 0,
            species: Some(species.into()),
            hidden_type: None,
        }
    }

    /// Create a mystery egg that secretly belongs to `hidden_type`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eggworks::{Egg, EggType};
    ///
    /// let egg = Egg::mystery(EggType::Water, 800, "Marill");
    /// assert_eq!(egg.egg_type, EggType::Mystery);
    /// assert_eq!(egg.resolved_type(), EggType::Water);
    /// ```
    pub fn mystery(hidden_type: EggType, total_steps: u64, species: impl Into<String>) -> Self {
        Self {
            egg_type: EggType::Mystery,
            hidden_type: Some(hidden_type),
            ..Self::new(hidden_type, total_steps, species)
        }
    }

    /// The egg's real type: the hidden type for mystery eggs, else `egg_type`.
    pub fn resolved_type(&self) -> EggType {
        self.hidden_type.unwrap_or(self.egg_type)
    }

    /// The empty-slot sentinel.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eggworks::Egg;
    ///
    /// let mut empty = Egg::empty();
    /// empty.add_steps(1000);
    /// assert!(empty.is_empty());
    /// assert!(!empty.is_ready());
    /// assert_eq!(empty.current_steps, 0);
    /// ```
    pub fn empty() -> Self {
        Self {
            egg_type: EggType::Mystery,
            total_steps: 0,
            current_steps: 0,
            species: None,
            hidden_type: None,
        }
    }

    /// Whether this is the empty sentinel.
    pub fn is_empty(&self) -> bool {
        self.species.is_none()
    }

    /// Whether the egg has accumulated enough steps to hatch.
    pub fn is_ready(&self) -> bool {
        !self.is_empty() && self.current_steps >= self.total_steps
    }

    /// Add progress. No-op on the sentinel; never clamps.
    pub fn add_steps(&mut self, amount: u64) {
        if self.is_empty() {
            return;
        }
        self.current_steps = self.current_steps.saturating_add(amount);
    }

    /// Steps still needed before the egg is ready (zero once ready).
    pub fn steps_remaining(&self) -> u64 {
        self.total_steps.saturating_sub(self.current_steps)
    }

    /// Hatch progress in `[0.0, 1.0]`, for progress bars.
    pub fn progress(&self) -> f64 {
        if self.is_empty() || self.total_steps == 0 {
            return 0.0;
        }
        (self.current_steps as f64 / self.total_steps as f64).min(1.0)
    }

    /// Species name, if any.
    pub fn species(&self) -> Option<&str> {
        self.species.as_deref()
    }
}

impl Default for Egg {
    fn default() -> Self {
        Self::empty()
    }
}
