//! # eggworks - Egg Breeding for Incremental Games
//!
//! A small, engine-agnostic breeding subsystem:
//! - **Slots** hold eggs that gain steps every game tick
//! - **Typed and mystery eggs** resolve to species through progression tiers
//! - **Slot economy** sells extra incubation slots at a linear price
//! - **Saves** round-trip through a plain JSON shape
//!
//! ## Core Concepts
//!
//! ### Egg Lifecycle
//!
//! ```text
//! [create] → [place in slot] → [add steps each tick] → [hatch] → empty slot
//! ```
//!
//! Hatching is an explicit player action. The station hatches whatever is in
//! the slot; gating the button on `Egg::is_ready()` is up to the UI.
//!
//! ### Tiered Species Resolution
//!
//! Each hatchable egg type has one tier of species per region. Only tiers the
//! player has unlocked take part, and every newly unlocked non-empty tier
//! counts as much as all earlier tiers combined. See [`EggResolver`].
//!
//! ## Example
//!
//! ```rust
//! use eggworks::*;
//! use eggworks::species::MapSpeciesData;
//!
//! let data = MapSpeciesData::new().with("Dratini", Some(40), 0);
//! let mut breeding = Breeding::new(BreedingConfig::default(), Box::new(data));
//! let context = BreedingContext::new(0);
//!
//! let slot = breeding
//!     .gain_typed_egg(EggType::Fighting, &context, &mut rand::thread_rng())
//!     .unwrap();
//!
//! breeding.progress_eggs(250.0, 2.0);
//! let hatched = breeding.hatch_egg(slot).unwrap().unwrap();
//! assert!(hatched.was_ready);
//! assert!(breeding.station().slot(slot).unwrap().is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`egg`] - The egg entity
//! - [`egg_type`] - Egg categories
//! - [`table`] - Species tiers per egg type
//! - [`resolver`] - Species selection for typed and mystery eggs
//! - [`station`] - Incubation slots and events
//! - [`economy`] - Currency, wallets and slot pricing
//! - [`graph`] - Devolution data and base forms
//! - [`species`] - Species metadata and fossils
//! - [`save`] - Persisted state
//! - [`breeding`] - The facade the game talks to
//! - [`config`] - Tunable station and pricing settings
//! - [`context`] - Player progress the facade reads from the game
//! - [`hatched`] - Hatch results
//! - [`notify`] - Player-facing notifications
//! - [`error`] - Error types

pub mod breeding;
pub mod config;
pub mod context;
pub mod economy;
pub mod egg;
pub mod egg_type;
pub mod error;
pub mod graph;
pub mod hatched;
pub mod notify;
pub mod resolver;
pub mod save;
pub mod species;
pub mod station;
pub mod table;

// Re-export main types for convenience
pub use breeding::Breeding;
pub use config::BreedingConfig;
pub use context::BreedingContext;
pub use egg::Egg;
pub use egg_type::EggType;
pub use error::BreedingError;
pub use hatched::HatchedEgg;
pub use resolver::EggResolver;
pub use station::{BreedingEvent, BreedingStation};
pub use table::SpeciesTable;

pub use economy::{Amount, Currency, SlotEconomy, Wallet};
pub use notify::{NotificationLevel, Notifier};
