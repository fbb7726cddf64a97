//! Breeding facade.
//!
//! `Breeding` wires the station, resolver, slot economy and species data
//! together into the operations the game calls: creating and gaining eggs,
//! ticking progress, hatching, buying slots and saving.

use crate::config::BreedingConfig;
use crate::context::BreedingContext;
use crate::economy::{Amount, SlotEconomy, Wallet};
use crate::egg::Egg;
use crate::egg_type::EggType;
use crate::error::BreedingError;
use crate::graph::DevolutionGraph;
use crate::hatched::HatchedEgg;
use crate::notify::{NotificationLevel, Notifier};
use crate::resolver::EggResolver;
use crate::save::BreedingSave;
use crate::species::{FossilTable, SpeciesData};
use crate::station::{BreedingEvent, BreedingStation};
use crate::table::SpeciesTable;
use rand::Rng;

/// Warning shown when a bred egg has nowhere to go.
pub const NO_FREE_SLOT_MESSAGE: &str = "You don't have any free egg slots";

/// The breeding subsystem of one game session.
///
/// # Examples
///
/// ```rust
/// use eggworks::species::MapSpeciesData;
/// use eggworks::{Breeding, BreedingConfig, BreedingContext, EggType};
///
/// let data = MapSpeciesData::new().with("Charmander", Some(20), 0);
/// let mut breeding = Breeding::new(BreedingConfig::default(), Box::new(data));
/// let context = BreedingContext::new(0);
/// let mut rng = rand::thread_rng();
///
/// let slot = breeding.gain_typed_egg(EggType::Fire, &context, &mut rng).unwrap();
/// breeding.progress_eggs(1000.0, 1.0);
/// assert!(breeding.station().slot(slot).unwrap().is_ready());
///
/// let hatched = breeding.hatch_egg(slot).unwrap().unwrap();
/// assert_eq!(hatched.egg_type, EggType::Fire);
/// ```
pub struct Breeding {
    config: BreedingConfig,
    resolver: EggResolver,
    economy: SlotEconomy,
    station: BreedingStation,
    species: Box<dyn SpeciesData>,
    devolutions: DevolutionGraph,
    fossils: FossilTable,
}

impl Breeding {
    /// Start a fresh session with the stock species table and fossils.
    pub fn new(config: BreedingConfig, species: Box<dyn SpeciesData>) -> Self {
        let station = BreedingStation::new(config.capacity, config.initial_slots);
        let economy = SlotEconomy::new(config.slot_cost_base, config.slot_currency);
        Self {
            config,
            resolver: EggResolver::new(SpeciesTable::standard()),
            economy,
            station,
            species,
            devolutions: DevolutionGraph::new(),
            fossils: FossilTable::standard(),
        }
    }

    /// Replace the species table used for typed and mystery eggs.
    pub fn with_table(mut self, table: SpeciesTable) -> Self {
        self.resolver = EggResolver::new(table);
        self
    }

    pub fn with_devolutions(mut self, devolutions: DevolutionGraph) -> Self {
        if devolutions.has_cycles() {
            tracing::warn!("Devolution data contains cycles; base form lookups stop at the loop");
        }
        self.devolutions = devolutions;
        self
    }

    pub fn with_fossils(mut self, fossils: FossilTable) -> Self {
        self.fossils = fossils;
        self
    }

    pub fn config(&self) -> &BreedingConfig {
        &self.config
    }

    pub fn station(&self) -> &BreedingStation {
        &self.station
    }

    pub fn resolver(&self) -> &EggResolver {
        &self.resolver
    }

    /// Whether the player can start breeding now.
    pub fn can_breed(&self, context: &BreedingContext) -> bool {
        self.station.can_breed(context.has_max_level_pokemon)
    }

    pub fn has_free_slot(&self) -> bool {
        self.station.has_free_slot()
    }

    /// Steps needed for an egg of `species`.
    pub fn steps_for_species(&self, species: &str) -> u64 {
        self.config.steps_for(self.species.egg_cycles(species))
    }

    /// Create an egg for a known species.
    pub fn create_egg(&self, species: &str, egg_type: EggType) -> Egg {
        Egg::new(egg_type, self.steps_for_species(species), species)
    }

    /// Create an egg of `egg_type` with a resolved species.
    pub fn create_typed_egg<R: Rng + ?Sized>(
        &self,
        egg_type: EggType,
        context: &BreedingContext,
        rng: &mut R,
    ) -> Result<Egg, BreedingError> {
        let species = self
            .resolver
            .resolve_species(egg_type, context.highest_region, rng)?;
        Ok(self.create_egg(&species, egg_type))
    }

    /// Create a mystery egg. Its real type stays hidden until it hatches.
    pub fn create_random_egg<R: Rng + ?Sized>(
        &self,
        context: &BreedingContext,
        rng: &mut R,
    ) -> Result<Egg, BreedingError> {
        let (hidden_type, species) = self
            .resolver
            .resolve_random_type(context.highest_region, rng)?;
        let steps = self.steps_for_species(&species);
        Ok(Egg::mystery(hidden_type, steps, species))
    }

    /// Create an egg that revives a fossil.
    pub fn create_fossil_egg(&self, fossil: &str) -> Result<Egg, BreedingError> {
        let species = self
            .fossils
            .species_for(fossil)
            .ok_or_else(|| BreedingError::UnknownFossil(fossil.to_string()))?;
        Ok(self.create_egg(species, EggType::Fossil))
    }

    /// Place an egg into the first free slot.
    pub fn gain_egg(&mut self, egg: Egg) -> Result<usize, BreedingError> {
        self.station.place_egg(egg)
    }

    pub fn gain_typed_egg<R: Rng + ?Sized>(
        &mut self,
        egg_type: EggType,
        context: &BreedingContext,
        rng: &mut R,
    ) -> Result<usize, BreedingError> {
        let egg = self.create_typed_egg(egg_type, context, rng)?;
        self.gain_egg(egg)
    }

    pub fn gain_random_egg<R: Rng + ?Sized>(
        &mut self,
        context: &BreedingContext,
        rng: &mut R,
    ) -> Result<usize, BreedingError> {
        let egg = self.create_random_egg(context, rng)?;
        self.gain_egg(egg)
    }

    pub fn gain_fossil_egg(&mut self, fossil: &str) -> Result<usize, BreedingError> {
        let egg = self.create_fossil_egg(fossil)?;
        self.gain_egg(egg)
    }

    /// Breed a party member into an egg.
    ///
    /// With no free slot the player is warned and nothing is placed.
    pub fn gain_pokemon_egg(
        &mut self,
        species: &str,
        notifier: &mut dyn Notifier,
    ) -> Result<usize, BreedingError> {
        if !self.station.has_free_slot() {
            notifier.notify(NO_FREE_SLOT_MESSAGE, NotificationLevel::Warning);
            return Err(BreedingError::NoFreeSlot {
                egg_type: EggType::Pokemon,
            });
        }
        let egg = self.create_egg(species, EggType::Pokemon);
        self.gain_egg(egg)
    }

    /// Advance every egg by one tick.
    ///
    /// `amount` is scaled by `multiplier` (item bonuses) and rounded to the
    /// nearest whole step before being applied to all slots at once.
    /// Negative or non-finite results count as zero.
    pub fn progress_eggs(&mut self, amount: f64, multiplier: f64) {
        let scaled = (amount * multiplier).round();
        let steps = if scaled.is_finite() && scaled > 0.0 {
            scaled as u64
        } else {
            0
        };
        self.station.add_progress(steps);
    }

    pub fn hatch_egg(&mut self, index: usize) -> Result<Option<HatchedEgg>, BreedingError> {
        self.station.hatch(index)
    }

    /// Price of the next slot.
    pub fn next_egg_slot_cost(&self) -> Amount {
        self.economy.next_slot_cost(self.station.slot_count())
    }

    /// Whether a slot is left to buy and the wallet can pay for it.
    pub fn can_buy_egg_slot(&self, wallet: &dyn Wallet) -> bool {
        self.economy.can_purchase(wallet, &self.station)
    }

    /// Buy the next slot if affordable and within capacity.
    pub fn buy_egg_slot(&mut self, wallet: &mut dyn Wallet) -> bool {
        self.economy.purchase_slot(wallet, &mut self.station)
    }

    pub fn gain_egg_slot(&mut self) {
        self.station.grant_egg_slot();
    }

    /// Earliest form of `species` available in unlocked regions.
    pub fn calculate_base_form(&self, species: &str, context: &BreedingContext) -> String {
        self.devolutions
            .base_form(species, context.highest_region, self.species.as_ref())
    }

    pub fn drain_events(&mut self) -> Vec<BreedingEvent> {
        self.station.drain_events()
    }

    pub fn to_save(&self) -> BreedingSave {
        BreedingSave::capture(&self.station)
    }

    /// Replace the station with saved state.
    pub fn load_save(&mut self, save: &BreedingSave) {
        self.station = save.restore(self.config.capacity, self.config.initial_slots);
    }

    pub fn to_json(&self) -> Result<String, BreedingError> {
        self.to_save().to_json()
    }

    pub fn load_json(&mut self, json: &str) -> Result<(), BreedingError> {
        let save = BreedingSave::from_json(json)?;
        self.load_save(&save);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::economy::{Currency, Purse};
    use crate::notify::RecordingNotifier;
    use crate::species::MapSpeciesData;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn breeding() -> Breeding {
        let data = MapSpeciesData::new()
            .with("Charmander", Some(20), 0)
            .with("Pikachu", Some(10), 0)
            .with("Pichu", Some(10), 1)
            .with("Omanyte", Some(30), 0);
        Breeding::new(BreedingConfig::default(), Box::new(data))
    }

    #[test]
    fn test_create_egg_uses_cycles() {
        let b = breeding();
        let egg = b.create_egg("Charmander", EggType::Pokemon);
        assert_eq!(egg.total_steps, 800);
        let egg = b.create_egg("Unown", EggType::Pokemon);
        assert_eq!(egg.total_steps, 500);
    }

    #[test]
    fn test_random_egg_is_mystery() {
        let b = breeding();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let egg = b.create_random_egg(&BreedingContext::new(1), &mut rng).unwrap();
            assert_eq!(egg.egg_type, EggType::Mystery);
            assert!(!egg.is_empty());

            let hidden = egg.hidden_type.unwrap();
            assert!(hidden.is_hatchable());
            let species = egg.species.clone().unwrap();
            let in_table = b
                .resolver()
                .table()
                .tiers(hidden)
                .iter()
                .any(|tier| tier.contains(&species));
            assert!(in_table, "{species} is not a {hidden} species");
        }
    }

    #[test]
    fn test_fossil_egg() {
        let b = breeding();
        let egg = b.create_fossil_egg("Helix Fossil").unwrap();
        assert_eq!(egg.egg_type, EggType::Fossil);
        assert_eq!(egg.species(), Some("Omanyte"));
        assert_eq!(egg.total_steps, 1200);
        assert_eq!(
            b.create_fossil_egg("Claw Fossil"),
            Err(BreedingError::UnknownFossil("Claw Fossil".into()))
        );
    }

    #[test]
    fn test_pokemon_egg_warns_when_full() {
        let mut b = breeding();
        let mut notifier = RecordingNotifier::default();
        assert_eq!(b.gain_pokemon_egg("Pikachu", &mut notifier), Ok(0));
        assert!(notifier.received.is_empty());

        let err = b.gain_pokemon_egg("Pikachu", &mut notifier).unwrap_err();
        assert_eq!(err, BreedingError::NoFreeSlot { egg_type: EggType::Pokemon });
        assert_eq!(notifier.messages(), [NO_FREE_SLOT_MESSAGE]);
        assert_eq!(notifier.received[0].1, NotificationLevel::Warning);
    }

    #[test]
    fn test_progress_rounds_scaled_amount() {
        let mut b = breeding();
        b.gain_egg(b.create_egg("Pikachu", EggType::Pokemon)).unwrap();
        b.progress_eggs(10.0, 1.25);
        assert_eq!(b.station().slot(0).unwrap().current_steps, 13);
        b.progress_eggs(-5.0, 1.0);
        b.progress_eggs(f64::NAN, 1.0);
        assert_eq!(b.station().slot(0).unwrap().current_steps, 13);
    }

    #[test]
    fn test_buy_egg_slot() {
        let mut b = breeding();
        assert_eq!(b.next_egg_slot_cost(), Amount::new(1000, Currency::QuestPoint));

        let mut purse = Purse::new().with(Currency::QuestPoint, 1000);
        assert!(b.buy_egg_slot(&mut purse));
        assert_eq!(b.station().slot_count(), 2);
        assert_eq!(b.next_egg_slot_cost().amount, 1500);
        assert!(!b.buy_egg_slot(&mut purse));
    }

    #[test]
    fn test_cannot_buy_past_capacity() {
        let mut b = breeding();
        let mut purse = Purse::new().with(Currency::QuestPoint, 100_000);
        while b.can_buy_egg_slot(&purse) {
            assert!(b.buy_egg_slot(&mut purse));
        }
        assert_eq!(b.station().slot_count() as usize, b.station().capacity());

        let balance = purse.balance(Currency::QuestPoint);
        assert!(!b.buy_egg_slot(&mut purse));
        assert_eq!(purse.balance(Currency::QuestPoint), balance);
    }

    #[test]
    fn test_base_form_uses_context_region() {
        let b = breeding().with_devolutions(DevolutionGraph::from_pairs([("Pikachu", "Pichu")]));
        assert_eq!(b.calculate_base_form("Pikachu", &BreedingContext::new(0)), "Pikachu");
        assert_eq!(b.calculate_base_form("Pikachu", &BreedingContext::new(1)), "Pichu");
    }

    #[test]
    fn test_can_breed_reads_context() {
        let b = breeding();
        assert!(!b.can_breed(&BreedingContext::new(0)));
        assert!(b.can_breed(&BreedingContext::new(0).with_max_level_pokemon(true)));
    }

    #[test]
    fn test_typed_egg_empty_pool_places_nothing() {
        let mut table = SpeciesTable::new();
        table.insert(EggType::Dragon, &[&[]]);
        let mut b = breeding().with_table(table);
        let mut rng = StdRng::seed_from_u64(5);

        assert!(matches!(
            b.gain_typed_egg(EggType::Dragon, &BreedingContext::new(0), &mut rng),
            Err(BreedingError::EmptyPool { .. })
        ));
        assert_eq!(b.station().occupied_count(), 0);
    }
}
