//! Hatchery example: a short breeding session
//!
//! This example demonstrates:
//! - Gaining typed, mystery and fossil eggs
//! - Ticking progress and hatching
//! - Buying an extra slot
//! - Saving and loading
//!
//! Run with `RUST_LOG=debug` to see the station's log output.

use eggworks::economy::Purse;
use eggworks::notify::LogNotifier;
use eggworks::species::MapSpeciesData;
use eggworks::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), BreedingError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let data = MapSpeciesData::new()
        .with("Charmander", Some(20), 0)
        .with("Squirtle", Some(20), 0)
        .with("Omanyte", Some(30), 0)
        .with("Tyrogue", Some(25), 1);
    let mut breeding = Breeding::new(BreedingConfig::default(), Box::new(data));
    let context = BreedingContext::new(1).with_max_level_pokemon(true);
    let mut rng = rand::thread_rng();
    let mut purse = Purse::new().with(Currency::QuestPoint, 5000);

    println!("Buying slots:");
    while breeding.station().slot_count() < 3 {
        let cost = breeding.next_egg_slot_cost();
        if !breeding.buy_egg_slot(&mut purse) {
            break;
        }
        println!("  - slot {} for {}", breeding.station().slot_count(), cost);
    }

    breeding.gain_typed_egg(EggType::Fighting, &context, &mut rng)?;
    breeding.gain_random_egg(&context, &mut rng)?;
    breeding.gain_fossil_egg("Helix Fossil")?;
    if breeding.gain_pokemon_egg("Charmander", &mut LogNotifier).is_err() {
        println!("  (no room for a Charmander egg)");
    }

    println!("\nIncubating...");
    let mut tick = 0;
    while breeding.station().slots().iter().any(|e| !e.is_empty() && !e.is_ready()) {
        breeding.progress_eggs(100.0, 1.5);
        tick += 1;
    }
    println!("  all eggs ready after {} ticks", tick);

    println!("\nSaved state:\n  {}", breeding.to_json()?);

    println!("\nHatching:");
    for index in 0..breeding.station().slot_count() as usize {
        if let Some(hatched) = breeding.hatch_egg(index)? {
            println!("  slot {}: {} egg hatched into {}", index, hatched.egg_type, hatched.species);
        }
    }

    println!("\nEvents:");
    for event in breeding.drain_events() {
        println!("  {:?}", event);
    }

    Ok(())
}
