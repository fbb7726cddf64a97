//! Slot economy module.
//!
//! Extra incubation slots are bought with an in-game currency. The wallet
//! itself belongs to the game; this module only prices slots and debits
//! through the `Wallet` trait.

use crate::station::BreedingStation;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// In-game currencies.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    Money,
    QuestPoint,
    DungeonToken,
    Diamond,
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Currency::Money => "money",
            Currency::QuestPoint => "quest points",
            Currency::DungeonToken => "dungeon tokens",
            Currency::Diamond => "diamonds",
        };
        f.write_str(name)
    }
}

/// A quantity of one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    pub amount: u64,
    pub currency: Currency,
}

impl Amount {
    pub fn new(amount: u64, currency: Currency) -> Self {
        Self { amount, currency }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

/// The game's currency ledger.
pub trait Wallet {
    fn has_amount(&self, amount: &Amount) -> bool;

    /// Debit `amount`. Only called after `has_amount` returned true.
    fn lose_amount(&mut self, amount: &Amount);
}

/// A simple balance-per-currency wallet.
///
/// # Examples
///
/// ```rust
/// use eggworks::economy::{Amount, Currency, Purse, Wallet};
///
/// let mut purse = Purse::new().with(Currency::QuestPoint, 1500);
/// let cost = Amount::new(1000, Currency::QuestPoint);
///
/// assert!(purse.has_amount(&cost));
/// purse.lose_amount(&cost);
/// assert_eq!(purse.balance(Currency::QuestPoint), 500);
/// assert!(!purse.has_amount(&cost));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Purse {
    balances: HashMap<Currency, u64>,
}

impl Purse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, currency: Currency, amount: u64) -> Self {
        self.gain(Amount::new(amount, currency));
        self
    }

    pub fn gain(&mut self, amount: Amount) {
        let balance = self.balances.entry(amount.currency).or_insert(0);
        *balance = balance.saturating_add(amount.amount);
    }

    pub fn balance(&self, currency: Currency) -> u64 {
        self.balances.get(&currency).copied().unwrap_or(0)
    }
}

impl Wallet for Purse {
    fn has_amount(&self, amount: &Amount) -> bool {
        self.balance(amount.currency) >= amount.amount
    }

    fn lose_amount(&mut self, amount: &Amount) {
        let balance = self.balances.entry(amount.currency).or_insert(0);
        *balance = balance.saturating_sub(amount.amount);
    }
}

/// Prices and sells incubation slots.
///
/// Slot `n` costs `base * n`, so the next slot after `count` usable ones
/// costs `base * (count + 1)`. There is no price cap.
///
/// # Examples
///
/// ```rust
/// use eggworks::economy::{Currency, SlotEconomy};
///
/// let economy = SlotEconomy::new(500, Currency::QuestPoint);
/// assert_eq!(economy.next_slot_cost(1).amount, 1000);
/// assert_eq!(economy.next_slot_cost(4).amount, 2500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotEconomy {
    base: u64,
    currency: Currency,
}

impl SlotEconomy {
    pub fn new(base: u64, currency: Currency) -> Self {
        Self { base, currency }
    }

    /// Price of slot number `slot` (1-based).
    pub fn slot_cost(&self, slot: u32) -> Amount {
        Amount::new(self.base.saturating_mul(u64::from(slot)), self.currency)
    }

    /// Price of the slot after `current_slot_count` usable ones.
    pub fn next_slot_cost(&self, current_slot_count: u32) -> Amount {
        self.slot_cost(current_slot_count.saturating_add(1))
    }

    /// Whether the next slot would fit in the station and is affordable.
    pub fn can_purchase(&self, wallet: &dyn Wallet, station: &BreedingStation) -> bool {
        station.can_grow() && wallet.has_amount(&self.next_slot_cost(station.slot_count()))
    }

    /// Buy one slot if the wallet can afford it.
    ///
    /// Insufficient funds is a silent no-op; returns whether a slot was
    /// granted. A station already at capacity is never charged.
    pub fn purchase_slot(&self, wallet: &mut dyn Wallet, station: &mut BreedingStation) -> bool {
        if !station.can_grow() {
            tracing::debug!(
                slot_count = station.slot_count(),
                capacity = station.capacity(),
                "No egg slot left to buy"
            );
            return false;
        }
        let cost = self.next_slot_cost(station.slot_count());
        if !wallet.has_amount(&cost) {
            tracing::debug!(%cost, "Cannot afford next egg slot");
            return false;
        }
        wallet.lose_amount(&cost);
        station.grant_egg_slot();
        true
    }
}

impl Default for SlotEconomy {
    fn default() -> Self {
        Self::new(500, Currency::QuestPoint)
    }
}
