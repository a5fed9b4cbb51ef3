//! Battle resolution.
//!
//! One attack is one combat round. The attacker rolls a value in 1..=3 and
//! the defender a value in 1..=2; the higher roll wins and the loser gives
//! up one troop, with ties going to the defender. A defender left without
//! troops is conquered: it changes color, receives one occupying troop, and
//! that troop is taken from the attacking territory.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::{Color, Territory};

/// Highest value the attacker can roll.
pub const ATTACK_DIE_MAX: u8 = 3;

/// Highest value the defender can roll.
pub const DEFENSE_DIE_MAX: u8 = 2;

/// A side of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Attacker,
    Defender,
}

/// The result of a single combat round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleOutcome {
    pub attack_roll: u8,
    pub defense_roll: u8,
    /// The side that lost a troop on the roll comparison.
    pub loser: Side,
    /// Troops the attacker lost on the roll comparison (0 or 1).
    pub attacker_losses: u32,
    /// Troops the defender lost on the roll comparison (0 or 1).
    pub defender_losses: u32,
    /// New owner of the defending territory, if it was conquered.
    pub conquered_by: Option<Color>,
}

impl BattleOutcome {
    /// Returns true if the defending territory changed hands.
    pub fn is_conquest(&self) -> bool {
        self.conquered_by.is_some()
    }

    /// Total troops that left the attacking territory, including the
    /// occupying troop moved on conquest.
    pub fn attacker_troops_spent(&self) -> u32 {
        self.attacker_losses + u32::from(self.is_conquest())
    }
}

/// Rolls the attack and defense values.
pub fn roll_dice<R: Rng + ?Sized>(rng: &mut R) -> (u8, u8) {
    let attack = rng.gen_range(1..=ATTACK_DIE_MAX);
    let defense = rng.gen_range(1..=DEFENSE_DIE_MAX);
    (attack, defense)
}

/// Applies a combat round with known rolls to the two territories.
///
/// The caller guarantees the attack is legal: distinct territories of
/// different colors and at least two troops on the attacker.
pub fn apply_rolls(
    attacker: &mut Territory,
    defender: &mut Territory,
    attack_roll: u8,
    defense_roll: u8,
) -> BattleOutcome {
    let (loser, attacker_losses, defender_losses) = if attack_roll > defense_roll {
        defender.troops = defender.troops.saturating_sub(1);
        (Side::Defender, 0, 1)
    } else {
        attacker.troops = attacker.troops.saturating_sub(1);
        (Side::Attacker, 1, 0)
    };

    let conquered_by = if defender.troops == 0 {
        defender.owner = attacker.owner;
        defender.troops = 1;
        attacker.troops = attacker.troops.saturating_sub(1);
        tracing::info!(
            territory = %defender.name,
            owner = %attacker.owner,
            "territory conquered"
        );
        Some(attacker.owner)
    } else {
        None
    };

    BattleOutcome {
        attack_roll,
        defense_roll,
        loser,
        attacker_losses,
        defender_losses,
        conquered_by,
    }
}

/// Resolves one combat round between `attacker` and `defender`.
///
/// Both territories are updated in place. See [`apply_rolls`] for the
/// preconditions.
pub fn resolve_attack<R: Rng + ?Sized>(
    attacker: &mut Territory,
    defender: &mut Territory,
    rng: &mut R,
) -> BattleOutcome {
    let (attack_roll, defense_roll) = roll_dice(rng);
    tracing::debug!(
        attacker = %attacker.name,
        defender = %defender.name,
        attack_roll,
        defense_roll,
        "battle"
    );
    apply_rolls(attacker, defender, attack_roll, defense_roll)
}
