//! Turn resolution.
//!
//! Resolves a single attack between two territories and evaluates whether
//! the player's mission has been fulfilled.

pub mod battle;
pub mod victory;

pub use battle::{apply_rolls, resolve_attack, roll_dice, BattleOutcome, Side};
pub use victory::{check_victory, tally_mission, MissionTally};
