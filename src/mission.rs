//! Secret missions.
//!
//! Each session draws one mission for the player at startup. A mission is
//! either to wipe an enemy army off the map or to hold a minimum number of
//! territories. Missions never change once drawn.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::Color;

/// The number of distinct missions that can be drawn.
pub const MISSION_COUNT: u8 = 3;

/// Colors a destroy-army mission may target.
pub const TARGET_CANDIDATES: [Color; 4] = [Color::Blue, Color::Green, Color::Black, Color::Red];

/// Territory goal of mission 2.
const CONQUER_LARGE: usize = 4;

/// Territory goal of mission 3.
const CONQUER_SMALL: usize = 3;

/// The win condition of a mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Objective {
    /// No territory may remain under the target color.
    DestroyArmy { target: Color },
    /// The player must own at least `target` territories.
    ConquerCount { target: usize },
}

/// The player's secret mission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    /// Mission number in `1..=MISSION_COUNT`.
    pub id: u8,
    pub objective: Objective,
    pub description: String,
}

impl Mission {
    /// Builds mission `id` with the given destroy-army target.
    ///
    /// `target` is only used by mission 1; ids outside the known range fall
    /// back to the smaller conquest goal.
    pub fn from_id(id: u8, target: Color) -> Self {
        let objective = match id {
            1 => Objective::DestroyArmy { target },
            2 => Objective::ConquerCount {
                target: CONQUER_LARGE,
            },
            _ => Objective::ConquerCount {
                target: CONQUER_SMALL,
            },
        };
        let description = match objective {
            Objective::DestroyArmy { target } => {
                format!("Destroy the {} army completely.", target)
            }
            Objective::ConquerCount { target } if id == 2 => {
                format!("Conquer and hold {} territories under your color.", target)
            }
            Objective::ConquerCount { target } => {
                format!("Conquer and hold {} territories of the main continent.", target)
            }
        };
        Mission {
            id,
            objective,
            description,
        }
    }

    /// Returns the target color for destroy-army missions.
    pub fn target_color(&self) -> Option<Color> {
        match self.objective {
            Objective::DestroyArmy { target } => Some(target),
            Objective::ConquerCount { .. } => None,
        }
    }

    /// Returns the territory goal for conquest missions.
    pub fn target_count(&self) -> Option<usize> {
        match self.objective {
            Objective::ConquerCount { target } => Some(target),
            Objective::DestroyArmy { .. } => None,
        }
    }
}

/// Draws a random target color that differs from `player`.
fn draw_target<R: Rng + ?Sized>(player: Color, rng: &mut R) -> Color {
    loop {
        let candidate = TARGET_CANDIDATES[rng.gen_range(0..TARGET_CANDIDATES.len())];
        if candidate != player {
            return candidate;
        }
    }
}

/// Draws a mission uniformly at random for a player of color `player`.
///
/// A destroy-army mission never targets the player's own color.
pub fn generate_mission<R: Rng + ?Sized>(player: Color, rng: &mut R) -> Mission {
    let id = rng.gen_range(1..=MISSION_COUNT);
    let target = match id {
        1 => draw_target(player, rng),
        // Unused by conquest missions; any non-player color will do.
        _ => TARGET_CANDIDATES
            .iter()
            .copied()
            .find(|&c| c != player)
            .unwrap_or(Color::Blue),
    };
    let mission = Mission::from_id(id, target);
    tracing::debug!(id = mission.id, objective = ?mission.objective, "mission drawn");
    mission
}
