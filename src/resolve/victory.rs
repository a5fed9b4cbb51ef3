//! Mission evaluation.

use serde::{Deserialize, Serialize};

use crate::board::{Color, Registry};
use crate::mission::{Mission, Objective};

/// Aggregate ownership counts relevant to a mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionTally {
    /// Territories currently owned by the player.
    pub player_territories: usize,
    /// Whether the mission's target army still owns any territory.
    /// Always false for conquest missions.
    pub target_present: bool,
}

/// Tallies the registry against `mission` in a single pass.
pub fn tally_mission(registry: &Registry, mission: &Mission, player: Color) -> MissionTally {
    let target = mission.target_color();
    let mut tally = MissionTally {
        player_territories: 0,
        target_present: false,
    };
    for territory in registry.territories() {
        if territory.is_owned_by(player) {
            tally.player_territories += 1;
        }
        if Some(territory.owner) == target {
            tally.target_present = true;
        }
    }
    tally
}

/// Returns true if `mission` is fulfilled for `player` on the current map.
pub fn check_victory(registry: &Registry, mission: &Mission, player: Color) -> bool {
    let tally = tally_mission(registry, mission, player);
    match mission.objective {
        Objective::DestroyArmy { .. } => !tally.target_present,
        Objective::ConquerCount { target } => tally.player_territories >= target,
    }
}
