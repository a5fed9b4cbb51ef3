//! Session state management.
//!
//! A session owns everything a single game needs: the territory registry,
//! the player's color and mission, and the random source. The game loop
//! talks to the session; the session validates each request before handing
//! it to the battle resolver or the victory evaluator.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::{Color, Registry, TERRITORY_COUNT};
use crate::config::{validate_player, ConfigError, GameConfig};
use crate::mission::{generate_mission, Mission};
use crate::record::{BattleRecord, SessionRecord};
use crate::resolve::{check_victory, resolve_attack, tally_mission, BattleOutcome, MissionTally};

/// Reasons an attack request is refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttackError {
    #[error("invalid attacking territory ID: {0}")]
    AttackerOutOfRange(usize),

    #[error("invalid defending territory ID: {0}")]
    DefenderOutOfRange(usize),

    #[error("a territory cannot attack itself")]
    SameTerritory,

    #[error("the territory {0} does not belong to you")]
    NotOwned(String),

    #[error("you cannot attack your own territories")]
    OwnTerritory,

    #[error("you need at least 2 troops to attack ({name} has {troops})")]
    InsufficientTroops { name: String, troops: u32 },
}

/// A single game in progress.
pub struct Session {
    registry: Registry,
    mission: Mission,
    player: Color,
    rng: SmallRng,
    battles: Vec<BattleRecord>,
}

impl Session {
    /// Starts a session from a startup configuration.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Session::with_rng(config.player, rng)
    }

    /// Starts a session on the standard map, drawing the mission from `rng`.
    pub fn with_rng(player: Color, mut rng: SmallRng) -> Result<Self, ConfigError> {
        validate_player(player)?;
        let mission = generate_mission(player, &mut rng);
        Ok(Session::from_parts(Registry::initial(), mission, player, rng))
    }

    /// Assembles a session from explicit parts without validation.
    pub fn from_parts(registry: Registry, mission: Mission, player: Color, rng: SmallRng) -> Self {
        Session {
            registry,
            mission,
            player,
            rng,
            battles: Vec::new(),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn mission(&self) -> &Mission {
        &self.mission
    }

    pub fn player(&self) -> Color {
        self.player
    }

    /// Battles fought so far, oldest first.
    pub fn battles(&self) -> &[BattleRecord] {
        &self.battles
    }

    /// Checks whether the player may attack `defender` from `attacker`.
    pub fn validate_attack(&self, attacker: usize, defender: usize) -> Result<(), AttackError> {
        let att = self
            .registry
            .get(attacker)
            .ok_or(AttackError::AttackerOutOfRange(attacker))?;
        let def = self
            .registry
            .get(defender)
            .ok_or(AttackError::DefenderOutOfRange(defender))?;
        if attacker == defender {
            return Err(AttackError::SameTerritory);
        }
        if !att.is_owned_by(self.player) {
            return Err(AttackError::NotOwned(att.name.clone()));
        }
        if att.owner == def.owner {
            return Err(AttackError::OwnTerritory);
        }
        if !att.can_attack() {
            return Err(AttackError::InsufficientTroops {
                name: att.name.clone(),
                troops: att.troops,
            });
        }
        Ok(())
    }

    /// Validates and resolves one attack, updating the map in place.
    pub fn attack(&mut self, attacker: usize, defender: usize) -> Result<BattleOutcome, AttackError> {
        if let Err(e) = self.validate_attack(attacker, defender) {
            tracing::warn!(attacker, defender, error = %e, "attack rejected");
            return Err(e);
        }
        let (att, def) = self
            .registry
            .pair_mut(attacker, defender)
            .ok_or(AttackError::SameTerritory)?;
        let outcome = resolve_attack(att, def, &mut self.rng);
        self.battles.push(BattleRecord {
            attacker,
            defender,
            outcome,
        });
        Ok(outcome)
    }

    /// Returns every (attacker, defender) pair the player may currently choose.
    pub fn legal_attacks(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for attacker in 0..TERRITORY_COUNT {
            for defender in 0..TERRITORY_COUNT {
                if self.validate_attack(attacker, defender).is_ok() {
                    pairs.push((attacker, defender));
                }
            }
        }
        pairs
    }

    /// Returns true if the player's mission is fulfilled.
    pub fn check_victory(&self) -> bool {
        let won = check_victory(&self.registry, &self.mission, self.player);
        if won {
            tracing::info!(mission = self.mission.id, "mission accomplished");
        }
        won
    }

    /// Returns the ownership counts the mission is judged on.
    pub fn tally(&self) -> MissionTally {
        tally_mission(&self.registry, &self.mission, self.player)
    }

    /// Snapshots the session into a serializable record.
    pub fn to_record(&self) -> SessionRecord {
        SessionRecord {
            player: self.player,
            mission: self.mission.clone(),
            battles: self.battles.clone(),
            final_map: self.registry.clone(),
            victory: self.check_victory(),
        }
    }
}
