//! The territory registry.
//!
//! Holds every territory of a session in a fixed-size array. Territories are
//! addressed by index and the registry never grows or shrinks, so the same
//! index refers to the same territory for the whole session.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::territory::Territory;

/// The number of territories on the map.
pub const TERRITORY_COUNT: usize = 5;

/// Starting map: (name, owner, troops) in index order.
const STARTING_MAP: [(&str, Color, u32); TERRITORY_COUNT] = [
    ("New York", Color::Yellow, 3),
    ("Texas", Color::Blue, 4),
    ("Quebec", Color::Green, 5),
    ("California", Color::Yellow, 2),
    ("Mexico", Color::Blue, 6),
];

/// The ordered, fixed-length collection of territories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    territories: [Territory; TERRITORY_COUNT],
}

impl Registry {
    /// Creates the registry with the standard starting map.
    pub fn initial() -> Self {
        Registry {
            territories: STARTING_MAP
                .map(|(name, owner, troops)| Territory::new(name, owner, troops)),
        }
    }

    /// Creates a registry from explicit territory records.
    pub fn from_territories(territories: [Territory; TERRITORY_COUNT]) -> Self {
        Registry { territories }
    }

    /// Returns the number of territories (always `TERRITORY_COUNT`).
    pub const fn len(&self) -> usize {
        TERRITORY_COUNT
    }

    /// Always false: a registry is never empty.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns the territory at `index`, or None if out of range.
    pub fn get(&self, index: usize) -> Option<&Territory> {
        self.territories.get(index)
    }

    /// Returns all territories in index order.
    pub fn territories(&self) -> &[Territory] {
        &self.territories
    }

    /// Iterates over territories with their indices.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Territory)> {
        self.territories.iter().enumerate()
    }

    /// Borrows two distinct territories mutably at once.
    ///
    /// Returns None if either index is out of range or both are equal.
    pub fn pair_mut(&mut self, first: usize, second: usize) -> Option<(&mut Territory, &mut Territory)> {
        if first == second || first >= TERRITORY_COUNT || second >= TERRITORY_COUNT {
            return None;
        }
        if first < second {
            let (lo, hi) = self.territories.split_at_mut(second);
            Some((&mut lo[first], &mut hi[0]))
        } else {
            let (lo, hi) = self.territories.split_at_mut(first);
            Some((&mut hi[0], &mut lo[second]))
        }
    }

    /// Counts the territories owned by `color`.
    pub fn count_owned_by(&self, color: Color) -> usize {
        self.territories.iter().filter(|t| t.is_owned_by(color)).count()
    }

    /// Returns true if `color` owns at least one territory.
    pub fn is_present(&self, color: Color) -> bool {
        self.territories.iter().any(|t| t.is_owned_by(color))
    }

    /// Sum of troops across all territories owned by `color`.
    pub fn total_troops(&self, color: Color) -> u32 {
        self.territories
            .iter()
            .filter(|t| t.is_owned_by(color))
            .map(|t| t.troops)
            .sum()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::initial()
    }
}
