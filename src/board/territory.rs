//! A single territory record.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// A map region with its owning army and troop count.
///
/// Territories have no identifier of their own; they are addressed by
/// their index in the [`Registry`](super::Registry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    pub name: String,
    pub owner: Color,
    pub troops: u32,
}

impl Territory {
    /// Creates a territory owned by `owner` with `troops` troops.
    pub fn new(name: impl Into<String>, owner: Color, troops: u32) -> Self {
        Territory {
            name: name.into(),
            owner,
            troops,
        }
    }

    /// Returns true if this territory belongs to `color`.
    pub fn is_owned_by(&self, color: Color) -> bool {
        self.owner == color
    }

    /// Returns true if this territory has enough troops to launch an attack.
    ///
    /// One troop must always stay behind, so at least two are required.
    pub fn can_attack(&self) -> bool {
        self.troops >= 2
    }
}
