//! Board representation.
//!
//! Contains the army colors, territory records, and the fixed-size
//! territory registry that makes up the state of a session.

pub mod color;
pub mod registry;
pub mod territory;

pub use color::{Color, ALL_COLORS};
pub use registry::{Registry, TERRITORY_COUNT};
pub use territory::Territory;
