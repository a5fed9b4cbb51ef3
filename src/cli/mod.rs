//! Terminal front end.
//!
//! Renders the map, mission, and menu, parses the player's numeric input,
//! and runs the interactive game loop on top of a [`Session`](crate::session::Session).

pub mod display;
pub mod game;
pub mod input;

pub use game::{play, GameEnd};
pub use input::{parse_index, parse_menu_choice, MenuChoice};
