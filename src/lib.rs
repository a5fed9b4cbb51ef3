//! War mission game library.
//!
//! Exposes the board, mission, and resolution modules that make up the
//! game rules, the session that ties them together, and the terminal front
//! end used by the binary entry point.

pub mod board;
pub mod cli;
pub mod config;
pub mod logging;
pub mod mission;
pub mod record;
pub mod resolve;
pub mod session;
pub mod simulate;
