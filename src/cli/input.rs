//! Player input parsing.
//!
//! Every prompt expects a single non-negative integer on its own line.
//! Anything else is rejected and the caller decides how to recover.

use std::io::{self, BufRead};

/// An action picked from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Option 1: start an attack.
    Attack,
    /// Option 2: check whether the mission is fulfilled.
    CheckVictory,
    /// Option 0: leave the game.
    Quit,
}

/// Parses a main-menu line. Returns None for anything but `0`, `1` or `2`.
pub fn parse_menu_choice(line: &str) -> Option<MenuChoice> {
    match line.trim().parse::<u32>().ok()? {
        0 => Some(MenuChoice::Quit),
        1 => Some(MenuChoice::Attack),
        2 => Some(MenuChoice::CheckVictory),
        _ => None,
    }
}

/// Parses a territory ID. Range checking is left to the session.
pub fn parse_index(line: &str) -> Option<usize> {
    line.trim().parse::<usize>().ok()
}

/// Reads one line, without its terminator. Returns None at end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(&['\r', '\n'][..]).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}
