//! Interactive game loop.
//!
//! Each round shows the map, the mission, and the menu, then runs the chosen
//! action. The loop ends when the player quits, fulfils the mission on a
//! victory check, or input runs out.

use std::io::{self, BufRead, Write};

use crate::session::Session;

use super::display::{write_battle, write_check, write_map, write_menu, write_mission};
use super::input::{parse_index, parse_menu_choice, read_line, MenuChoice};

/// How an interactive game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    Victory,
    Quit,
    /// Input closed before the player quit.
    InputClosed,
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> io::Result<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;
    read_line(input)
}

/// Runs the game loop until it ends, reading from `input` and writing to `out`.
pub fn play<R: BufRead, W: Write>(session: &mut Session, input: &mut R, out: &mut W) -> io::Result<GameEnd> {
    writeln!(out, "Welcome to War! Your color is: {}", session.player())?;
    writeln!(out, "Your secret mission has been drawn.")?;

    loop {
        writeln!(out)?;
        write_map(out, session.registry())?;
        write_mission(out, session.mission())?;
        write_menu(out)?;

        let line = match prompt(input, out, "Choose your action (0-2): ")? {
            Some(line) => line,
            None => return Ok(GameEnd::InputClosed),
        };

        match parse_menu_choice(&line) {
            Some(MenuChoice::Attack) => {
                writeln!(out)?;
                writeln!(out, "--- ATTACK PHASE ---")?;
                if !attack_phase(session, input, out)? {
                    return Ok(GameEnd::InputClosed);
                }
            }
            Some(MenuChoice::CheckVictory) => {
                let won = session.check_victory();
                write_check(out, session.mission(), &session.tally(), won)?;
                if won {
                    return Ok(GameEnd::Victory);
                }
            }
            Some(MenuChoice::Quit) => {
                writeln!(out)?;
                writeln!(out, "Ending the game. Thanks for playing!")?;
                return Ok(GameEnd::Quit);
            }
            None => {
                writeln!(out)?;
                writeln!(out, "Invalid option. Try again.")?;
            }
        }

        writeln!(out)?;
        if prompt(input, out, "Press ENTER to continue the round...\n")?.is_none() {
            return Ok(GameEnd::InputClosed);
        }
    }
}

/// Asks for the two territory IDs and resolves the attack.
///
/// Returns false if input closed mid-prompt.
fn attack_phase<R: BufRead, W: Write>(session: &mut Session, input: &mut R, out: &mut W) -> io::Result<bool> {
    let Some(line) = prompt(input, out, "Enter the ID of your attacking territory: ")? else {
        return Ok(false);
    };
    let Some(attacker) = parse_index(&line) else {
        writeln!(out, "Invalid attacking territory ID.")?;
        return Ok(true);
    };

    let Some(line) = prompt(input, out, "Enter the ID of the territory to attack: ")? else {
        return Ok(false);
    };
    let Some(defender) = parse_index(&line) else {
        writeln!(out, "Invalid defending territory ID.")?;
        return Ok(true);
    };

    let before = (
        session.registry().get(attacker).cloned(),
        session.registry().get(defender).cloned(),
    );
    match session.attack(attacker, defender) {
        Ok(outcome) => {
            // A successful attack implies both indices are in range.
            if let (Some(att_before), Some(def_before), Some(att_after), Some(def_after)) = (
                before.0.as_ref(),
                before.1.as_ref(),
                session.registry().get(attacker),
                session.registry().get(defender),
            ) {
                writeln!(out)?;
                write_battle(out, (att_before, def_before), (att_after, def_after), &outcome)?;
            }
        }
        Err(e) => writeln!(out, "Error: {}.", e)?,
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, Registry};
    use crate::mission::Mission;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn run(session: &mut Session, script: &str) -> (GameEnd, String) {
        let mut input = io::Cursor::new(script.to_string());
        let mut out = Vec::new();
        let end = play(session, &mut input, &mut out).unwrap();
        (end, String::from_utf8(out).unwrap())
    }

    fn session(id: u8, target: Color) -> Session {
        Session::from_parts(
            Registry::initial(),
            Mission::from_id(id, target),
            Color::Yellow,
            SmallRng::seed_from_u64(9),
        )
    }

    #[test]
    fn quit_immediately() {
        let mut s = session(2, Color::Blue);
        let (end, text) = run(&mut s, "0\n");
        assert_eq!(end, GameEnd::Quit);
        assert!(text.contains("Welcome to War! Your color is: Yellow"));
        assert!(text.contains("=== TERRITORY MAP ==="));
        assert!(text.contains("Thanks for playing"));
    }

    #[test]
    fn end_of_input_closes_game() {
        let mut s = session(2, Color::Blue);
        let (end, _) = run(&mut s, "");
        assert_eq!(end, GameEnd::InputClosed);
        let (end, _) = run(&mut s, "1\n0\n");
        assert_eq!(end, GameEnd::InputClosed);
    }

    #[test]
    fn invalid_option_then_quit() {
        let mut s = session(2, Color::Blue);
        let (end, text) = run(&mut s, "7\n\n0\n");
        assert_eq!(end, GameEnd::Quit);
        assert!(text.contains("Invalid option. Try again."));
    }

    #[test]
    fn check_without_victory_continues() {
        let mut s = session(2, Color::Blue);
        let (end, text) = run(&mut s, "2\n\n0\n");
        assert_eq!(end, GameEnd::Quit);
        assert!(text.contains("Mission not yet fulfilled"));
    }

    #[test]
    fn check_with_victory_ends_game() {
        let mut s = session(1, Color::Black);
        let (end, text) = run(&mut s, "2\n");
        assert_eq!(end, GameEnd::Victory);
        assert!(text.contains("The Black army has been destroyed."));
        assert!(text.contains("VICTORY"));
    }

    #[test]
    fn rejected_attacks_report_errors() {
        let mut s = session(2, Color::Blue);
        let script = "1\n1\n2\n\n1\n0\n3\n\n1\n9\n0\n\n1\nx\n\n0\n";
        let (end, text) = run(&mut s, script);
        assert_eq!(end, GameEnd::Quit);
        assert!(text.contains("Error: the territory Texas does not belong to you."));
        assert!(text.contains("Error: you cannot attack your own territories."));
        assert!(text.contains("Invalid attacking territory ID."));
        assert!(text.contains("Error: invalid attacking territory ID: 9."));
        assert_eq!(s.registry(), &Registry::initial());
    }

    #[test]
    fn valid_attack_prints_battle() {
        let mut s = session(2, Color::Blue);
        let (end, text) = run(&mut s, "1\n0\n2\n\n0\n");
        assert_eq!(end, GameEnd::Quit);
        assert!(text.contains("--- ATTACK PHASE ---"));
        assert!(text.contains("[BATTLE] New York (Yellow) vs Quebec (Green)"));
        assert_eq!(s.battles().len(), 1);
    }
}
