//! Text rendering for the terminal front end.

use std::io::{self, Write};

use crate::board::{Registry, Territory};
use crate::mission::{Mission, Objective};
use crate::resolve::{BattleOutcome, MissionTally, Side};

const RULE: &str = "+----+----------------------+----------------+--------+";

/// Writes the map as a table with one row per territory.
pub fn write_map<W: Write>(out: &mut W, registry: &Registry) -> io::Result<()> {
    writeln!(out, "=== TERRITORY MAP ===")?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "| {:<2} | {:<20} | {:<14} | {:<6} |", "ID", "Territory", "Owner", "Troops")?;
    writeln!(out, "{}", RULE)?;
    for (i, t) in registry.iter() {
        writeln!(
            out,
            "| {:<2} | {:<20} | {:<14} | {:<6} |",
            i,
            t.name,
            t.owner.label(),
            t.troops
        )?;
    }
    writeln!(out, "{}", RULE)
}

/// Writes the secret mission banner.
pub fn write_mission<W: Write>(out: &mut W, mission: &Mission) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "YOUR SECRET MISSION (ID {}):", mission.id)?;
    writeln!(out, "  -> {}", mission.description)
}

/// Writes the main menu.
pub fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- ACTIONS ---")?;
    writeln!(out, "1. Start attack phase")?;
    writeln!(out, "2. Check victory")?;
    writeln!(out, "0. Quit game")?;
    writeln!(out, "---------------")
}

/// Writes the report of one battle.
///
/// `before` holds the two territories as they were when the battle started,
/// `after` as they are now.
pub fn write_battle<W: Write>(
    out: &mut W,
    before: (&Territory, &Territory),
    after: (&Territory, &Territory),
    outcome: &BattleOutcome,
) -> io::Result<()> {
    let (att, def) = before;
    writeln!(
        out,
        "[BATTLE] {} ({}) vs {} ({})",
        att.name, att.owner, def.name, def.owner
    )?;
    writeln!(
        out,
        "  Attack ({} troops) rolls {}. Defense ({} troops) rolls {}.",
        att.troops, outcome.attack_roll, def.troops, outcome.defense_roll
    )?;
    match outcome.loser {
        Side::Defender => writeln!(
            out,
            "  The attack wins! {} loses 1 troop. Troops left: {}",
            def.name,
            def.troops.saturating_sub(outcome.defender_losses)
        )?,
        Side::Attacker => writeln!(
            out,
            "  The defense holds or ties! {} loses 1 troop. Troops left: {}",
            att.name,
            att.troops.saturating_sub(outcome.attacker_losses)
        )?,
    }
    if let Some(owner) = outcome.conquered_by {
        writeln!(out, "  *** TERRITORY CONQUERED! ***")?;
        writeln!(out, "  {} now belongs to the {} army.", after.1.name, owner)?;
        writeln!(
            out,
            "  {} moves 1 troop in and keeps {}.",
            after.0.name, after.0.troops
        )?;
    }
    Ok(())
}

/// Writes the result of a victory check.
pub fn write_check<W: Write>(
    out: &mut W,
    mission: &Mission,
    tally: &MissionTally,
    won: bool,
) -> io::Result<()> {
    if won {
        match mission.objective {
            Objective::DestroyArmy { target } => {
                writeln!(out, "[CHECK] The {} army has been destroyed.", target)?
            }
            Objective::ConquerCount { target } => writeln!(
                out,
                "[CHECK] You control {} territories. The goal ({}) has been reached.",
                tally.player_territories, target
            )?,
        }
        writeln!(out)?;
        writeln!(out, "*** VICTORY! You have fulfilled your mission. ***")
    } else {
        writeln!(out)?;
        writeln!(out, "... Mission not yet fulfilled. Keep fighting!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn map_has_one_row_per_territory() {
        let text = render(|out| write_map(out, &Registry::initial()));
        let rows: Vec<&str> = text.lines().filter(|l| l.starts_with("| ") && !l.contains("ID")).collect();
        assert_eq!(rows.len(), 5);
        assert!(rows[0].contains("New York"));
        assert!(rows[0].contains("Yellow"));
        assert!(rows[4].contains("Mexico"));
        assert!(rows[4].contains('6'));
        assert!(text.lines().all(|l| l.starts_with("===") || l.len() == RULE.len()));
    }

    #[test]
    fn mission_banner_shows_id_and_description() {
        let mission = Mission::from_id(1, Color::Green);
        let text = render(|out| write_mission(out, &mission));
        assert!(text.contains("(ID 1)"));
        assert!(text.contains(&mission.description));
    }

    #[test]
    fn menu_lists_all_options() {
        let text = render(|out| write_menu(out));
        assert!(text.contains("1. Start attack phase"));
        assert!(text.contains("2. Check victory"));
        assert!(text.contains("0. Quit game"));
    }

    #[test]
    fn conquest_report() {
        let before_att = Territory::new("California", Color::Yellow, 3);
        let before_def = Territory::new("Texas", Color::Blue, 1);
        let after_att = Territory::new("California", Color::Yellow, 2);
        let after_def = Territory::new("Texas", Color::Yellow, 1);
        let outcome = BattleOutcome {
            attack_roll: 3,
            defense_roll: 2,
            loser: Side::Defender,
            attacker_losses: 0,
            defender_losses: 1,
            conquered_by: Some(Color::Yellow),
        };
        let text = render(|out| {
            write_battle(out, (&before_att, &before_def), (&after_att, &after_def), &outcome)
        });
        assert!(text.contains("[BATTLE] California (Yellow) vs Texas (Blue)"));
        assert!(text.contains("Texas loses 1 troop. Troops left: 0"));
        assert!(text.contains("TERRITORY CONQUERED"));
        assert!(text.contains("Texas now belongs to the Yellow army."));
        assert!(text.contains("keeps 2"));
    }

    #[test]
    fn defense_report() {
        let att = Territory::new("New York", Color::Yellow, 3);
        let def = Territory::new("Quebec", Color::Green, 5);
        let after_att = Territory::new("New York", Color::Yellow, 2);
        let outcome = BattleOutcome {
            attack_roll: 1,
            defense_roll: 1,
            loser: Side::Attacker,
            attacker_losses: 1,
            defender_losses: 0,
            conquered_by: None,
        };
        let text = render(|out| write_battle(out, (&att, &def), (&after_att, &def), &outcome));
        assert!(text.contains("The defense holds or ties! New York loses 1 troop. Troops left: 2"));
        assert!(!text.contains("CONQUERED"));
    }

    #[test]
    fn check_messages() {
        let tally = MissionTally {
            player_territories: 4,
            target_present: false,
        };
        let won = render(|out| write_check(out, &Mission::from_id(2, Color::Blue), &tally, true));
        assert!(won.contains("You control 4 territories. The goal (4) has been reached."));
        assert!(won.contains("VICTORY"));

        let destroyed = render(|out| write_check(out, &Mission::from_id(1, Color::Red), &tally, true));
        assert!(destroyed.contains("The Red army has been destroyed."));

        let pending = render(|out| write_check(out, &Mission::from_id(2, Color::Blue), &tally, false));
        assert!(pending.contains("Keep fighting"));
        assert!(!pending.contains("VICTORY"));
    }
}
