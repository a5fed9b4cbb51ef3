//! Session records.
//!
//! A record captures one finished session as JSON: the player's color and
//! mission, every battle in the order it was fought, and the final map.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::{Color, Registry};
use crate::mission::Mission;
use crate::resolve::BattleOutcome;

/// Errors that can occur while writing a record.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("failed to write record: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode record: {0}")]
    Json(#[from] serde_json::Error),
}

/// One resolved attack, addressed by territory index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRecord {
    pub attacker: usize,
    pub defender: usize,
    pub outcome: BattleOutcome,
}

/// A complete session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub player: Color,
    pub mission: Mission,
    pub battles: Vec<BattleRecord>,
    pub final_map: Registry,
    pub victory: bool,
}

/// Writes `record` as pretty-printed JSON followed by a newline.
pub fn write_record<W: Write>(record: &SessionRecord, out: &mut W) -> Result<(), RecordError> {
    serde_json::to_writer_pretty(&mut *out, record)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Creates (or truncates) `path` and writes `record` to it.
pub fn save_record(record: &SessionRecord, path: &Path) -> Result<(), RecordError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_record(record, &mut writer)
}
