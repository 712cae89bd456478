use chrono::{DateTime, Utc};
use lotto_types::{Draw, Player};
use thiserror::Error;

use crate::matching::MatchEngine;

pub const DRAWS_SECTION: &str = "REGISTERED DRAWS";
pub const PLAYERS_SECTION: &str = "REGISTERED PLAYERS";

const DRAW_HEADER: [&str; 8] = ["Draw", "N1", "N2", "N3", "N4", "N5", "N6", "Date"];
const PLAYER_HEADER: [&str; 8] = ["Name", "N1", "N2", "N3", "N4", "N5", "N6", "Matched"];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv buffer flush failed: {0}")]
    Flush(String),
    #[error("csv output is not utf-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Render both collections as a two-section CSV document. Read-only; there
/// is no import counterpart.
pub fn export_csv(draws: &[Draw], players: &[Player]) -> Result<String, ExportError> {
    let draw_rows = draws.iter().map(|draw| {
        let mut row = vec![draw.game_id.clone()];
        row.extend(draw.numbers.iter().map(u8::to_string));
        row.push(draw.date.clone());
        row
    });

    let player_rows = players.iter().map(|player| {
        let matched = MatchEngine::matched_numbers_for(&player.numbers, draws);
        let mut row = vec![player.name.clone()];
        row.extend(player.numbers.iter().map(u8::to_string));
        row.push(matched.len().to_string());
        row
    });

    let draws_section = write_section(DRAWS_SECTION, &DRAW_HEADER, draw_rows)?;
    let players_section = write_section(PLAYERS_SECTION, &PLAYER_HEADER, player_rows)?;

    Ok(format!("{draws_section}\n{players_section}"))
}

fn write_section(
    title: &str,
    header: &[&str],
    rows: impl Iterator<Item = Vec<String>>,
) -> Result<String, ExportError> {
    // Title, header and rows have different widths
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record([title])?;
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(&row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Suggested download name for an export made at `now`
pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("lottery-export-{}.csv", now.format("%Y-%m-%d"))
}
