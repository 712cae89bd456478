use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use ts_rs::TS;

use crate::Player;

/// Derived per-player outcome across every registered draw. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MatchResult {
    pub matched_numbers: BTreeSet<u8>,
    pub is_winner: bool,
    /// Most hits any single draw produced for this player
    pub best_single_draw_hits: usize,
}

impl MatchResult {
    pub fn matched_count(&self) -> usize {
        self.matched_numbers.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PlayerStanding {
    pub player: Player,
    pub result: MatchResult,
}
