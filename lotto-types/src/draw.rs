use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::GameId;

/// A registered draw result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Draw {
    pub game_id: GameId,
    pub numbers: Vec<u8>,
    pub date: String, // ISO 8601 string, set when registered
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DrawForm {
    pub game_id: String,
    pub numbers: Vec<String>,
}

/// A draw form that passed validation, not yet checked against stored draws
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawEntry {
    pub game_id: GameId,
    pub numbers: Vec<u8>,
}
