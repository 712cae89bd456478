use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::PlayerId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Avatar {
    #[default]
    Avatar1,
    Avatar2,
    Avatar3,
    Avatar4,
}

/// A registered participant. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub avatar: Avatar,
    pub numbers: Vec<u8>,
    pub created_at: String, // ISO 8601 string
}

/// Raw registration form as typed by the user, one string per number slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlayerForm {
    pub name: String,
    #[serde(default)]
    pub avatar: Avatar,
    pub numbers: Vec<String>,
}

/// A player form that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerEntry {
    pub name: String,
    pub avatar: Avatar,
    pub numbers: Vec<u8>,
}
