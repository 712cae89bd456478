use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One keystroke in a number slot: the slot's current text and the text it would become
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SanitizeRequest {
    pub current: String,
    pub typed: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SanitizeResponse {
    pub value: String,
    pub accepted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DeleteResponse {
    /// False when nothing matched; deleting is idempotent
    pub removed: bool,
}
