pub mod draw;
pub mod errors;
pub mod messages;
pub mod player;
pub mod standing;

// Re-export all types
pub use draw::*;
pub use errors::*;
pub use messages::*;
pub use player::*;
pub use standing::*;

/// Identifier of a registered player
pub type PlayerId = String;
/// User-supplied identifier of a registered draw
pub type GameId = String;

/// Every player and draw carries exactly this many numbers
pub const NUMBERS_PER_ENTRY: usize = 6;
pub const MIN_NUMBER: u8 = 1;
pub const MAX_NUMBER: u8 = 60;
