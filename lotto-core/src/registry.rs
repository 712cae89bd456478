use chrono::Utc;
use lotto_types::{Draw, DrawEntry, GameId, Player, PlayerEntry};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("a draw with id {game_id} is already registered")]
pub struct DuplicateDraw {
    pub game_id: GameId,
}

/// Stamp a validated player with a fresh id and creation time
pub fn new_player(entry: PlayerEntry) -> Player {
    Player {
        id: Uuid::new_v4().to_string(),
        name: entry.name,
        avatar: entry.avatar,
        numbers: entry.numbers,
        created_at: Utc::now().to_rfc3339(),
    }
}

/// Admit a validated draw unless one with the same `gameId` exists.
/// Ids are compared exactly, with no case or whitespace folding.
pub fn register_draw(entry: DrawEntry, existing: &[Draw]) -> Result<Draw, DuplicateDraw> {
    if existing.iter().any(|draw| draw.game_id == entry.game_id) {
        return Err(DuplicateDraw {
            game_id: entry.game_id,
        });
    }

    Ok(Draw {
        game_id: entry.game_id,
        numbers: entry.numbers,
        date: Utc::now().to_rfc3339(),
    })
}

/// Remove the first player with `id`. Returns false if there was none.
pub fn remove_player(players: &mut Vec<Player>, id: &str) -> bool {
    match players.iter().position(|player| player.id == id) {
        Some(index) => {
            players.remove(index);
            true
        }
        None => false,
    }
}

/// Remove the first draw with `game_id`. Returns false if there was none.
pub fn remove_draw(draws: &mut Vec<Draw>, game_id: &str) -> bool {
    match draws.iter().position(|draw| draw.game_id == game_id) {
        Some(index) => {
            draws.remove(index);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lotto_types::Avatar;

    fn entry(game_id: &str) -> DrawEntry {
        DrawEntry {
            game_id: game_id.to_string(),
            numbers: vec![1, 2, 3, 4, 5, 6],
        }
    }

    #[test]
    fn test_new_player_gets_unique_ids() {
        let make = || {
            new_player(PlayerEntry {
                name: "Ana".to_string(),
                avatar: Avatar::Avatar4,
                numbers: vec![1, 2, 3, 4, 5, 6],
            })
        };
        let first = make();
        let second = make();

        assert_ne!(first.id, second.id);
        assert_eq!(first.avatar, Avatar::Avatar4);
        assert!(chrono::DateTime::parse_from_rfc3339(&first.created_at).is_ok());
    }

    #[test]
    fn test_register_draw_rejects_same_game_id() {
        let mut draws = Vec::new();
        let first = register_draw(entry("100"), &draws).unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(&first.date).is_ok());
        draws.push(first);

        let err = register_draw(entry("100"), &draws).unwrap_err();
        assert_eq!(
            err,
            DuplicateDraw {
                game_id: "100".to_string()
            }
        );
        assert_eq!(draws.len(), 1);
    }

    #[test]
    fn test_game_id_comparison_is_exact() {
        let draws = vec![register_draw(entry("100"), &[]).unwrap()];
        assert!(register_draw(entry("0100"), &draws).is_ok());
        assert!(register_draw(entry("100a"), &draws).is_ok());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut draws = vec![register_draw(entry("1"), &[]).unwrap()];
        let before = draws.clone();

        assert!(!remove_draw(&mut draws, "2"));
        assert_eq!(draws, before);

        assert!(remove_draw(&mut draws, "1"));
        assert!(draws.is_empty());
        assert!(!remove_draw(&mut draws, "1"));
    }

    #[test]
    fn test_remove_player_only_removes_first_match() {
        let player = Player {
            id: "dup".to_string(),
            name: "Ana".to_string(),
            avatar: Avatar::Avatar1,
            numbers: vec![1, 2, 3, 4, 5, 6],
            created_at: Utc::now().to_rfc3339(),
        };
        let mut players = vec![player.clone(), player];

        assert!(remove_player(&mut players, "dup"));
        assert_eq!(players.len(), 1);
        assert!(!remove_player(&mut players, "other"));
        assert_eq!(players.len(), 1);
    }
}
