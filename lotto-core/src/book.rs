use std::sync::Arc;

use lotto_types::{Draw, DrawForm, FieldErrors, GameId, Player, PlayerForm, PlayerStanding};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::export::{ExportError, export_csv};
use crate::matching::MatchEngine;
use crate::registry::{self, DuplicateDraw};
use crate::store::{
    DRAWS_KEY, PLAYERS_KEY, RecordStore, StoreError, load_collection, save_collection,
};
use crate::validation::{validate_draw, validate_player};

#[derive(Debug, Error)]
pub enum BookError {
    #[error("invalid entry: {0}")]
    Invalid(FieldErrors),
    #[error("a draw with id {game_id} is already registered")]
    DuplicateDraw { game_id: GameId },
    #[error(transparent)]
    Persistence(#[from] StoreError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

impl From<DuplicateDraw> for BookError {
    fn from(err: DuplicateDraw) -> Self {
        BookError::DuplicateDraw {
            game_id: err.game_id,
        }
    }
}

/// Players and draws kept in a record store.
///
/// Every mutation reads the whole collection, changes it in memory and
/// writes it back. The write lock keeps those cycles from interleaving
/// within this process; other writers sharing the store are not coordinated.
/// A failed step leaves the stored collection as it was.
pub struct LotteryBook<S: RecordStore + ?Sized> {
    store: Arc<S>,
    write_lock: Mutex<()>,
}

impl<S: RecordStore + ?Sized> LotteryBook<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub async fn players(&self) -> Result<Vec<Player>, BookError> {
        self.read_lenient(PLAYERS_KEY).await
    }

    pub async fn draws(&self) -> Result<Vec<Draw>, BookError> {
        self.read_lenient(DRAWS_KEY).await
    }

    pub async fn register_player(&self, form: &PlayerForm) -> Result<Player, BookError> {
        let entry = validate_player(form).map_err(BookError::Invalid)?;

        let _guard = self.write_lock.lock().await;
        let mut players: Vec<Player> = load_collection(&*self.store, PLAYERS_KEY).await?;

        let player = registry::new_player(entry);
        players.push(player.clone());
        save_collection(&*self.store, PLAYERS_KEY, &players).await?;

        info!("Registered player {} ({})", player.name, player.id);
        Ok(player)
    }

    pub async fn register_draw(&self, form: &DrawForm) -> Result<Draw, BookError> {
        let entry = validate_draw(form).map_err(BookError::Invalid)?;

        let _guard = self.write_lock.lock().await;
        let mut draws: Vec<Draw> = load_collection(&*self.store, DRAWS_KEY).await?;

        let draw = match registry::register_draw(entry, &draws) {
            Ok(draw) => draw,
            Err(duplicate) => {
                warn!("Rejected draw {}: already registered", duplicate.game_id);
                return Err(duplicate.into());
            }
        };
        draws.push(draw.clone());
        save_collection(&*self.store, DRAWS_KEY, &draws).await?;

        info!("Registered draw {} with numbers {:?}", draw.game_id, draw.numbers);
        Ok(draw)
    }

    /// Returns whether a player was removed. Unknown ids are not an error.
    pub async fn delete_player(&self, id: &str) -> Result<bool, BookError> {
        let _guard = self.write_lock.lock().await;
        let mut players: Vec<Player> = load_collection(&*self.store, PLAYERS_KEY).await?;

        if !registry::remove_player(&mut players, id) {
            debug!("No player {} to delete", id);
            return Ok(false);
        }
        save_collection(&*self.store, PLAYERS_KEY, &players).await?;

        info!("Deleted player {}", id);
        Ok(true)
    }

    /// Returns whether a draw was removed. Unknown ids are not an error.
    pub async fn delete_draw(&self, game_id: &str) -> Result<bool, BookError> {
        let _guard = self.write_lock.lock().await;
        let mut draws: Vec<Draw> = load_collection(&*self.store, DRAWS_KEY).await?;

        if !registry::remove_draw(&mut draws, game_id) {
            debug!("No draw {} to delete", game_id);
            return Ok(false);
        }
        save_collection(&*self.store, DRAWS_KEY, &draws).await?;

        info!("Deleted draw {}", game_id);
        Ok(true)
    }

    pub async fn standings(&self) -> Result<Vec<PlayerStanding>, BookError> {
        let players = self.players().await?;
        let draws = self.draws().await?;
        Ok(MatchEngine::standings(&players, &draws))
    }

    pub async fn export_csv(&self) -> Result<String, BookError> {
        let players = self.players().await?;
        let draws = self.draws().await?;
        Ok(export_csv(&draws, &players)?)
    }

    /// Reads for display: a collection that no longer parses is shown as
    /// empty rather than failing the whole view.
    async fn read_lenient<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, BookError> {
        match load_collection(&*self.store, key).await {
            Ok(records) => Ok(records),
            Err(StoreError::Corrupt { key, source }) => {
                warn!("Ignoring unreadable collection {}: {}", key, source);
                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }
}
