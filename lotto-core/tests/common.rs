#![allow(dead_code)]

use async_trait::async_trait;
use lotto_core::{LotteryBook, MemoryStore, RecordStore, StoreError};
use lotto_types::{Avatar, DrawForm, PlayerForm};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Turns a list of numbers into the slot strings a form would carry
pub fn slots(numbers: &[u8]) -> Vec<String> {
    numbers.iter().map(|n| n.to_string()).collect()
}

/// Creates a player form with the given name and numbers
pub fn player_form(name: &str, numbers: &[u8]) -> PlayerForm {
    PlayerForm {
        name: name.to_string(),
        avatar: Avatar::Avatar1,
        numbers: slots(numbers),
    }
}

/// Creates a draw form with the given id and numbers
pub fn draw_form(game_id: &str, numbers: &[u8]) -> DrawForm {
    DrawForm {
        game_id: game_id.to_string(),
        numbers: slots(numbers),
    }
}

/// Creates a book over a fresh in-memory store
pub fn create_test_book() -> LotteryBook<MemoryStore> {
    LotteryBook::new(Arc::new(MemoryStore::new()))
}

/// Store whose writes can be switched to fail, to exercise persistence errors
#[derive(Default)]
pub struct FlakyStore {
    inner: MemoryStore,
    fail_writes: AtomicBool,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl RecordStore for FlakyStore {
    async fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.load(key).await
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("disk full".to_string()));
        }
        self.inner.save(key, value).await
    }
}
