use anyhow::Result;
use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait};
use tracing::debug;

use crate::entities::{collections, prelude::*};
use lotto_core::{RecordStore, StoreError};

/// SQLite-backed record store. Each named collection is one row whose
/// document is replaced wholesale on save.
pub struct CollectionRepository {
    db: DatabaseConnection,
}

impl CollectionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_document(&self, name: &str) -> Result<Option<String>> {
        let model = Collections::find_by_id(name.to_string())
            .one(&self.db)
            .await?;
        Ok(model.map(|m| m.document))
    }

    pub async fn upsert_document(&self, name: &str, document: &str) -> Result<()> {
        let model = collections::ActiveModel {
            name: sea_orm::ActiveValue::Set(name.to_string()),
            document: sea_orm::ActiveValue::Set(document.to_string()),
            updated_at: sea_orm::ActiveValue::Set(chrono::Utc::now().into()),
        };

        Collections::insert(model)
            .on_conflict(
                OnConflict::column(collections::Column::Name)
                    .update_columns([collections::Column::Document, collections::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        debug!("Saved collection {} ({} bytes)", name, document.len());
        Ok(())
    }
}

fn backend_error(err: anyhow::Error) -> StoreError {
    StoreError::Backend(format!("{err:#}"))
}

#[async_trait]
impl RecordStore for CollectionRepository {
    async fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.find_document(key).await.map_err(backend_error)
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.upsert_document(key, value).await.map_err(backend_error)
    }
}
