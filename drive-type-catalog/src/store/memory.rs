// SPDX-License-Identifier: GPL-3.0-only

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::trace;

use drive_type_contracts::{DriveTypeStore, StorageError};
use drive_type_models::{
    DriveType, DriveTypeAttributes, DriveTypeChanges, DriveTypeId, RequestContext,
};

use super::table::RecordTable;

/// Volatile store keeping every record in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    table: RwLock<RecordTable>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl DriveTypeStore for MemoryStore {
    async fn insert(
        &self,
        ctx: &RequestContext,
        attributes: &DriveTypeAttributes,
    ) -> Result<DriveType, StorageError> {
        let record = self.table.write().await.insert(attributes, Utc::now())?;
        trace!(request_id = %ctx.request_id, "Stored drive type {} as {}", record.name, record.id);
        Ok(record)
    }

    async fn get(&self, _ctx: &RequestContext, id: DriveTypeId) -> Result<DriveType, StorageError> {
        self.table.read().await.get(id)
    }

    async fn get_by_name(
        &self,
        _ctx: &RequestContext,
        name: &str,
    ) -> Result<DriveType, StorageError> {
        self.table.read().await.get_by_name(name)
    }

    async fn update(
        &self,
        ctx: &RequestContext,
        id: DriveTypeId,
        changes: &DriveTypeChanges,
    ) -> Result<DriveType, StorageError> {
        let record = self.table.write().await.update(id, changes, Utc::now())?;
        trace!(request_id = %ctx.request_id, "Updated drive type {}", id);
        Ok(record)
    }

    async fn destroy(&self, ctx: &RequestContext, id: DriveTypeId) -> Result<(), StorageError> {
        self.table.write().await.destroy(id)?;
        trace!(request_id = %ctx.request_id, "Removed drive type {}", id);
        Ok(())
    }

    async fn list_by_visibility(
        &self,
        _ctx: &RequestContext,
        visible: bool,
    ) -> Result<Vec<DriveType>, StorageError> {
        Ok(self.table.read().await.list_by_visibility(visible))
    }
}
