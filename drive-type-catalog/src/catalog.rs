// SPDX-License-Identifier: GPL-3.0-only

use tracing::debug;

use drive_type_contracts::{DriveTypeStore, StorageError};
use drive_type_models::{
    DriveType, DriveTypeChanges, DriveTypeId, DriveTypeUpdate, NewDriveType, RequestContext, Rpm,
};

use crate::config::CatalogConfig;
use crate::error::ConfigError;
use crate::naming::NameFormatter;

/// CRUD over drive type records held by a `DriveTypeStore`
///
/// The catalog keeps no state of its own. Each operation makes exactly one
/// store call after an optional name synthesis step, and store failures are
/// returned unchanged.
#[derive(Debug, Clone)]
pub struct DriveTypeCatalog<S> {
    store: S,
    formatter: NameFormatter,
}

impl<S: DriveTypeStore> DriveTypeCatalog<S> {
    pub fn new(store: S, formatter: NameFormatter) -> Self {
        Self { store, formatter }
    }

    pub fn from_config(store: S, config: &CatalogConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(store, config.name_formatter()?))
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn formatter(&self) -> &NameFormatter {
        &self.formatter
    }

    /// The name `create` would assign to a drive type with these attributes
    pub fn default_name_for(
        &self,
        drive_type: &str,
        size_gb: u64,
        rpm: &Rpm,
        capabilities: Option<&str>,
    ) -> String {
        self.formatter
            .format_name(drive_type, size_gb, rpm, capabilities)
    }

    pub async fn create(
        &self,
        ctx: &RequestContext,
        request: NewDriveType,
    ) -> Result<DriveType, StorageError> {
        let name = match request.name.clone() {
            Some(name) => name,
            None => self.default_name_for(
                &request.drive_type,
                request.size_gb,
                &request.rpm,
                Some(&request.capabilities),
            ),
        };

        debug!(
            request_id = %ctx.request_id,
            "Creating drive type {}: {} {} {} {}",
            name, request.drive_type, request.size_gb, request.rpm, request.capabilities
        );

        let attributes = request.into_attributes(name);
        self.store.insert(ctx, &attributes).await
    }

    /// Apply the supplied, non-empty fields of `update`
    ///
    /// The store is called even when nothing survives filtering, which makes
    /// an empty update a cheap existence check.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: DriveTypeId,
        update: DriveTypeUpdate,
    ) -> Result<DriveType, StorageError> {
        let changes = update.into_changes();

        debug!(request_id = %ctx.request_id, "Updating drive type with id {}: {:?}", id, changes);

        self.store.update(ctx, id, &changes).await
    }

    /// Rename the drive type called `name`
    ///
    /// Without a `new_name` (or with an empty one) the record is renamed to
    /// the default name derived from its own attributes.
    pub async fn rename(
        &self,
        ctx: &RequestContext,
        name: &str,
        new_name: Option<&str>,
    ) -> Result<DriveType, StorageError> {
        let current = self.store.get_by_name(ctx, name).await?;

        let new_name = match new_name {
            Some(new_name) if !new_name.is_empty() => new_name.to_string(),
            _ => self.default_name_for(
                &current.drive_type,
                current.size_gb,
                &current.rpm,
                Some(&current.capabilities),
            ),
        };

        debug!(request_id = %ctx.request_id, "Renaming drive type {} to {}", name, new_name);

        self.store
            .update(ctx, current.id, &DriveTypeChanges::rename(new_name))
            .await
    }

    pub async fn delete(&self, ctx: &RequestContext, id: DriveTypeId) -> Result<(), StorageError> {
        debug!(request_id = %ctx.request_id, "Deleting drive type {}", id);
        self.store.destroy(ctx, id).await
    }

    pub async fn get(&self, ctx: &RequestContext, id: DriveTypeId) -> Result<DriveType, StorageError> {
        self.store.get(ctx, id).await
    }

    pub async fn get_by_name(
        &self,
        ctx: &RequestContext,
        name: &str,
    ) -> Result<DriveType, StorageError> {
        self.store.get_by_name(ctx, name).await
    }

    /// All drive types with the given visibility, in store order
    pub async fn list(
        &self,
        ctx: &RequestContext,
        visible: bool,
    ) -> Result<Vec<DriveType>, StorageError> {
        self.store.list_by_visibility(ctx, visible).await
    }
}
