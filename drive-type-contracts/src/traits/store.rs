// SPDX-License-Identifier: GPL-3.0-only

use std::sync::Arc;

use async_trait::async_trait;

use drive_type_models::{
    DriveType, DriveTypeAttributes, DriveTypeChanges, DriveTypeId, RequestContext,
};

use crate::StorageError;

/// Persistence collaborator behind the drive type catalog
///
/// Lookups by id or name fail with `StorageErrorKind::NotFound` when nothing
/// matches. Uniqueness of names and ordering of listings are up to the
/// implementation.
#[async_trait]
pub trait DriveTypeStore: Send + Sync {
    /// Persist a new record and return it with its assigned id
    async fn insert(
        &self,
        ctx: &RequestContext,
        attributes: &DriveTypeAttributes,
    ) -> Result<DriveType, StorageError>;

    async fn get(&self, ctx: &RequestContext, id: DriveTypeId) -> Result<DriveType, StorageError>;

    async fn get_by_name(&self, ctx: &RequestContext, name: &str)
    -> Result<DriveType, StorageError>;

    /// Apply `changes` to the record and return its new state
    ///
    /// An empty change set still resolves the record.
    async fn update(
        &self,
        ctx: &RequestContext,
        id: DriveTypeId,
        changes: &DriveTypeChanges,
    ) -> Result<DriveType, StorageError>;

    async fn destroy(&self, ctx: &RequestContext, id: DriveTypeId) -> Result<(), StorageError>;

    async fn list_by_visibility(
        &self,
        ctx: &RequestContext,
        visible: bool,
    ) -> Result<Vec<DriveType>, StorageError>;
}

#[async_trait]
impl<S: DriveTypeStore + ?Sized> DriveTypeStore for Arc<S> {
    async fn insert(
        &self,
        ctx: &RequestContext,
        attributes: &DriveTypeAttributes,
    ) -> Result<DriveType, StorageError> {
        (**self).insert(ctx, attributes).await
    }

    async fn get(&self, ctx: &RequestContext, id: DriveTypeId) -> Result<DriveType, StorageError> {
        (**self).get(ctx, id).await
    }

    async fn get_by_name(
        &self,
        ctx: &RequestContext,
        name: &str,
    ) -> Result<DriveType, StorageError> {
        (**self).get_by_name(ctx, name).await
    }

    async fn update(
        &self,
        ctx: &RequestContext,
        id: DriveTypeId,
        changes: &DriveTypeChanges,
    ) -> Result<DriveType, StorageError> {
        (**self).update(ctx, id, changes).await
    }

    async fn destroy(&self, ctx: &RequestContext, id: DriveTypeId) -> Result<(), StorageError> {
        (**self).destroy(ctx, id).await
    }

    async fn list_by_visibility(
        &self,
        ctx: &RequestContext,
        visible: bool,
    ) -> Result<Vec<DriveType>, StorageError> {
        (**self).list_by_visibility(ctx, visible).await
    }
}
