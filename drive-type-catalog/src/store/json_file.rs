// SPDX-License-Identifier: GPL-3.0-only

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tempfile::NamedTempFile;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::trace;

use drive_type_contracts::{DriveTypeStore, StorageError};
use drive_type_models::{
    DriveType, DriveTypeAttributes, DriveTypeChanges, DriveTypeId, RequestContext,
};

use super::table::{RecordTable, TableDocument};

/// Store persisting the whole catalog as one JSON document
///
/// The file is the only copy of the catalog: every call reads it again, so
/// stores opened on the same path see each other's records. A missing file is
/// an empty catalog. Mutations replace the document atomically through a
/// uniquely named temporary file in the same directory.
///
/// Calls on one store are serialized. Separate processes writing the same
/// file at the same moment are last-writer-wins.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<RecordTable, StorageError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                return Ok(RecordTable::default());
            }
            Err(error) => {
                return Err(StorageError::unavailable(format!(
                    "failed to read {}: {error}",
                    self.path.display()
                )));
            }
        };

        let document: TableDocument = serde_json::from_str(&raw).map_err(|error| {
            StorageError::internal(format!("corrupt catalog {}: {error}", self.path.display()))
        })?;
        Ok(RecordTable::from_document(document))
    }

    async fn write(&self, ctx: &RequestContext, table: &RecordTable) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(&table.to_document())
            .map_err(|error| StorageError::internal(format!("serialize catalog: {error}")))?;

        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).await.map_err(|error| {
            StorageError::unavailable(format!("create {}: {error}", dir.display()))
        })?;

        let path = self.path.clone();
        tokio::task::spawn_blocking(move || persist(&dir, &path, content.as_bytes()))
            .await
            .map_err(|error| StorageError::internal(format!("catalog writer failed: {error}")))??;

        trace!(request_id = %ctx.request_id, "Persisted catalog to {}", self.path.display());
        Ok(())
    }
}

/// Write `content` to a fresh temporary file in `dir` and rename it over `path`
fn persist(dir: &Path, path: &Path, content: &[u8]) -> Result<(), StorageError> {
    let mut tmp = NamedTempFile::new_in(dir).map_err(|error| {
        StorageError::unavailable(format!("create temp file in {}: {error}", dir.display()))
    })?;
    tmp.write_all(content)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|error| {
            StorageError::unavailable(format!("write {}: {error}", tmp.path().display()))
        })?;
    tmp.persist(path).map_err(|error| {
        StorageError::unavailable(format!("replace {}: {}", path.display(), error.error))
    })?;
    Ok(())
}

#[async_trait]
impl DriveTypeStore for JsonFileStore {
    async fn insert(
        &self,
        ctx: &RequestContext,
        attributes: &DriveTypeAttributes,
    ) -> Result<DriveType, StorageError> {
        let _guard = self.lock.lock().await;
        let mut table = self.read().await?;
        let record = table.insert(attributes, Utc::now())?;
        self.write(ctx, &table).await?;
        Ok(record)
    }

    async fn get(&self, _ctx: &RequestContext, id: DriveTypeId) -> Result<DriveType, StorageError> {
        let _guard = self.lock.lock().await;
        self.read().await?.get(id)
    }

    async fn get_by_name(
        &self,
        _ctx: &RequestContext,
        name: &str,
    ) -> Result<DriveType, StorageError> {
        let _guard = self.lock.lock().await;
        self.read().await?.get_by_name(name)
    }

    async fn update(
        &self,
        ctx: &RequestContext,
        id: DriveTypeId,
        changes: &DriveTypeChanges,
    ) -> Result<DriveType, StorageError> {
        let _guard = self.lock.lock().await;
        let mut table = self.read().await?;
        let record = table.update(id, changes, Utc::now())?;
        self.write(ctx, &table).await?;
        Ok(record)
    }

    async fn destroy(&self, ctx: &RequestContext, id: DriveTypeId) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        let mut table = self.read().await?;
        table.destroy(id)?;
        self.write(ctx, &table).await
    }

    async fn list_by_visibility(
        &self,
        _ctx: &RequestContext,
        visible: bool,
    ) -> Result<Vec<DriveType>, StorageError> {
        let _guard = self.lock.lock().await;
        Ok(self.read().await?.list_by_visibility(visible))
    }
}

#[cfg(test)]
mod tests {
    use drive_type_contracts::StorageErrorKind;
    use drive_type_models::NewDriveType;

    use super::*;

    fn named(name: &str) -> DriveTypeAttributes {
        NewDriveType::new("SATA", 500, 7200).into_attributes(name.to_string())
    }

    #[tokio::test]
    async fn missing_file_is_an_empty_catalog() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = JsonFileStore::new(dir.path().join("catalog.json"));
        let ctx = RequestContext::new();

        let listed = store.list_by_visibility(&ctx, true).await.expect("list");
        assert!(listed.is_empty());
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn records_survive_reopen() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("nested").join("catalog.json");
        let ctx = RequestContext::new();

        let created = {
            let store = JsonFileStore::new(&path);
            store.insert(&ctx, &named("disk1")).await.expect("insert")
        };

        let reopened = JsonFileStore::new(&path);
        let fetched = reopened.get_by_name(&ctx, "disk1").await.expect("get by name");
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn two_stores_on_one_path_keep_every_record() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("catalog.json");
        let ctx = RequestContext::new();
        let first = JsonFileStore::new(&path);
        let second = JsonFileStore::new(&path);

        first.insert(&ctx, &named("one")).await.expect("insert one");
        second.insert(&ctx, &named("two")).await.expect("insert two");
        first.insert(&ctx, &named("three")).await.expect("insert three");

        let fresh = JsonFileStore::new(&path);
        let listed: Vec<(u64, String)> = fresh
            .list_by_visibility(&ctx, true)
            .await
            .expect("list")
            .into_iter()
            .map(|record| (record.id.get(), record.name))
            .collect();
        assert_eq!(
            listed,
            vec![
                (1, "one".to_string()),
                (2, "two".to_string()),
                (3, "three".to_string()),
            ]
        );

        // A name written by one store is visible to the other's uniqueness check
        let err = first.insert(&ctx, &named("two")).await.unwrap_err();
        assert_eq!(err.kind, StorageErrorKind::Conflict);
    }

    #[tokio::test]
    async fn removal_through_one_store_is_seen_by_another() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("catalog.json");
        let ctx = RequestContext::new();
        let first = JsonFileStore::new(&path);
        let second = JsonFileStore::new(&path);

        let record = first.insert(&ctx, &named("gone")).await.expect("insert");
        second.get(&ctx, record.id).await.expect("visible to second store");
        second.destroy(&ctx, record.id).await.expect("destroy");

        let err = first.get(&ctx, record.id).await.unwrap_err();
        assert!(err.is_not_found());
    }

    async fn insert_many(store: &JsonFileStore, prefix: &str) -> Result<(), StorageError> {
        let ctx = RequestContext::new();
        for n in 0..8 {
            store.insert(&ctx, &named(&format!("{prefix}-{n}"))).await?;
        }
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn concurrent_writers_leave_no_temp_files() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("catalog.json");
        let first = JsonFileStore::new(&path);
        let second = JsonFileStore::new(&path);

        let (a, b) = tokio::join!(insert_many(&first, "a"), insert_many(&second, "b"));
        a.expect("first writer");
        b.expect("second writer");

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .expect("read dir")
            .map(|entry| entry.expect("dir entry").file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("catalog.json")]);

        let listed = JsonFileStore::new(&path)
            .list_by_visibility(&RequestContext::new(), true)
            .await
            .expect("catalog still parses");
        assert!(!listed.is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, "not json").expect("write garbage");

        let store = JsonFileStore::new(&path);
        let err = store
            .get(&RequestContext::new(), DriveTypeId::new(1))
            .await
            .unwrap_err();
        assert_eq!(err.kind, StorageErrorKind::Internal);
    }

    #[tokio::test]
    async fn failed_mutation_leaves_file_untouched() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("catalog.json");
        let store = JsonFileStore::new(&path);
        let ctx = RequestContext::new();
        let attributes = NewDriveType::new("SAS", 300, 15000).into_attributes("sas".to_string());
        store.insert(&ctx, &attributes).await.expect("insert");
        let before = std::fs::read_to_string(&path).expect("read catalog");

        let err = store.insert(&ctx, &attributes).await.unwrap_err();
        assert_eq!(err.kind, StorageErrorKind::Conflict);
        assert_eq!(std::fs::read_to_string(&path).expect("read catalog"), before);
    }
}
