// SPDX-License-Identifier: GPL-3.0-only

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use drive_type_contracts::StorageError;
use drive_type_models::{DriveType, DriveTypeAttributes, DriveTypeChanges, DriveTypeId};

/// In-process record table shared by the reference stores
///
/// Ids are handed out from 1 upwards and never reused. Names are unique.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordTable {
    next_id: u64,
    records: BTreeMap<DriveTypeId, DriveType>,
}

/// On-disk shape of a record table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct TableDocument {
    pub(crate) next_id: u64,
    pub(crate) records: Vec<DriveType>,
}

fn not_found(id: DriveTypeId) -> StorageError {
    StorageError::not_found(format!("drive type {id} could not be found"))
}

impl RecordTable {
    pub(crate) fn from_document(document: TableDocument) -> Self {
        let records: BTreeMap<_, _> = document
            .records
            .into_iter()
            .map(|record| (record.id, record))
            .collect();
        let highest = records.keys().next_back().map_or(0, |id| id.get());

        Self {
            next_id: document.next_id.max(highest),
            records,
        }
    }

    pub(crate) fn to_document(&self) -> TableDocument {
        TableDocument {
            next_id: self.next_id,
            records: self.records.values().cloned().collect(),
        }
    }

    fn ensure_name_free(&self, name: &str, owner: Option<DriveTypeId>) -> Result<(), StorageError> {
        let taken = self
            .records
            .values()
            .any(|record| record.name == name && Some(record.id) != owner);
        if taken {
            return Err(StorageError::conflict(format!(
                "drive type {name} already exists"
            )));
        }
        Ok(())
    }

    pub(crate) fn insert(
        &mut self,
        attributes: &DriveTypeAttributes,
        now: DateTime<Utc>,
    ) -> Result<DriveType, StorageError> {
        self.ensure_name_free(&attributes.name, None)?;

        self.next_id += 1;
        let id = DriveTypeId::new(self.next_id);
        let record = DriveType {
            id,
            name: attributes.name.clone(),
            drive_type: attributes.drive_type.clone(),
            size_gb: attributes.size_gb,
            rpm: attributes.rpm.clone(),
            capabilities: attributes.capabilities.clone(),
            visible: attributes.visible,
            created_at: now,
            updated_at: None,
        };

        self.records.insert(id, record.clone());
        Ok(record)
    }

    pub(crate) fn get(&self, id: DriveTypeId) -> Result<DriveType, StorageError> {
        self.records.get(&id).cloned().ok_or_else(|| not_found(id))
    }

    pub(crate) fn get_by_name(&self, name: &str) -> Result<DriveType, StorageError> {
        self.records
            .values()
            .find(|record| record.name == name)
            .cloned()
            .ok_or_else(|| StorageError::not_found(format!("drive type {name} could not be found")))
    }

    pub(crate) fn update(
        &mut self,
        id: DriveTypeId,
        changes: &DriveTypeChanges,
        now: DateTime<Utc>,
    ) -> Result<DriveType, StorageError> {
        if !self.records.contains_key(&id) {
            return Err(not_found(id));
        }
        if let Some(name) = changes.name.as_deref() {
            self.ensure_name_free(name, Some(id))?;
        }

        let record = self.records.get_mut(&id).ok_or_else(|| not_found(id))?;
        if let Some(name) = &changes.name {
            record.name = name.clone();
        }
        if let Some(drive_type) = &changes.drive_type {
            record.drive_type = drive_type.clone();
        }
        if let Some(size_gb) = changes.size_gb {
            record.size_gb = size_gb;
        }
        if let Some(rpm) = &changes.rpm {
            record.rpm = rpm.clone();
        }
        if let Some(capabilities) = &changes.capabilities {
            record.capabilities = capabilities.clone();
        }
        if let Some(visible) = changes.visible {
            record.visible = visible;
        }
        record.updated_at = Some(now);

        Ok(record.clone())
    }

    pub(crate) fn destroy(&mut self, id: DriveTypeId) -> Result<(), StorageError> {
        self.records.remove(&id).map(|_| ()).ok_or_else(|| not_found(id))
    }

    /// Records with the given visibility, ordered by id
    pub(crate) fn list_by_visibility(&self, visible: bool) -> Vec<DriveType> {
        self.records
            .values()
            .filter(|record| record.visible == visible)
            .cloned()
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }
}
