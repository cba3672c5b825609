// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Rpm;

/// Store-assigned identifier of a drive type record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DriveTypeId(u64);

impl DriveTypeId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for DriveTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for DriveTypeId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// A persisted drive type record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveType {
    pub id: DriveTypeId,

    /// Display name, unique within a store
    pub name: String,

    /// Drive class label (e.g. "SATA", "SAS", "SSD")
    #[serde(rename = "type")]
    pub drive_type: String,

    /// Capacity in gigabytes
    pub size_gb: u64,

    pub rpm: Rpm,

    /// Free-form capability tag; empty means none
    #[serde(default)]
    pub capabilities: String,

    /// Hidden records are skipped by the default listing
    pub visible: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Complete attribute set handed to a store when inserting a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveTypeAttributes {
    pub name: String,
    #[serde(rename = "type")]
    pub drive_type: String,
    pub size_gb: u64,
    pub rpm: Rpm,
    pub capabilities: String,
    pub visible: bool,
}

/// Request to create a drive type
///
/// `name` is optional: when absent the catalog derives one from the other
/// attributes and the configured name templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDriveType {
    #[serde(rename = "type")]
    pub drive_type: String,
    pub size_gb: u64,
    pub rpm: Rpm,
    #[serde(default)]
    pub capabilities: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub name: Option<String>,
}

fn default_visible() -> bool {
    true
}

impl NewDriveType {
    pub fn new(drive_type: impl Into<String>, size_gb: u64, rpm: impl Into<Rpm>) -> Self {
        Self {
            drive_type: drive_type.into(),
            size_gb,
            rpm: rpm.into(),
            capabilities: String::new(),
            visible: true,
            name: None,
        }
    }

    pub fn with_capabilities(mut self, capabilities: impl Into<String>) -> Self {
        self.capabilities = capabilities.into();
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Resolve into the attribute set a store persists, using `name` as the
    /// record name
    pub fn into_attributes(self, name: String) -> DriveTypeAttributes {
        DriveTypeAttributes {
            name,
            drive_type: self.drive_type,
            size_gb: self.size_gb,
            rpm: self.rpm,
            capabilities: self.capabilities,
            visible: self.visible,
        }
    }
}
