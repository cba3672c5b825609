// SPDX-License-Identifier: GPL-3.0-only

//! Partial updates
//!
//! `DriveTypeUpdate` is what a caller asks for; `DriveTypeChanges` is what a
//! store is told to apply. The conversion between them drops every field that
//! was not supplied and every text field supplied as an empty string, so an
//! update can never blank out a field.

use serde::{Deserialize, Serialize};

use crate::Rpm;

/// Sparse update request; `None` means "not supplied"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveTypeUpdate {
    #[serde(rename = "type", default)]
    pub drive_type: Option<String>,
    #[serde(default)]
    pub size_gb: Option<u64>,
    #[serde(default)]
    pub rpm: Option<Rpm>,
    #[serde(default)]
    pub capabilities: Option<String>,
    #[serde(default)]
    pub visible: Option<bool>,
}

impl DriveTypeUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drive_type(mut self, drive_type: impl Into<String>) -> Self {
        self.drive_type = Some(drive_type.into());
        self
    }

    pub fn size_gb(mut self, size_gb: u64) -> Self {
        self.size_gb = Some(size_gb);
        self
    }

    pub fn rpm(mut self, rpm: impl Into<Rpm>) -> Self {
        self.rpm = Some(rpm.into());
        self
    }

    pub fn capabilities(mut self, capabilities: impl Into<String>) -> Self {
        self.capabilities = Some(capabilities.into());
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    /// Apply the merge policy: keep supplied values, drop empty text
    ///
    /// `size_gb = 0` and `visible = false` are real values and are kept.
    pub fn into_changes(self) -> DriveTypeChanges {
        DriveTypeChanges {
            name: None,
            drive_type: self.drive_type.filter(|value| !value.is_empty()),
            size_gb: self.size_gb,
            rpm: self.rpm.filter(|value| !value.is_empty()),
            capabilities: self.capabilities.filter(|value| !value.is_empty()),
            visible: self.visible,
        }
    }
}

/// Field changes a store applies to an existing record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveTypeChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub drive_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_gb: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpm: Option<Rpm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

impl DriveTypeChanges {
    /// A change set touching only the record name
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.drive_type.is_none()
            && self.size_gb.is_none()
            && self.rpm.is_none()
            && self.capabilities.is_none()
            && self.visible.is_none()
    }
}
