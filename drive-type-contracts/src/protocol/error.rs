// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageErrorKind {
    /// No record matches the requested id or name
    NotFound,
    /// The change would break name uniqueness
    Conflict,
    /// The backing storage could not be reached
    Unavailable,
    /// Stored data is corrupt or could not be encoded
    Internal,
}

/// Failure reported by a drive type store
///
/// The catalog forwards these to its callers exactly as the store produced
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{kind:?}: {message}")]
pub struct StorageError {
    pub kind: StorageErrorKind,
    pub message: String,
}

impl StorageError {
    pub fn new(kind: StorageErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StorageErrorKind::NotFound, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StorageErrorKind::Conflict, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(StorageErrorKind::Unavailable, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StorageErrorKind::Internal, message)
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == StorageErrorKind::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_roundtrips() {
        let error = StorageError::conflict("drive type SATA_500GB_7200RPM already exists");
        let json = serde_json::to_string(&error).expect("serialize error");
        let parsed: StorageError = serde_json::from_str(&json).expect("deserialize error");
        assert_eq!(parsed, error);
    }

    #[test]
    fn kinds_serialize_in_snake_case() {
        let json = serde_json::to_string(&StorageErrorKind::NotFound).expect("serialize kind");
        assert_eq!(json, "\"not_found\"");
    }

    #[test]
    fn display_names_kind_and_message() {
        let error = StorageError::not_found("drive type 7 could not be found");
        assert!(error.is_not_found());
        assert_eq!(error.to_string(), "NotFound: drive type 7 could not be found");
    }
}
