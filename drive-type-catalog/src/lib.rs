// SPDX-License-Identifier: GPL-3.0-only

//! Drive type catalog
//!
//! Drive types are named descriptions of physical storage media (type, size,
//! rotational speed, capability tag, visibility). This library creates,
//! renames, updates, deletes and lists them through a pluggable
//! `DriveTypeStore`, deriving default names from two configurable templates.

pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod naming;
pub mod store;

pub use catalog::DriveTypeCatalog;
pub use config::CatalogConfig;
pub use error::{ConfigError, Result};
pub use naming::{
    DEFAULT_TEMPLATE_LONG, DEFAULT_TEMPLATE_SHORT, NameFormatter, NameTemplate, format_name,
};
pub use store::{JsonFileStore, MemoryStore};

// Re-export shared models and contracts
pub use drive_type_contracts::{DriveTypeStore, StorageError, StorageErrorKind};
pub use drive_type_models::*;
