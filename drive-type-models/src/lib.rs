// SPDX-License-Identifier: GPL-3.0-only

//! Canonical domain models for the drive type catalog
//!
//! This crate defines the single source of truth for drive type records and
//! the request values that flow towards a store:
//!
//! - **drive-type-contracts**: the store trait is expressed in these types
//! - **drive-type-catalog**: builds these values and hands them to a store
//!
//! ## Request flow
//!
//! - `NewDriveType` → create request, resolved into `DriveTypeAttributes`
//! - `DriveTypeUpdate` → sparse update request, filtered into `DriveTypeChanges`
//! - `DriveType` → the persisted record returned by every store call

pub mod context;
pub mod drive_type;
pub mod rpm;
pub mod update;

pub use context::RequestContext;
pub use drive_type::{DriveType, DriveTypeAttributes, DriveTypeId, NewDriveType};
pub use rpm::Rpm;
pub use update::{DriveTypeChanges, DriveTypeUpdate};
