// SPDX-License-Identifier: GPL-3.0-only

//! Reference drive type stores
//!
//! Production deployments bring their own `DriveTypeStore`; these two back
//! the command-line tool and the tests.

pub mod json_file;
pub mod memory;
mod table;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
