// SPDX-License-Identifier: GPL-3.0-only

//! Request-scoped caller context
//!
//! Every catalog operation receives a `RequestContext`. The catalog never
//! interprets it; it is handed to the store untouched, and its request id is
//! attached to log events so a single request can be followed end to end.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity and tracing information for one catalog request
///
/// Stores may use the identity fields for authorization or tenancy scoping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// Unique id of this request, used to correlate log events
    pub request_id: Uuid,

    /// Calling user, if known
    pub user_id: Option<String>,

    /// Project (tenant) the request is scoped to, if any
    pub project_id: Option<String>,

    /// Whether the caller holds administrative rights
    pub is_admin: bool,
}

impl RequestContext {
    /// Create an anonymous, non-admin context with a fresh request id
    pub fn new() -> Self {
        Self {
            request_id: Uuid::new_v4(),
            user_id: None,
            project_id: None,
            is_admin: false,
        }
    }

    /// Create a context with full administrative rights
    pub fn admin() -> Self {
        Self {
            is_admin: true,
            ..Self::new()
        }
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}
