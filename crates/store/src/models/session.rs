//! Auth session records.
//!
//! The session is a simulation: the caller supplies role and identity and
//! no credential store is consulted. The persisted wire shape keeps the
//! legacy `isAuthenticated` flag so stale documents rehydrate cleanly.

use fluxtrade_core::UserRole;
use serde::{Deserialize, Serialize};

/// An authenticated session's role and display identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub role: UserRole,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Wire shape persisted under the `auth` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuthRecord {
    pub is_authenticated: bool,
    #[serde(default)]
    pub role: Option<UserRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl AuthRecord {
    /// Convert a rehydrated record into a session, if it represents one.
    pub fn into_session(self) -> Option<AuthSession> {
        if !self.is_authenticated {
            return None;
        }
        Some(AuthSession {
            role: self.role?,
            name: self.name,
            email: self.email,
        })
    }
}

impl From<&AuthSession> for AuthRecord {
    fn from(session: &AuthSession) -> Self {
        Self {
            is_authenticated: true,
            role: Some(session.role),
            name: session.name.clone(),
            email: session.email.clone(),
        }
    }
}
