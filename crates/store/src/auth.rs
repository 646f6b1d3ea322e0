//! Auth session store.
//!
//! A two-state machine: anonymous (initial) or authenticated with a role
//! and display identity. Login trusts the caller completely; no credential
//! store is consulted anywhere in the system. The session is mirrored to
//! durable storage so a restart rehydrates it, and a malformed persisted
//! record silently falls back to anonymous.

use fluxtrade_core::UserRole;

use crate::models::AuthSession;
use crate::models::session::AuthRecord;
use crate::storage::{self, SharedStorage, keys};
use crate::subscribe::{ChangeKind, Subscribers, Subscription};

/// Owned auth state mirrored onto durable storage.
pub struct AuthStore {
    storage: SharedStorage,
    session: Option<AuthSession>,
    subscribers: Subscribers,
}

impl AuthStore {
    /// Create the store, rehydrating any persisted session.
    #[must_use]
    pub fn new(storage: SharedStorage) -> Self {
        let session = storage::load_json(storage.as_ref(), keys::AUTH)
            .and_then(|value| match serde_json::from_value::<AuthRecord>(value) {
                Ok(record) => record.into_session(),
                Err(err) => {
                    tracing::warn!(error = %err, "stored auth record has unexpected shape, starting anonymous");
                    None
                }
            });

        Self {
            storage,
            session,
            subscribers: Subscribers::default(),
        }
    }

    /// Whether a session is active.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// The active session's role, if any.
    #[must_use]
    pub fn role(&self) -> Option<UserRole> {
        self.session.as_ref().map(|session| session.role)
    }

    /// The active session, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&AuthSession> {
        self.session.as_ref()
    }

    /// Transition to authenticated with the supplied role and identity.
    ///
    /// The role and identity are taken on trust. Calling while already
    /// authenticated replaces the session.
    pub fn login(&mut self, role: UserRole, name: Option<String>, email: Option<String>) {
        let session = AuthSession { role, name, email };
        tracing::info!(%role, "login");

        if let Err(err) =
            storage::save_json(self.storage.as_ref(), keys::AUTH, &AuthRecord::from(&session))
        {
            tracing::error!(error = %err, "failed to persist auth session");
        }

        self.session = Some(session);
        self.subscribers.notify(ChangeKind::Auth);
    }

    /// Transition to anonymous and clear the persisted session.
    ///
    /// Also reachable from anonymous, where it is a no-op.
    pub fn logout(&mut self) {
        if self.session.is_none() {
            return;
        }
        tracing::info!("logout");

        if let Err(err) = self.storage.remove(keys::AUTH) {
            tracing::error!(error = %err, "failed to clear persisted auth session");
        }

        self.session = None;
        self.subscribers.notify(ChangeKind::Auth);
    }

    /// Register a change listener.
    pub fn subscribe(&mut self, listener: impl Fn(ChangeKind) + 'static) -> Subscription {
        self.subscribers.subscribe(listener)
    }

    /// Remove a change listener.
    pub fn unsubscribe(&mut self, subscription: Subscription) {
        self.subscribers.unsubscribe(subscription);
    }
}

/// Derive a display name from an email address.
///
/// Title-cases the tokens of the local part ("mia.bennett@example.test"
/// becomes "Mia Bennett"); an empty email falls back to "Shopper".
#[must_use]
pub fn derive_display_name(email: &str) -> String {
    if email.is_empty() {
        return "Shopper".to_string();
    }

    let local_part = email.split('@').next().unwrap_or(email);
    let tokens: Vec<String> = local_part
        .split(['.', '_', '-', ' '])
        .filter(|token| !token.trim().is_empty())
        .map(|token| {
            let mut chars = token.trim().chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
            })
        })
        .collect();

    if tokens.is_empty() {
        local_part.to_string()
    } else {
        tokens.join(" ")
    }
}
