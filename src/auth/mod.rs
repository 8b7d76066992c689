use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{PoisonError, RwLock};
use uuid::Uuid;

/// Role that unlocks the admin panel
pub const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub role: String,
    pub full_name: Option<String>,
}

impl Profile {
    pub fn new(id: Uuid, role: impl Into<String>) -> Self {
        Self {
            id,
            role: role.into(),
            full_name: None,
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.role == role
    }
}

/// What the navigation guard needs to know about the signed-in user.
///
/// Sign-in, tokens and profile loading belong to the hosted auth provider;
/// this boundary only reports the outcome.
pub trait SessionProvider: Send + Sync {
    fn is_authenticated(&self) -> bool;

    fn profile(&self) -> Option<Profile>;
}

#[derive(Debug, Clone, Default)]
struct SessionState {
    user: Option<User>,
    profile: Option<Profile>,
    signed_in_at: Option<DateTime<Utc>>,
}

/// In-memory session, updated by whoever talks to the auth provider
#[derive(Debug, Default)]
pub struct AuthSession {
    state: RwLock<SessionState>,
}

impl AuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signed_in(user: User, profile: Option<Profile>) -> Self {
        let session = Self::new();
        session.set_user_and_profile(Some(user), profile);
        session
    }

    /// Authenticated exactly when a user is present
    pub fn set_user_and_profile(&self, user: Option<User>, profile: Option<Profile>) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.signed_in_at = user.as_ref().map(|_| Utc::now());
        state.user = user;
        state.profile = profile;
        tracing::debug!(
            "Session updated: authenticated={}, role={:?}",
            state.user.is_some(),
            state.profile.as_ref().map(|p| p.role.as_str())
        );
    }

    pub fn clear(&self) {
        self.set_user_and_profile(None, None);
    }

    pub fn user(&self) -> Option<User> {
        self.state.read().unwrap_or_else(PoisonError::into_inner).user.clone()
    }

    pub fn signed_in_at(&self) -> Option<DateTime<Utc>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner).signed_in_at
    }
}

impl SessionProvider for AuthSession {
    fn is_authenticated(&self) -> bool {
        self.state.read().unwrap_or_else(PoisonError::into_inner).user.is_some()
    }

    fn profile(&self) -> Option<Profile> {
        self.state.read().unwrap_or_else(PoisonError::into_inner).profile.clone()
    }
}
