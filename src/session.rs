use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::access::Role;

pub const USER_ID_KEY: &str = "userId";
pub const ROLE_KEY: &str = "role";

/// Opaque identifier of a signed-in account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Current sign-in state, threaded explicitly through every flow instead of
/// read from ambient storage. Absence of `user_id` means guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: Option<UserId>,
    pub role: Role,
}

impl Session {
    pub const fn guest() -> Self {
        Self {
            user_id: None,
            role: Role::Guest,
        }
    }

    pub fn signed_in(user_id: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: Some(UserId(user_id.into())),
            role,
        }
    }

    /// Read the session from the key-value boundary, falling back to guest
    /// when either key is missing.
    pub fn load(store: &dyn SessionStore) -> Self {
        let role = Role::from_stored(store.get(ROLE_KEY).as_deref());
        Self {
            user_id: store.get(USER_ID_KEY).map(UserId),
            role,
        }
    }

    /// Identity precondition for actions that need the current user. Callers
    /// get an error to log and surface as they see fit.
    pub fn require_user(&self) -> Result<&UserId, SessionAbsent> {
        self.user_id.as_ref().ok_or(SessionAbsent)
    }
}

/// No signed-in user behind an action that requires one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no signed-in user")]
pub struct SessionAbsent;

/// Key-value contract of the session storage boundary. The core does not own
/// the storage; it only reads and writes through this capability.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn clear(&self);
}

/// Sign-in is one of the two writer paths into the store.
pub fn sign_in(store: &dyn SessionStore, user_id: &str, role: Role) {
    store.set(USER_ID_KEY, user_id);
    store.set(ROLE_KEY, role.label());
    tracing::info!(role = role.label(), "session established");
}

/// Sign-out clears the whole store, matching the reference client.
pub fn sign_out(store: &dyn SessionStore) {
    store.clear();
    tracing::info!("session cleared");
}

/// Process-local store for the demo binary and tests.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    values: Mutex<HashMap<String, String>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .expect("session store poisoned")
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .expect("session store poisoned")
            .insert(key.to_string(), value.to_string());
    }

    fn clear(&self) {
        self.values.lock().expect("session store poisoned").clear();
    }
}
