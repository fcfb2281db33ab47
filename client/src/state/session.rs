//! Admin session: the backend-issued bearer token and where it is kept.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is the only state shared across pages. The login page writes it,
//! every protected page reads it, and logout clears it. Access goes through
//! `Session` so pages never touch `localStorage` directly and tests can swap
//! in `MemoryTokenStore`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex};

/// `localStorage` key holding the session token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Persistent home for the session token.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Browser `localStorage` backed store. No-op during server rendering.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStore;

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        crate::util::storage::load_item(TOKEN_STORAGE_KEY)
    }

    fn save(&self, token: &str) {
        crate::util::storage::save_item(TOKEN_STORAGE_KEY, token);
    }

    fn clear(&self) {
        crate::util::storage::remove_item(TOKEN_STORAGE_KEY);
    }
}

/// In-process store for tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self { slot: Arc::new(Mutex::new(Some(token.to_owned()))) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    fn save(&self, token: &str) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(token.to_owned());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}

/// Error returned by [`Session::sign_in`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("session token is empty")]
pub struct EmptyToken;

/// Handle to the session token. Cheap to clone; provided as Leptos context.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(LocalTokenStore)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").field("authenticated", &self.is_authenticated()).finish()
    }
}

impl Session {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self { store: Arc::new(store) }
    }

    /// Current token, if one is stored and non-blank.
    pub fn token(&self) -> Option<String> {
        self.store.load().filter(|t| !t.trim().is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Persist a freshly issued token.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyToken`] if `token` is blank; the stored token is left unchanged.
    pub fn sign_in(&self, token: &str) -> Result<(), EmptyToken> {
        let token = token.trim();
        if token.is_empty() {
            return Err(EmptyToken);
        }
        self.store.save(token);
        Ok(())
    }

    pub fn sign_out(&self) {
        self.store.clear();
    }
}

/// `Authorization` header value for authenticated requests.
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}
