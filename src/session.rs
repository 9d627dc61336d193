//! Current user session
//!
//! The session is an explicit handle that callers pass into the flows needing
//! it. Clones share the same underlying state, so one handle can be held by a
//! UI layer while another is passed to `logout`.

use log::debug;
use std::sync::{Arc, PoisonError, RwLock};

/// Data of an authenticated user, cached locally while logged in
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SessionData {
    pub user_id: String,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub client_token: Option<String>,
}

impl SessionData {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Default::default()
        }
    }
}

impl std::fmt::Debug for SessionData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionData")
            .field("user_id", &self.user_id)
            .field("access_token", &self.access_token.as_ref().map(|_| "***"))
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "***"))
            .field("client_token", &self.client_token.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Shared handle to the current session
///
/// Cheap to clone (uses Arc internally). Writes are exclusive.
#[derive(Clone, Debug, Default)]
pub struct Session {
    inner: Arc<RwLock<Option<SessionData>>>,
}

impl Session {
    /// Create an empty (logged out) session
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session that is already logged in
    pub fn signed_in(data: SessionData) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(data))),
        }
    }

    /// Store the data of a freshly authenticated user
    pub fn sign_in(&self, data: SessionData) {
        debug!("sign_in() called for user {}", data.user_id);
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = Some(data);
    }

    pub fn user_id(&self) -> Option<String> {
        self.snapshot().map(|data| data.user_id)
    }

    pub fn is_logged_in(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Copy of the current session data
    pub fn snapshot(&self) -> Option<SessionData> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drop the user id and all cached tokens
    ///
    /// Idempotent: returns whether there was anything to clear.
    pub fn clear(&self) -> bool {
        let cleared = self
            .inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .is_some();
        debug!("clear() called: cleared={cleared}");
        cleared
    }
}
