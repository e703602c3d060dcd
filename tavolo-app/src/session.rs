//! Session store
//!
//! Explicit, file-backed session object with a defined read/write
//! lifecycle: loaded once at startup, written on login, removed on
//! logout or expiry. Injected into the bridge instead of being read
//! ad hoc by whichever page needs it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared::models::UserInfo;
use shared::types::Timestamp;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Current Unix time in seconds
pub fn unix_now() -> Timestamp {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as Timestamp)
        .unwrap_or_default()
}

/// An authenticated user session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    pub token: String,
    pub user: UserInfo,
    pub logged_in_at: Timestamp,
    pub expires_at: Option<Timestamp>,
}

impl UserSession {
    pub fn new(token: impl Into<String>, user: UserInfo, expires_at: Option<Timestamp>) -> Self {
        Self {
            token: token.into(),
            user,
            logged_in_at: unix_now(),
            expires_at,
        }
    }

    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expires_at.is_some_and(|expires_at| now > expires_at)
    }
}

/// File-backed store for the current session
///
/// Path: `{data_dir}/session.json`
#[derive(Debug)]
pub struct SessionStore {
    file_path: PathBuf,
    current: Option<UserSession>,
}

impl SessionStore {
    /// Create an empty store rooted at `data_dir`
    pub fn new(data_dir: &Path) -> Self {
        Self {
            file_path: data_dir.join("session.json"),
            current: None,
        }
    }

    /// Load the persisted session, dropping it if expired
    pub fn load(data_dir: &Path) -> Result<Self, SessionError> {
        let mut store = Self::new(data_dir);

        if !store.file_path.exists() {
            return Ok(store);
        }

        let content = std::fs::read_to_string(&store.file_path)?;
        let session: UserSession = serde_json::from_str(&content)?;

        if session.is_expired(unix_now()) {
            let _ = std::fs::remove_file(&store.file_path);
            tracing::info!(username = %session.user.username, "cached session expired, cleared");
            return Ok(store);
        }

        tracing::info!(username = %session.user.username, "loaded cached session");
        store.current = Some(session);
        Ok(store)
    }

    /// The active session, if any
    pub fn current(&self) -> Option<&UserSession> {
        self.current.as_ref()
    }

    /// The active bearer token, if any
    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.token.as_str())
    }

    /// Install and persist a session (after a successful login)
    pub fn set(&mut self, session: UserSession) -> Result<(), SessionError> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&session)?;
        std::fs::write(&self.file_path, content)?;
        tracing::debug!(username = %session.user.username, "session saved");
        self.current = Some(session);
        Ok(())
    }

    /// Remove the session from memory and disk (logout)
    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.current = None;
        if self.file_path.exists() {
            std::fs::remove_file(&self.file_path)?;
            tracing::debug!("session cleared");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use shared::models::UserRole;

    use super::*;

    fn user() -> UserInfo {
        UserInfo {
            id: "u1".to_string(),
            username: "ada".to_string(),
            display_name: None,
            email: None,
            role: UserRole::Diner,
        }
    }

    #[test]
    fn session_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SessionStore::new(dir.path());
        store
            .set(UserSession::new("tok-1", user(), None))
            .unwrap();

        let reloaded = SessionStore::load(dir.path()).unwrap();
        assert_eq!(reloaded.token(), Some("tok-1"));
        assert_eq!(reloaded.current().unwrap().user.username, "ada");
    }

    #[test]
    fn expired_session_is_dropped_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SessionStore::new(dir.path());
        let mut session = UserSession::new("tok-1", user(), Some(1));
        session.logged_in_at = 0;
        store.set(session).unwrap();

        let reloaded = SessionStore::load(dir.path()).unwrap();
        assert!(reloaded.current().is_none());
    }

    #[test]
    fn clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SessionStore::new(dir.path());
        store
            .set(UserSession::new("tok-1", user(), None))
            .unwrap();
        store.clear().unwrap();

        assert!(store.current().is_none());
        let reloaded = SessionStore::load(dir.path()).unwrap();
        assert!(reloaded.current().is_none());
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::load(dir.path()).unwrap();
        assert!(store.current().is_none());
    }
}
