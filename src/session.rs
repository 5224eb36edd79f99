use anyhow::Result;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

use crate::config::AppConfig;
use crate::domain::employee::Role;

/// The authenticated identity for this process lifetime. Written once at
/// login, read by every screen, cleared at logout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub employee_id: String,
    pub name: String,
    pub role: Role,
    pub auth_token: String,
}

/// Fixed-key on-disk shape. The key names mirror the client-storage keys the
/// console has always persisted its identity under.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    #[serde(rename = "authToken")]
    auth_token: String,
    #[serde(rename = "userName")]
    user_name: String,
    #[serde(rename = "userRole")]
    user_role: String,
    #[serde(rename = "employeeId")]
    employee_id: String,
}

/// Holds the current identity and mirrors it to a small JSON file so a
/// restarted console picks up where it left off. Injected explicitly into
/// each screen via context; there is no ambient global lookup.
pub struct SessionStore {
    current: RwLock<Option<SessionUser>>,
    path: Option<PathBuf>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Store backed by the platform config directory. Falls back to
    /// memory-only when no config directory can be resolved.
    pub fn new() -> Self {
        let path = AppConfig::data_dir().ok().map(|dir| dir.join("session.json"));
        Self {
            current: RwLock::new(None),
            path,
        }
    }

    /// Memory-only store, used by tests.
    pub fn in_memory() -> Self {
        Self {
            current: RwLock::new(None),
            path: None,
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            current: RwLock::new(None),
            path: Some(path),
        }
    }

    pub fn current(&self) -> Option<SessionUser> {
        self.current.read().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.read().is_some()
    }

    /// Records the identity for this session and persists it. A persistence
    /// failure is logged and otherwise ignored: the in-memory session is
    /// already usable.
    pub fn login(&self, user: SessionUser) {
        if let Err(e) = self.persist(&user) {
            warn!("Failed to persist session: {e}");
        }
        *self.current.write() = Some(user);
    }

    /// Clears the identity and removes the persisted copy.
    pub fn logout(&self) {
        *self.current.write() = None;
        if let Some(path) = &self.path {
            if path.exists() {
                if let Err(e) = std::fs::remove_file(path) {
                    warn!("Failed to clear persisted session: {e}");
                }
            }
        }
    }

    /// Restores a previously persisted identity, if any, and makes it
    /// current.
    pub fn restore(&self) -> Option<SessionUser> {
        let path = self.path.as_ref()?;
        let content = std::fs::read_to_string(path).ok()?;
        let persisted: PersistedSession = serde_json::from_str(&content).ok()?;

        let user = SessionUser {
            employee_id: persisted.employee_id,
            name: persisted.user_name,
            role: Role::parse(Some(&persisted.user_role)),
            auth_token: persisted.auth_token,
        };
        *self.current.write() = Some(user.clone());
        Some(user)
    }

    fn persist(&self, user: &SessionUser) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let persisted = PersistedSession {
            auth_token: user.auth_token.clone(),
            user_name: user.name.clone(),
            user_role: user.role.as_str().to_string(),
            employee_id: user.employee_id.clone(),
        };
        std::fs::write(path, serde_json::to_string_pretty(&persisted)?)?;
        Ok(())
    }
}
