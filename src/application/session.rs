// src/application/session.rs
use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::DomainError;

#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Active login, persisted between invocations so the dashboard commands
/// stay unlocked until `logout`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
}

/// Storage port for the session. An unreadable session degrades to
/// "not logged in".
pub trait SessionStore {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

impl<S: SessionStore> SessionStore for &S {
    fn load(&self) -> Option<Session> {
        (**self).load()
    }

    fn save(&self, session: &Session) -> Result<()> {
        (**self).save(session)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}

/// Login gate in front of the dashboard commands. Credentials are accepted
/// when both fields are non-empty after trimming; there is no user database.
pub struct SessionGate<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> SessionGate<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn login(&self, credentials: &Credentials) -> Result<Session, DomainError> {
        let username = credentials.username.trim();
        let password = credentials.password.trim();
        if username.is_empty() || password.is_empty() {
            debug!("Rejected login with empty credentials");
            return Err(DomainError::InvalidCredentials);
        }
        let session = Session {
            username: username.to_string(),
        };
        self.store
            .save(&session)
            .map_err(|e| DomainError::Store(e.to_string()))?;
        info!(username = %session.username, "Logged in");
        Ok(session)
    }

    /// Drop the stored session. Idempotent.
    pub fn logout(&self) -> Result<(), DomainError> {
        self.store
            .clear()
            .map_err(|e| DomainError::Store(e.to_string()))?;
        info!("Logged out");
        Ok(())
    }

    pub fn current(&self) -> Option<Session> {
        self.store.load()
    }

    /// Route guard for the dashboard commands.
    pub fn require_login(&self) -> Result<Session, DomainError> {
        self.current().ok_or(DomainError::NotLoggedIn)
    }
}
