//! Single-user credential service.
//!
//! Wraps a [`RecordStore`] to keep exactly one credential record under a
//! fixed key. This is a demo: the password is stored and compared in plain
//! text on purpose, there is no hashing and no multi-user support.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::{RecordStore, Result};

/// Fixed singleton key the credential record lives under
const USER_KEY: &str = "currentUser";

/// The locally stored user identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Saves, loads and validates the single local credential record.
///
/// The store handle is injected at construction; the service owns the
/// record by key, never by in-memory reference.
pub struct UserService<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> UserService<S> {
    /// Creates a service backed by the given record store
    pub fn new(store: S) -> Self {
        UserService { store }
    }

    /// Serializes `user` and writes it under the singleton key, overwriting
    /// any prior record.
    ///
    /// An encode failure is logged and dropped rather than surfaced; only a
    /// store-level write failure propagates to the caller.
    pub fn save_user(&self, user: &User) -> Result<()> {
        let encoded = match serde_json::to_vec(user) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Failed to encode user record, dropping save: {}", e);
                return Ok(());
            }
        };

        self.store.put(USER_KEY, &encoded)?;
        info!("User saved: {}", user.email);
        Ok(())
    }

    /// Reads and deserializes the stored credential record.
    ///
    /// Returns `None` when no record exists or when the stored data fails
    /// to decode; corrupt data is treated as absence, not as an error.
    pub fn get_user(&self) -> Option<User> {
        let bytes = match self.store.get(USER_KEY) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(e) => {
                warn!("Failed to read user record: {}", e);
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Stored user record failed to decode, treating as absent: {}", e);
                None
            }
        }
    }

    /// True iff a stored credential exists and both email and password
    /// match it exactly (case-sensitive, plain-text comparison)
    pub fn is_valid_login(&self, email: &str, password: &str) -> bool {
        match self.get_user() {
            Some(user) => {
                debug!("Checking login attempt for {}", email);
                user.email == email && user.password == password
            }
            None => false,
        }
    }

    /// Deletes the stored credential record; a no-op when absent
    pub fn clear_user(&self) -> Result<()> {
        self.store.delete(USER_KEY)?;
        info!("User record cleared");
        Ok(())
    }
}
