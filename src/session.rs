//! Session context for authenticated API calls.
//!
//! The token returned by the login endpoint is held in the OS keyring and
//! handed to API clients as an explicit [`Session`] value. Nothing in the
//! core reads ambient global state to find credentials.

use anyhow::{Context, Result};
use keyring::Entry;

const SERVICE_SESSION: &str = "permiso-cli-session";

/// Explicit session context passed into API clients.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Load the stored session, if one exists.
    pub fn load() -> Result<Self> {
        let token = get_session_token()
            .context("Not logged in. Run 'permiso session login' first")?;
        Ok(Self { token })
    }
}

/// Store a credential in the system keyring
pub fn store_credential(service: &str, username: &str, password: &str) -> Result<()> {
    let entry = Entry::new(service, username).context("Failed to create keyring entry")?;

    entry
        .set_password(password)
        .context("Failed to store credential in keyring")?;

    Ok(())
}

/// Retrieve a credential from the system keyring
pub fn get_credential(service: &str, username: &str) -> Result<String> {
    let entry = Entry::new(service, username).context("Failed to create keyring entry")?;

    entry
        .get_password()
        .context("Failed to retrieve credential from keyring")
}

/// Delete a credential from the system keyring
pub fn delete_credential(service: &str, username: &str) -> Result<()> {
    let entry = Entry::new(service, username).context("Failed to create keyring entry")?;

    entry
        .delete_credential()
        .context("Failed to delete credential from keyring")?;

    Ok(())
}

/// Store the session token in the keyring
pub fn store_session_token(token: &str) -> Result<()> {
    store_credential(SERVICE_SESSION, "default", token)
}

/// Retrieve the session token from the keyring
pub fn get_session_token() -> Result<String> {
    get_credential(SERVICE_SESSION, "default")
}

/// Delete the session token from the keyring
pub fn delete_session_token() -> Result<()> {
    delete_credential(SERVICE_SESSION, "default")
}
