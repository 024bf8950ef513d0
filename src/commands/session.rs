//! Session commands: login, status, logout.
//!
//! Authentication itself is the backend's job; this side only forwards
//! credentials, keeps the returned token in the OS keyring and caches the
//! employee name for listing defaults.

use crate::api::leave::LeaveClient;
use crate::config::Config;
use crate::draft::store::with_draft_lock;
use crate::platform;
use crate::session::{self, Session};
use anyhow::Result;

pub fn login(config: &Config, email: &str, password: &str) -> Result<()> {
    if !email.contains('@') {
        anyhow::bail!("'{}' does not look like an email address", email);
    }
    if password.is_empty() {
        anyhow::bail!("Password must not be empty");
    }

    let client = LeaveClient::new(&config.api.leave_url);
    let login = client.login(email, password)?;

    session::store_session_token(&login.id)?;
    let active = Session::new(login.id);

    // Best-effort profile fetch; login itself already succeeded
    match client.get_user(&active) {
        Ok(profile) => {
            let (lock_path, draft_path) =
                platform::draft_paths(config.state.state_dir_override.as_ref())?;
            with_draft_lock(&lock_path, &draft_path, |state| {
                state.logged_in_employee = Some(profile.name.clone());
                Ok(())
            })?;
            println!("✓ Logged in as {}", profile.name);
        }
        Err(e) => {
            println!("✓ Logged in");
            eprintln!("⚠ Could not fetch profile: {}", e);
        }
    }

    Ok(())
}

pub fn status() -> Result<()> {
    match session::get_session_token() {
        Ok(_) => println!("Logged in (token stored in system keyring)."),
        Err(_) => println!("Not logged in."),
    }
    Ok(())
}

pub fn logout() -> Result<()> {
    session::delete_session_token()?;
    println!("✓ Logged out");
    Ok(())
}
