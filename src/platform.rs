//! Cross-platform utilities for directory resolution and file operations.
//!
//! Provides OS-agnostic state directory resolution with permission
//! fallback chains to handle various deployment scenarios.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the state directory with cross-platform fallback chain.
///
/// Priority order:
/// 1. Explicit override (for testing/CI)
/// 2. Home directory (~/.permiso-cli)
/// 3. Platform-specific data directory (XDG on Linux, AppData on Windows)
/// 4. Current working directory (last resort)
///
/// Each directory is validated for write access before being selected.
pub fn get_state_dir(override_dir: Option<&PathBuf>) -> Result<PathBuf> {
    // Priority 1: Explicit override (testing/CI)
    if let Some(dir) = override_dir {
        ensure_writable(dir)?;
        return Ok(dir.clone());
    }

    // Priority 2: Home directory (traditional Unix-style)
    if let Some(home) = home::home_dir() {
        let dir = home.join(".permiso-cli");
        if ensure_writable(&dir).is_ok() {
            return Ok(dir);
        }
        eprintln!(
            "Warning: Cannot write to {}. Trying fallback locations.",
            dir.display()
        );
    }

    // Priority 3: Platform-specific data directory
    if let Some(data) = dirs::data_local_dir() {
        let dir = data.join("permiso-cli");
        if ensure_writable(&dir).is_ok() {
            return Ok(dir);
        }
    }

    // Priority 4: Current working directory (absolute last resort)
    let dir = PathBuf::from(".permiso-cli");
    ensure_writable(&dir).context(
        "Cannot create state directory in any location. \
         Check file permissions or set state_dir_override in config.",
    )?;
    Ok(dir)
}

/// Ensure a directory exists and is writable by the current user.
pub fn ensure_writable(dir: &PathBuf) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    // Test write access with a temporary file
    let test_path = dir.join(".write_test");
    fs::write(&test_path, b"test")
        .with_context(|| format!("Directory {} is not writable", dir.display()))?;

    // Cleanup test file, ignore errors (file might be held by antivirus on Windows)
    let _ = fs::remove_file(&test_path);

    Ok(())
}

/// Get the draft file paths (lock and draft JSON) for the given config.
///
/// This is the canonical way to get draft paths, respecting config overrides.
pub fn draft_paths(state_dir_override: Option<&PathBuf>) -> Result<(PathBuf, PathBuf)> {
    let state_dir = get_state_dir(state_dir_override)?;
    Ok((state_dir.join("draft.lock"), state_dir.join("draft.json")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_override_dir_takes_priority() {
        let temp = TempDir::new().unwrap();
        let override_path = temp.path().to_path_buf();

        let result = get_state_dir(Some(&override_path));
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), override_path);
    }

    #[test]
    fn test_ensure_writable_creates_dir() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a").join("b").join("c");

        let result = ensure_writable(&nested);
        assert!(result.is_ok());
        assert!(nested.exists());
    }

    #[test]
    fn test_draft_paths_with_override() {
        let temp = TempDir::new().unwrap();
        let override_path = temp.path().to_path_buf();

        let (lock, draft) = draft_paths(Some(&override_path)).unwrap();
        assert_eq!(lock, override_path.join("draft.lock"));
        assert_eq!(draft, override_path.join("draft.json"));
    }
}
