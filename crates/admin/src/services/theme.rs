//! Light/dark theme preference, persisted as a small JSON file.

use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

/// Errors reading or writing the theme file.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Theme file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Theme file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Color scheme of the admin screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ThemeFile {
    theme: Theme,
}

/// Read the saved theme; a missing file means the default theme.
///
/// # Errors
///
/// Returns error if the file exists but cannot be read or parsed.
#[instrument]
pub fn load(path: &Path) -> Result<Theme, ThemeError> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(serde_json::from_slice::<ThemeFile>(&bytes)?.theme),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("no saved theme, using default");
            Ok(Theme::default())
        }
        Err(e) => Err(e.into()),
    }
}

/// Persist the theme.
///
/// # Errors
///
/// Returns error if the file cannot be written.
#[instrument]
pub fn save(path: &Path, theme: Theme) -> Result<(), ThemeError> {
    let json = serde_json::to_vec_pretty(&ThemeFile { theme })?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Flip the saved theme and return the new one.
///
/// # Errors
///
/// Returns error if the file cannot be read or written.
pub fn toggle(path: &Path) -> Result<Theme, ThemeError> {
    let theme = load(path)?.toggled();
    save(path, theme)?;
    Ok(theme)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn scratch(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "backoffice-theme-{}-{name}.json",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        path
    }

    #[test]
    fn test_missing_file_is_light() {
        let path = scratch("missing");
        assert_eq!(load(&path).ok(), Some(Theme::Light));
    }

    #[test]
    fn test_save_then_toggle() {
        let path = scratch("toggle");
        save(&path, Theme::Dark).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(load(&path).ok(), Some(Theme::Dark));
        assert_eq!(toggle(&path).ok(), Some(Theme::Light));
        assert_eq!(load(&path).ok(), Some(Theme::Light));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let path = scratch("corrupt");
        std::fs::write(&path, b"dark").unwrap_or_else(|e| panic!("{e}"));
        assert!(matches!(load(&path), Err(ThemeError::Json(_))));
        let _ = std::fs::remove_file(&path);
    }
}
