//! Theme preference commands.

use backoffice_admin::AdminState;
use backoffice_admin::services::theme;

/// Print the saved theme.
///
/// # Errors
///
/// Returns error if the theme file exists but cannot be read.
pub fn show(state: &AdminState) -> Result<(), Box<dyn std::error::Error>> {
    let current = theme::load(&state.config().theme_file)?;
    tracing::info!(theme = ?current, "Current theme");
    Ok(())
}

/// Switch between light and dark.
///
/// # Errors
///
/// Returns error if the theme file cannot be read or written.
pub fn toggle(state: &AdminState) -> Result<(), Box<dyn std::error::Error>> {
    let next = theme::toggle(&state.config().theme_file)?;
    tracing::info!(theme = ?next, "Theme switched");
    Ok(())
}
