//! Login, logout and identity commands.

use std::io::Write;

use super::App;
use crate::error::CliError;

/// Log in as the admin.
///
/// # Errors
///
/// Returns `CliError::InvalidCredentials` if the pair is rejected, or
/// `CliError::Session` if the session cannot be saved.
pub async fn login(
    app: &mut App,
    username: &str,
    password: &str,
    out: &mut impl Write,
) -> Result<(), CliError> {
    if !app.session.login(username, password).await? {
        return Err(CliError::InvalidCredentials);
    }
    writeln!(out, "Logged in as {username}")?;
    Ok(())
}

/// End the admin session. Safe to run when already logged out.
///
/// # Errors
///
/// Returns `CliError::Session` if the session record cannot be removed.
pub fn logout(app: &mut App) -> Result<(), CliError> {
    app.session.logout()?;
    Ok(())
}

/// Print who is logged in, if anyone.
///
/// # Errors
///
/// Returns `CliError::Io` if output cannot be written.
pub fn whoami(app: &App, out: &mut impl Write) -> Result<(), CliError> {
    match app.session.current_user() {
        Some(user) if user.is_admin => writeln!(out, "{} (admin)", user.username)?,
        Some(user) => writeln!(out, "{}", user.username)?,
        None => writeln!(out, "Not logged in")?,
    }
    Ok(())
}
