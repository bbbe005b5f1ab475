//! Shop status commands.

use std::io::Write;

use openclose_core::ShopStatus;

use super::{App, format_timestamp};
use crate::error::CliError;

/// Print the current status and when the inventory last changed.
///
/// # Errors
///
/// Returns `CliError::Io` if output cannot be written.
pub fn status(app: &App, out: &mut impl Write) -> Result<(), CliError> {
    writeln!(out, "Shop is {}", app.inventory.status().label())?;
    writeln!(
        out,
        "Last updated: {}",
        format_timestamp(app.inventory.last_updated())
    )?;
    Ok(())
}

/// Flip the shop between open and closed. Admin only.
///
/// # Errors
///
/// Returns `CliError::NotAuthenticated` without an admin session, or
/// `CliError::Inventory` if the new status cannot be saved.
pub fn toggle(app: &mut App, out: &mut impl Write) -> Result<ShopStatus, CliError> {
    app.require_admin()?;
    let status = app.inventory.toggle_status()?;
    writeln!(out, "Shop is {}", status.label())?;
    Ok(status)
}

/// Touch the inventory's last-updated time.
///
/// # Errors
///
/// Returns `CliError::Io` if output cannot be written.
pub fn refresh(app: &mut App, out: &mut impl Write) -> Result<(), CliError> {
    app.inventory.refresh_data();
    writeln!(
        out,
        "Last updated: {}",
        format_timestamp(app.inventory.last_updated())
    )?;
    Ok(())
}
