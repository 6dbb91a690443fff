//! User confirmation prompts for destructive operations

use dialoguer::Confirm;

use crate::error::{Result, VraError};

/// Ask the user to confirm a destructive action, e.g. "delete pipeline 'x'".
///
/// `--confirm` bypasses the prompt. A declined prompt is a distinct error so
/// the command exits non-zero without calling the API.
pub fn confirm_destructive(action: &str, auto_confirm: bool) -> Result<()> {
    if auto_confirm {
        return Ok(());
    }

    let confirmed = Confirm::new()
        .with_prompt(format!("Really {}?", action))
        .default(false)
        .interact()
        .map_err(|e| VraError::Config(format!("Failed to read confirmation: {}", e)))?;

    if confirmed {
        Ok(())
    } else {
        Err(VraError::UserDeclined(action.to_string()))
    }
}
