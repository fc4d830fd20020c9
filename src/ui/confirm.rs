//! User confirmation prompts for destructive operations

use std::io::{self, BufRead, Write};

use log::debug;

use crate::error::{IonosError, Result};

/// Ask the user to confirm an action, reading the answer from `input`
///
/// With `force` the prompt is skipped. Only `y`/`yes` (any case) confirms;
/// an empty line, EOF or any other answer is a [`IonosError::Declined`].
pub fn confirm_action(action: &str, force: bool, input: &mut dyn BufRead) -> Result<()> {
    if force {
        debug!("--force set, not asking before: {}", action);
        return Ok(());
    }

    eprint!("Warning: Are you sure you want to {}? [y/N]: ", action);
    let _ = io::stderr().flush();

    let mut answer = String::new();
    if input.read_line(&mut answer).is_err() {
        return Err(IonosError::Declined(action.to_string()));
    }

    if is_affirmative(&answer) {
        Ok(())
    } else {
        Err(IonosError::Declined(action.to_string()))
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
