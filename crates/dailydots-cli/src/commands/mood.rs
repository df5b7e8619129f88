//! Mood command handler

use anyhow::Result;

use crate::output::Output;

/// List the available moods
pub fn list(output: &Output) -> Result<()> {
    output.print_moods();
    Ok(())
}
