//! Interactive editing support
//!
//! Opens $EDITOR for writing entry content and prompts for confirmation.

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::process::Command;

/// Prefix of template lines that are dropped from edited text
const COMMENT_PREFIX: &str = "<!--";

/// Open content in the user's preferred editor
///
/// Uses $EDITOR, $VISUAL, or falls back to common editors.
pub fn edit_text(initial_content: &str) -> Result<String> {
    let editor = find_editor()?;

    let temp_path = env::temp_dir().join(format!("dailydots_entry_{}.md", std::process::id()));

    fs::write(&temp_path, initial_content)
        .with_context(|| format!("Failed to create temp file: {:?}", temp_path))?;

    let status = Command::new(&editor)
        .arg(&temp_path)
        .status()
        .with_context(|| format!("Failed to run editor: {}", editor))?;

    if !status.success() {
        let _ = fs::remove_file(&temp_path);
        bail!(
            "Editor '{}' exited with non-zero status. Check that your editor is configured correctly.",
            editor
        );
    }

    let content = fs::read_to_string(&temp_path)
        .with_context(|| format!("Failed to read edited file: {:?}", temp_path))?;

    let _ = fs::remove_file(&temp_path);

    Ok(content)
}

/// Build the editor template: comment header followed by the current text
pub fn entry_template(heading: &str, content: &str) -> String {
    format!(
        "{} {} -->\n{} Lines starting with '{}' are ignored -->\n\n{}",
        COMMENT_PREFIX, heading, COMMENT_PREFIX, COMMENT_PREFIX, content
    )
}

/// Remove template comment lines and surrounding whitespace
pub fn strip_comments(edited: &str) -> String {
    edited
        .lines()
        .filter(|line| !line.starts_with(COMMENT_PREFIX))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Find the user's preferred editor
fn find_editor() -> Result<String> {
    if let Ok(editor) = env::var("EDITOR") {
        if !editor.is_empty() {
            return Ok(editor);
        }
    }

    if let Ok(visual) = env::var("VISUAL") {
        if !visual.is_empty() {
            return Ok(visual);
        }
    }

    let common_editors = ["nano", "vim", "vi", "emacs", "notepad"];

    for editor in common_editors {
        if command_exists(editor) {
            return Ok(editor.to_string());
        }
    }

    bail!(
        "No editor found. Set $EDITOR environment variable or pass --content.\n\
         Example: export EDITOR=nano"
    )
}

/// Check if a command exists in PATH
fn command_exists(cmd: &str) -> bool {
    env::var_os("PATH")
        .map(|paths| env::split_paths(&paths).any(|dir| dir.join(cmd).is_file()))
        .unwrap_or(false)
}

/// Prompt for confirmation
///
/// Returns true if user confirms, false otherwise.
/// In non-interactive mode (no TTY), returns false.
pub fn confirm(prompt: &str) -> Result<bool> {
    if !atty::is(atty::Stream::Stdin) {
        return Ok(false);
    }

    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let input = input.trim().to_lowercase();
    Ok(input == "y" || input == "yes")
}
